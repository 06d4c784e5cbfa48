use approx::assert_relative_eq;
use borehole_mesh::export::{export_to_dir, NodeFormat, NODE_FILE_NAME};
use borehole_mesh::{generate, MeshParams, NodesetKind};

#[test]
fn reference_scenario_in_centimetres() {
    let mesh = generate(&MeshParams::reference()).unwrap();

    assert_eq!(
        [mesh.lattice.nx, mesh.lattice.ny, mesh.lattice.nz],
        [66, 66, 8]
    );
    assert_eq!(mesh.node_count(), 27_744);

    let counts = mesh.nodesets.counts();
    assert_eq!(counts[&NodesetKind::Injection], 408);
    assert_eq!(counts[&NodesetKind::Boundary], 4_656);
    assert_eq!(counts[&NodesetKind::Upper], 13_872);
    assert_eq!(counts[&NodesetKind::Lower], 13_872);

    let first = mesh.nodes[0];
    assert_relative_eq!(first.x(), -217.49715, max_relative = 1e-9);
    assert_relative_eq!(first.y(), -1477.49995, max_relative = 1e-9);
    assert_relative_eq!(first.z(), -177.49995, max_relative = 1e-9);
    assert_relative_eq!(first.volume, 45.0001_f64.powi(3), max_relative = 1e-12);
    assert_eq!(first.block_id, 1);
}

#[test]
fn reference_listing_uses_two_decimals() {
    let mesh = generate(&MeshParams::reference()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    export_to_dir(dir.path(), &mesh, &NodeFormat::default()).unwrap();

    let listing = std::fs::read_to_string(dir.path().join(NODE_FILE_NAME)).unwrap();
    let first = listing.lines().next().unwrap();
    assert_eq!(first, "-217.50  -1477.50  -177.50  1  91125.61");
}
