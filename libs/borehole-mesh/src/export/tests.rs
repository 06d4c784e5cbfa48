//! Tests for node and nodeset listings.

use super::*;
use crate::generate::generate;
use crate::params::MeshParams;
use glam::DVec3;

fn node(id: NodeId, x: f64, y: f64, z: f64) -> Node {
    Node::new(id, DVec3::new(x, y, z), 1, 91125.0)
}

#[test]
fn test_node_line_layout() {
    let format = NodeFormat::default();
    let line = format.node_line(&node(1, -1477.5, 22.5, -180.0));
    assert_eq!(line, "-1477.50  22.50  -180.00  1  91125.00");
}

#[test]
fn test_float_is_padded_to_width() {
    let format = NodeFormat {
        width: 8,
        precision: 1,
        delimiter: ",".to_string(),
    };
    assert_eq!(format.float(2.75), "     2.8");
    assert_eq!(
        format.node_line(&node(3, 0.5, -0.5, 1.0)),
        "     0.5,    -0.5,     1.0,1, 91125.0"
    );
}

#[test]
fn test_write_nodes() {
    let nodes = [node(1, 1.0, 2.0, 3.0), node(2, -1.0, -2.0, -3.0)];
    let mut out = Vec::new();
    write_nodes(&mut out, &nodes, &NodeFormat::with_precision(1)).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        " 1.0   2.0   3.0  1  91125.0\n-1.0  -2.0  -3.0  1  91125.0\n"
    );
}

#[test]
fn test_write_nodeset() {
    let mut out = Vec::new();
    write_nodeset(&mut out, &[1, 5, 42]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n5\n42\n");

    let mut out = Vec::new();
    write_nodeset(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_nodeset_file_names_are_distinct() {
    let mut names: Vec<&str> = NodesetKind::ALL.iter().map(|k| nodeset_file_name(*k)).collect();
    names.push(NODE_FILE_NAME);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 6);
    assert_eq!(nodeset_file_name(NodesetKind::Injection), "nodeset1.txt");
}

#[test]
fn test_export_to_dir() {
    let mesh = generate(&MeshParams::new(2.0, 4.0, 1.0, 0.5)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("mesh");

    let files = export_to_dir(&target, &mesh, &NodeFormat::default()).unwrap();
    assert_eq!(files.len(), 6);
    assert_eq!(files[0], target.join(NODE_FILE_NAME));

    let nodes = fs::read_to_string(&files[0]).unwrap();
    assert_eq!(nodes.lines().count(), mesh.node_count());
    for line in nodes.lines() {
        assert_eq!(line.split("  ").count(), 5, "bad line {line:?}");
    }

    for (kind, ids) in mesh.nodesets.iter() {
        let listing = fs::read_to_string(target.join(nodeset_file_name(kind))).unwrap();
        let parsed: Vec<NodeId> = listing.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(parsed, ids, "{kind} listing differs");
    }
}
