//! Tests for lattice counts, coordinates and traversal order.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_counts_truncate() {
    assert_eq!(axis_count(30.0, 9.0), 3);
    assert_eq!(axis_count(30.0, 10.0), 3);
    assert_eq!(axis_count(30.0, 0.45), 66);
    assert_eq!(axis_count(4.0, 0.45), 8);
}

#[test]
fn test_counts_degenerate() {
    assert_eq!(axis_count(2.0, 3.0), 0);
    assert_eq!(axis_count(f64::NAN, 1.0), 0);
}

#[test]
fn test_dims_for_cylinder() {
    let dims = LatticeDims::new(BoundingBox::enclosing_cylinder(4.0, 15.0), 0.45);
    assert_eq!((dims.nx, dims.ny, dims.nz), (66, 66, 8));
    assert_eq!(dims.count(Axis::Z), 8);
    assert_eq!(dims.layer_size(), 66 * 66);
    assert_eq!(dims.candidate_count(), 66 * 66 * 8);
    assert!(!dims.is_empty());
}

#[test]
fn test_dims_empty_when_spacing_exceeds_height() {
    let dims = LatticeDims::new(BoundingBox::enclosing_cylinder(1.0, 15.0), 2.0);
    assert_eq!(dims.nz, 0);
    assert!(dims.is_empty());
    assert_eq!(dims.candidate_count(), 0);
    assert_eq!(dims.points().count(), 0);
}

#[test]
fn test_candidate_count_saturates() {
    let dims = LatticeDims {
        nx: usize::MAX,
        ny: 2,
        nz: 2,
        spacing: 1.0,
        bounds: BoundingBox::new(DVec3::ONE),
    };
    assert_eq!(dims.candidate_count(), usize::MAX);
}

#[test]
fn test_coordinates_are_cell_centred() {
    let dims = LatticeDims::new(BoundingBox::new(DVec3::new(30.0, 30.0, 4.0)), 9.0);
    // Three points along x: -10.5, -1.5, 7.5; the last layer of 3 units is dropped
    assert_relative_eq!(dims.coordinate(Axis::X, 0), -10.5);
    assert_relative_eq!(dims.coordinate(Axis::X, 1), -1.5);
    assert_relative_eq!(dims.coordinate(Axis::X, 2), 7.5);
}

#[test]
fn test_points_stay_inside_box() {
    let dims = LatticeDims::new(BoundingBox::enclosing_cylinder(4.0, 3.0), 0.7);
    let (min, max) = (dims.bounds.min(), dims.bounds.max());
    for p in dims.points() {
        assert!(p.cmpgt(min).all() && p.cmplt(max).all(), "{p} escapes the box");
    }
}

#[test]
fn test_traversal_is_z_major() {
    let dims = LatticeDims::new(BoundingBox::new(DVec3::new(2.0, 2.0, 2.0)), 1.0);
    let points: Vec<DVec3> = dims.points().collect();
    assert_eq!(
        points,
        vec![
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(-0.5, 0.5, -0.5),
            DVec3::new(0.5, 0.5, -0.5),
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
        ]
    );
}

#[test]
fn test_point_matches_traversal() {
    let dims = LatticeDims::new(BoundingBox::enclosing_cylinder(3.0, 2.0), 1.0);
    let mut expected = Vec::new();
    for k in 0..dims.nz {
        for j in 0..dims.ny {
            for i in 0..dims.nx {
                expected.push(dims.point(i, j, k));
            }
        }
    }
    assert_eq!(dims.points().collect::<Vec<_>>(), expected);
}
