//! # Geometry Helpers
//!
//! Distance utilities used by the classification predicates.

use glam::DVec3;

/// Euclidean distance between two points.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::geometry::distance;
/// use glam::DVec3;
///
/// let d = distance(DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Projection of `point` onto the cylinder axis (the z axis).
#[inline]
pub fn axis_projection(point: DVec3) -> DVec3 {
    DVec3::new(0.0, 0.0, point.z)
}

/// Distance from `point` to the cylinder axis.
///
/// The height coordinate never contributes: inclusion in the annulus is a
/// planar radial test.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::geometry::radial_distance;
/// use glam::DVec3;
///
/// assert_eq!(radial_distance(DVec3::new(3.0, 4.0, -100.0)), 5.0);
/// ```
#[inline]
pub fn radial_distance(point: DVec3) -> f64 {
    distance(axis_projection(point), point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_is_symmetric() {
        let a = DVec3::new(1.0, -2.0, 3.0);
        let b = DVec3::new(-4.0, 0.5, 2.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_distance_is_three_dimensional() {
        let d = distance(DVec3::new(1.0, 2.0, 2.0), DVec3::ZERO);
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_radial_distance_ignores_height() {
        let low = radial_distance(DVec3::new(0.6, 0.8, -7.5));
        let high = radial_distance(DVec3::new(0.6, 0.8, 7.5));
        assert_eq!(low, high);
        assert_relative_eq!(low, 1.0);
    }

    #[test]
    fn test_radial_distance_on_axis_is_zero() {
        assert_eq!(radial_distance(DVec3::new(0.0, 0.0, 42.0)), 0.0);
    }
}
