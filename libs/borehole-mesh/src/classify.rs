//! # Classification
//!
//! Geometric predicates deciding whether a lattice point belongs to the
//! borehole domain and which nodesets it joins. All comparisons are exact;
//! no tolerance is applied at the boundaries.

use glam::DVec3;

use crate::geometry::radial_distance;
use crate::params::ResolvedParams;

/// Nodeset membership of a retained point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Distance from the cylinder axis.
    pub radial_distance: f64,
    /// z >= 0; otherwise the point is in the lower half.
    pub upper: bool,
    /// Inside the injection band around the wellbore.
    pub injection: bool,
    /// Inside the outer boundary shell.
    pub boundary: bool,
}

/// Primary inclusion: `inner_radius < d <= outer_radius`.
#[inline]
pub fn in_annulus(radial: f64, params: &ResolvedParams) -> bool {
    radial > params.inner_radius && radial <= params.outer_radius
}

/// Half-space split. A point exactly on z = 0 is upper.
#[inline]
pub fn is_upper(z: f64) -> bool {
    z >= 0.0
}

/// Within `fracture_layer_count` layers of the wellbore wall and strictly
/// inside the fracture band around z = 0.
#[inline]
pub fn in_injection_zone(radial: f64, z: f64, params: &ResolvedParams) -> bool {
    radial <= params.injection_radius() && z.abs() < params.injection_half_height()
}

/// Within one horizon of the outer radius.
#[inline]
pub fn in_boundary_shell(radial: f64, params: &ResolvedParams) -> bool {
    // Upper clause duplicates the annulus bound.
    radial >= params.boundary_radius() && radial <= params.outer_radius
}

/// Classifies a lattice point, returning `None` when it lies outside the
/// annulus.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::classify::classify;
/// use borehole_mesh::MeshParams;
/// use glam::DVec3;
///
/// let params = MeshParams::new(4.0, 10.0, 1.0, 0.5).resolved().unwrap();
/// assert!(classify(DVec3::new(0.5, 0.0, 0.0), &params).is_none());
///
/// let class = classify(DVec3::new(9.5, 0.0, -0.25), &params).unwrap();
/// assert!(class.boundary && !class.upper);
/// ```
pub fn classify(point: DVec3, params: &ResolvedParams) -> Option<Classification> {
    let radial = radial_distance(point);
    if !in_annulus(radial, params) {
        return None;
    }
    Some(Classification {
        radial_distance: radial,
        upper: is_upper(point.z),
        injection: in_injection_zone(radial, point.z, params),
        boundary: in_boundary_shell(radial, params),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MeshParams;

    /// outer 10, inner 1, spacing 0.5, horizon 1.5, zone 3.0 / 3 layers
    fn params() -> ResolvedParams {
        MeshParams::new(4.0, 10.0, 1.0, 0.5)
            .with_fracture_zone(3.0, 3)
            .resolved()
            .unwrap()
    }

    #[test]
    fn test_annulus_bounds() {
        let p = params();
        assert!(!in_annulus(1.0, &p), "inner radius is excluded");
        assert!(in_annulus(1.0 + 1e-9, &p));
        assert!(in_annulus(10.0, &p), "outer radius is included");
        assert!(!in_annulus(10.0 + 1e-9, &p));
    }

    #[test]
    fn test_upper_tie_at_zero() {
        assert!(is_upper(0.0));
        assert!(is_upper(-0.0));
        assert!(!is_upper(-1e-12));
    }

    #[test]
    fn test_injection_zone() {
        let p = params();
        // injection radius = 1 + 3 * 0.5 = 2.5, half height = 1.5
        assert!(in_injection_zone(2.5, 0.0, &p));
        assert!(!in_injection_zone(2.5 + 1e-9, 0.0, &p));
        assert!(in_injection_zone(1.5, -1.49, &p));
        assert!(!in_injection_zone(1.5, 1.5, &p), "band edge is excluded");
        assert!(!in_injection_zone(1.5, -1.5, &p));
    }

    #[test]
    fn test_boundary_shell() {
        let p = params();
        // boundary radius = 10 - 1.5
        assert!(in_boundary_shell(8.5, &p));
        assert!(in_boundary_shell(10.0, &p));
        assert!(!in_boundary_shell(8.49, &p));
        assert!(!in_boundary_shell(10.01, &p));
    }

    #[test]
    fn test_classify_excludes_wellbore_and_outside() {
        let p = params();
        assert!(classify(DVec3::new(0.0, 0.0, 0.0), &p).is_none());
        assert!(classify(DVec3::new(0.0, 1.0, 1.0), &p).is_none());
        assert!(classify(DVec3::new(8.0, 8.0, 0.0), &p).is_none());
    }

    #[test]
    fn test_classify_uses_radial_distance_only() {
        let p = params();
        // Far above the fracture band but still inside the annulus
        let class = classify(DVec3::new(0.0, 2.0, 1.75), &p).unwrap();
        assert_eq!(class.radial_distance, 2.0);
        assert!(class.upper);
        assert!(!class.injection);
        assert!(!class.boundary);
    }

    #[test]
    fn test_classify_membership_is_independent() {
        // A thin annulus where the injection band reaches the boundary shell
        let p = MeshParams::new(2.0, 2.0, 1.0, 0.5)
            .with_fracture_zone(2.0, 3)
            .resolved()
            .unwrap();
        let class = classify(DVec3::new(1.75, 0.0, -0.25), &p).unwrap();
        assert!(class.injection && class.boundary && !class.upper);
    }
}
