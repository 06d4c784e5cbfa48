//! # Lattice
//!
//! Uniform cell-centred lattice over the bounding prism of the borehole.
//!
//! Counts per axis are obtained by floor division of the box dimension by the
//! spacing. A partially filled last layer is dropped rather than rounded up,
//! and every lattice point sits half a spacing inside the box faces.

use glam::DVec3;
use serde::Serialize;

use crate::params::ResolvedParams;

/// Lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Axis-aligned prism centred at the origin.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::lattice::BoundingBox;
///
/// let bbox = BoundingBox::enclosing_cylinder(4.0, 15.0);
/// assert_eq!(bbox.extent.x, 30.0);
/// assert_eq!(bbox.min().z, -2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Full edge lengths along x, y and z.
    pub extent: DVec3,
}

impl BoundingBox {
    /// Creates a box with the given edge lengths.
    pub fn new(extent: DVec3) -> Self {
        Self { extent }
    }

    /// Smallest prism containing a cylinder of the given height and radius
    /// whose axis is z.
    pub fn enclosing_cylinder(height: f64, radius: f64) -> Self {
        let diameter = 2.0 * radius;
        Self::new(DVec3::new(diameter, diameter, height))
    }

    /// Negative corner.
    pub fn min(&self) -> DVec3 {
        -self.extent / 2.0
    }

    /// Positive corner.
    pub fn max(&self) -> DVec3 {
        self.extent / 2.0
    }

    /// Edge length along `axis`.
    pub fn dimension(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.extent.x,
            Axis::Y => self.extent.y,
            Axis::Z => self.extent.z,
        }
    }
}

/// Number of lattice points along an axis of length `dimension`.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::lattice::axis_count;
///
/// // 30 / 9 = 3.33, the partial fourth layer is dropped
/// assert_eq!(axis_count(30.0, 9.0), 3);
/// assert_eq!(axis_count(1.0, 2.0), 0);
/// ```
#[inline]
pub fn axis_count(dimension: f64, spacing: f64) -> usize {
    // `as` saturates, so NaN or negative quotients become 0.
    (dimension / spacing).floor() as usize
}

/// Lattice counts and geometry derived from a bounding box and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeDims {
    /// Points along x.
    pub nx: usize,
    /// Points along y.
    pub ny: usize,
    /// Points along z.
    pub nz: usize,
    /// Lattice pitch.
    pub spacing: f64,
    /// Box the lattice fills.
    pub bounds: BoundingBox,
}

impl LatticeDims {
    /// Builds the lattice filling `bounds` at the given pitch.
    pub fn new(bounds: BoundingBox, spacing: f64) -> Self {
        Self {
            nx: axis_count(bounds.extent.x, spacing),
            ny: axis_count(bounds.extent.y, spacing),
            nz: axis_count(bounds.extent.z, spacing),
            spacing,
            bounds,
        }
    }

    /// Lattice over the prism enclosing the borehole.
    pub fn for_params(params: &ResolvedParams) -> Self {
        let bounds = BoundingBox::enclosing_cylinder(params.height, params.outer_radius);
        Self::new(bounds, params.spacing)
    }

    /// Point count along `axis`.
    pub fn count(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Points in one z-layer, saturating on overflow.
    pub fn layer_size(&self) -> usize {
        self.nx.saturating_mul(self.ny)
    }

    /// Total number of candidates, saturating on overflow.
    pub fn candidate_count(&self) -> usize {
        self.layer_size().saturating_mul(self.nz)
    }

    /// True when some axis has no lattice points.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0 || self.nz == 0
    }

    /// Coordinate of the `index`-th lattice point along `axis`.
    ///
    /// Computed as `-dimension/2 + spacing/2 + index*spacing`.
    #[inline]
    pub fn coordinate(&self, axis: Axis, index: usize) -> f64 {
        let dimension = self.bounds.dimension(axis);
        (-dimension / 2.0 + self.spacing / 2.0) + index as f64 * self.spacing
    }

    /// Position of lattice point `(i, j, k)` (x, y, z indices).
    #[inline]
    pub fn point(&self, i: usize, j: usize, k: usize) -> DVec3 {
        DVec3::new(
            self.coordinate(Axis::X, i),
            self.coordinate(Axis::Y, j),
            self.coordinate(Axis::Z, k),
        )
    }

    /// Lattice points of z-layer `k` in traversal order (y, then x).
    pub fn layer(&self, k: usize) -> impl Iterator<Item = DVec3> + '_ {
        let z = self.coordinate(Axis::Z, k);
        (0..self.ny).flat_map(move |j| {
            let y = self.coordinate(Axis::Y, j);
            (0..self.nx).map(move |i| DVec3::new(self.coordinate(Axis::X, i), y, z))
        })
    }

    /// Every lattice point in traversal order (z, then y, then x).
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.nz).flat_map(move |k| self.layer(k))
    }
}

#[cfg(test)]
mod tests;
