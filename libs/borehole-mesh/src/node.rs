//! # Node
//!
//! A lattice point retained inside the borehole domain.

use glam::DVec3;
use serde::Serialize;

/// Identifier of a node, 1-based and dense in generation order.
pub type NodeId = u32;

/// One retained lattice point.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::Node;
/// use glam::DVec3;
///
/// let node = Node::new(1, DVec3::new(1.0, 2.0, 3.0), 1, 0.125);
/// assert_eq!(node.z(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    /// Position in the node listing, starting at 1.
    pub id: NodeId,
    /// Cell-centre coordinates.
    pub position: DVec3,
    /// Material block tag.
    pub block_id: u32,
    /// Volume represented by the node.
    pub volume: f64,
}

impl Node {
    /// Creates a node.
    pub fn new(id: NodeId, position: DVec3, block_id: u32, volume: f64) -> Self {
        Self {
            id,
            position,
            block_id,
            volume,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}
