//! # Borehole Mesh
//!
//! Peridynamic point-cloud generation for a borehole in rock. A uniform
//! cell-centred lattice is laid over the prism enclosing a hollow cylinder,
//! points inside the annulus become nodes, and each node is sorted into the
//! nodesets the solver uses to apply boundary conditions.
//!
//! ## Architecture
//!
//! ```text
//! MeshParams → resolved() → LatticeDims → classify() per point → Discretization → export
//! ```
//!
//! ## Nodesets
//!
//! - **Full**: every node
//! - **Upper / Lower**: z >= 0 and z < 0 halves
//! - **Injection**: wellbore band receiving the pressure pulse
//! - **Boundary**: outer shell, one horizon thick, receiving the in-situ stress
//!
//! ## Usage
//!
//! ```rust
//! use borehole_mesh::{generate, MeshParams, NodesetKind};
//!
//! let params = MeshParams::new(4.0, 15.0, 0.9, 0.45).with_fracture_zone(6.0 * 0.45, 3);
//! let mesh = generate(&params)?;
//!
//! assert_eq!(mesh.nodesets.get(NodesetKind::Full).len(), mesh.nodes.len());
//! # Ok::<(), borehole_mesh::MeshError>(())
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod generate;
pub mod geometry;
pub mod lattice;
pub mod node;
pub mod nodeset;
pub mod params;

pub use error::{MeshError, MeshResult};
pub use generate::{
    discretize, generate, generate_with, Discretization, DiscretizationStats, GenerateOptions,
};
pub use node::{Node, NodeId};
pub use nodeset::{NodesetKind, Nodesets};
pub use params::{MeshParams, ResolvedParams, UnitSystem};
