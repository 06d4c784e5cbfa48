//! # Generation
//!
//! The grid-and-classify pass. Each z-layer of the lattice is scanned on its
//! own (in parallel when enabled), then node ids are assigned by a single
//! ordered fold so ids never depend on scheduling.

use std::collections::BTreeMap;

use config::constants::MAX_LATTICE_POINTS;
use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{classify, Classification};
use crate::error::{MeshError, MeshResult};
use crate::lattice::LatticeDims;
use crate::node::{Node, NodeId};
use crate::nodeset::{NodesetKind, Nodesets};
use crate::params::{MeshParams, ResolvedParams};

/// Execution options that do not change the result.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::GenerateOptions;
///
/// let options = GenerateOptions::sequential().with_max_lattice_points(1_000);
/// assert!(!options.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Upper bound on lattice candidates, checked before traversal.
    pub max_lattice_points: usize,
    /// Scan z-layers on the rayon thread pool.
    pub parallel: bool,
}

impl GenerateOptions {
    /// Options that scan layers on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the candidate limit.
    pub fn with_max_lattice_points(mut self, max: usize) -> Self {
        self.max_lattice_points = max;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_lattice_points: MAX_LATTICE_POINTS,
            parallel: true,
        }
    }
}

/// Nodes and nodesets of one borehole discretization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discretization {
    /// Parameters the mesh was generated with, in output units.
    pub params: ResolvedParams,
    /// Lattice that was traversed.
    pub lattice: LatticeDims,
    /// Retained nodes; `nodes[i].id == i + 1`.
    pub nodes: Vec<Node>,
    /// Node ids grouped by nodeset.
    pub nodesets: Nodesets,
}

impl Discretization {
    /// Number of retained nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when no lattice point fell inside the annulus.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let index = (id as usize).checked_sub(1)?;
        self.nodes.get(index)
    }

    /// Nodes of one nodeset, in nodeset order.
    pub fn nodes_in(&self, kind: NodesetKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodesets
            .get(kind)
            .iter()
            .filter_map(move |&id| self.node(id))
    }

    /// Summary counts for reporting.
    pub fn stats(&self) -> DiscretizationStats {
        DiscretizationStats {
            lattice: [self.lattice.nx, self.lattice.ny, self.lattice.nz],
            candidates: self.lattice.candidate_count(),
            nodes: self.node_count(),
            nodesets: self.nodesets.counts(),
            total_volume: self.node_count() as f64 * self.params.volume,
        }
    }
}

/// Counts describing a discretization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscretizationStats {
    /// Lattice points along x, y and z.
    pub lattice: [usize; 3],
    /// Lattice points visited.
    pub candidates: usize,
    /// Lattice points retained as nodes.
    pub nodes: usize,
    /// Size of every nodeset.
    pub nodesets: BTreeMap<NodesetKind, usize>,
    /// Sum of node volumes.
    pub total_volume: f64,
}

/// Generates the borehole point cloud with default options.
///
/// # Errors
///
/// Returns a validation error for invalid parameters, or
/// [`MeshError::LatticeTooLarge`] if the lattice exceeds
/// [`MAX_LATTICE_POINTS`].
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{generate, MeshParams, NodesetKind};
///
/// let mesh = generate(&MeshParams::new(2.0, 4.0, 1.0, 0.5)).unwrap();
/// assert!(!mesh.is_empty());
/// assert_eq!(mesh.nodes[0].id, 1);
/// assert!(!mesh.nodesets.get(NodesetKind::Boundary).is_empty());
/// ```
pub fn generate(params: &MeshParams) -> MeshResult<Discretization> {
    generate_with(params, &GenerateOptions::default())
}

/// Generates the borehole point cloud with explicit options.
pub fn generate_with(
    params: &MeshParams,
    options: &GenerateOptions,
) -> MeshResult<Discretization> {
    let resolved = params.resolved()?;
    discretize(&resolved, options)
}

/// Runs the grid-and-classify pass over already resolved parameters.
pub fn discretize(
    params: &ResolvedParams,
    options: &GenerateOptions,
) -> MeshResult<Discretization> {
    let lattice = LatticeDims::for_params(params);
    let candidates = lattice.candidate_count();
    debug!(
        nx = lattice.nx,
        ny = lattice.ny,
        nz = lattice.nz,
        candidates,
        "lattice dimensions"
    );

    if candidates > options.max_lattice_points {
        return Err(MeshError::LatticeTooLarge {
            count: candidates,
            max: options.max_lattice_points,
        });
    }

    let layers: Vec<Vec<(DVec3, Classification)>> = if options.parallel {
        (0..lattice.nz)
            .into_par_iter()
            .map(|k| scan_layer(&lattice, k, params))
            .collect()
    } else {
        (0..lattice.nz)
            .map(|k| scan_layer(&lattice, k, params))
            .collect()
    };

    let retained: usize = layers.iter().map(Vec::len).sum();
    let mut nodes = Vec::with_capacity(retained);
    let mut nodesets = Nodesets::with_capacity(retained);

    for (position, class) in layers.into_iter().flatten() {
        let id = NodeId::try_from(nodes.len() + 1).map_err(|_| MeshError::LatticeTooLarge {
            count: retained,
            max: NodeId::MAX as usize,
        })?;
        nodes.push(Node::new(id, position, params.block_id, params.volume));
        nodesets.record(id, class);
    }

    info!(
        nodes = nodes.len(),
        injection = nodesets.get(NodesetKind::Injection).len(),
        boundary = nodesets.get(NodesetKind::Boundary).len(),
        "generated borehole mesh"
    );

    Ok(Discretization {
        params: *params,
        lattice,
        nodes,
        nodesets,
    })
}

/// Retained points of z-layer `k`, in traversal order.
fn scan_layer(
    lattice: &LatticeDims,
    k: usize,
    params: &ResolvedParams,
) -> Vec<(DVec3, Classification)> {
    lattice
        .layer(k)
        .filter_map(|point| classify(point, params).map(|class| (point, class)))
        .collect()
}
