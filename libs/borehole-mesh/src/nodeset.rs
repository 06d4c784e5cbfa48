//! # Nodesets
//!
//! Named, ordered lists of node ids that the solver uses to apply boundary
//! conditions. Membership is decided by [`crate::classify`]; this module only
//! stores the ids.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::classify::Classification;
use crate::node::NodeId;

/// The five nodesets produced for every discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodesetKind {
    /// Every retained node.
    Full,
    /// Nodes with z >= 0.
    Upper,
    /// Nodes with z < 0.
    Lower,
    /// Wellbore band where the injection pressure pulse is applied.
    Injection,
    /// Outer shell where the in-situ stress is applied.
    Boundary,
}

impl NodesetKind {
    /// Every kind, in listing order.
    pub const ALL: [NodesetKind; 5] = [
        NodesetKind::Full,
        NodesetKind::Upper,
        NodesetKind::Lower,
        NodesetKind::Injection,
        NodesetKind::Boundary,
    ];

    /// Canonical name of the nodeset.
    pub fn name(self) -> &'static str {
        match self {
            NodesetKind::Full => "nodeset_full",
            NodesetKind::Upper => "nodeset_upper",
            NodesetKind::Lower => "nodeset_lower",
            NodesetKind::Injection => "nodeset_injection",
            NodesetKind::Boundary => "nodeset_boundary",
        }
    }
}

impl fmt::Display for NodesetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Node ids grouped by nodeset, each list in generation order.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{generate, MeshParams, NodesetKind};
///
/// let mesh = generate(&MeshParams::new(2.0, 3.0, 0.5, 0.5)).unwrap();
/// let full = mesh.nodesets.get(NodesetKind::Full);
/// assert_eq!(full.len(), mesh.nodes.len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Nodesets {
    full: Vec<NodeId>,
    upper: Vec<NodeId>,
    lower: Vec<NodeId>,
    injection: Vec<NodeId>,
    boundary: Vec<NodeId>,
}

impl Nodesets {
    /// Creates empty nodesets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty nodesets; `full` is pre-allocated for `node_count` ids.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            full: Vec::with_capacity(node_count),
            ..Self::default()
        }
    }

    /// Appends `id` to every nodeset its classification selects.
    pub(crate) fn record(&mut self, id: NodeId, class: Classification) {
        self.full.push(id);
        if class.upper {
            self.upper.push(id);
        } else {
            self.lower.push(id);
        }
        if class.injection {
            self.injection.push(id);
        }
        if class.boundary {
            self.boundary.push(id);
        }
    }

    /// Ids of one nodeset.
    pub fn get(&self, kind: NodesetKind) -> &[NodeId] {
        match kind {
            NodesetKind::Full => &self.full,
            NodesetKind::Upper => &self.upper,
            NodesetKind::Lower => &self.lower,
            NodesetKind::Injection => &self.injection,
            NodesetKind::Boundary => &self.boundary,
        }
    }

    /// Every nodeset in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (NodesetKind, &[NodeId])> + '_ {
        NodesetKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Nodesets keyed by canonical name.
    pub fn by_name(&self) -> BTreeMap<&'static str, &[NodeId]> {
        self.iter().map(|(kind, ids)| (kind.name(), ids)).collect()
    }

    /// Number of ids in each nodeset.
    pub fn counts(&self) -> BTreeMap<NodesetKind, usize> {
        self.iter().map(|(kind, ids)| (kind, ids.len())).collect()
    }

    /// True when no node was retained.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}
