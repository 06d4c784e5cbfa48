//! # Export
//!
//! Flat text listings consumed by the peridynamic solver: one file with a
//! line per node (`x y z block volume`) and one file per nodeset with a node
//! id per line. The generator owns the numbers; formatting lives here.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::MeshResult;
use crate::generate::Discretization;
use crate::node::{Node, NodeId};
use crate::nodeset::NodesetKind;

/// File name of the node listing.
pub const NODE_FILE_NAME: &str = "uniform_cylinder.txt";

/// Solver-facing file name of a nodeset listing.
///
/// The numbered names are the ones existing solver input decks reference.
pub fn nodeset_file_name(kind: NodesetKind) -> &'static str {
    match kind {
        NodesetKind::Injection => "nodeset1.txt",
        NodesetKind::Boundary => "nodeset2.txt",
        NodesetKind::Upper => "nodeset3.txt",
        NodesetKind::Lower => "nodeset4.txt",
        NodesetKind::Full => "nodeset_full.txt",
    }
}

/// Number formatting for the node listing.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::export::NodeFormat;
///
/// let format = NodeFormat::default();
/// assert_eq!(format.float(1.0), "1.00");
/// assert_eq!(format.float(-375.0), "-375.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFormat {
    /// Minimum field width of floating-point fields.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
    /// Separator between fields.
    pub delimiter: String,
}

impl NodeFormat {
    /// Default layout with a custom precision.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Formats a floating-point field.
    pub fn float(&self, value: f64) -> String {
        format!(
            "{value:>width$.precision$}",
            width = self.width,
            precision = self.precision
        )
    }

    /// Formats one node line, without the trailing newline.
    pub fn node_line(&self, node: &Node) -> String {
        let d = &self.delimiter;
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.float(node.x()),
            self.float(node.y()),
            self.float(node.z()),
            node.block_id,
            self.float(node.volume),
        )
    }
}

impl Default for NodeFormat {
    fn default() -> Self {
        Self {
            width: 4,
            precision: 2,
            delimiter: "  ".to_string(),
        }
    }
}

/// Writes one line per node.
pub fn write_nodes<W: Write>(
    writer: &mut W,
    nodes: &[Node],
    format: &NodeFormat,
) -> MeshResult<()> {
    for node in nodes {
        writeln!(writer, "{}", format.node_line(node))?;
    }
    Ok(())
}

/// Writes one node id per line.
pub fn write_nodeset<W: Write>(writer: &mut W, ids: &[NodeId]) -> MeshResult<()> {
    for id in ids {
        writeln!(writer, "{id}")?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> MeshResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> MeshResult<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the node listing and every nodeset listing into `dir`.
///
/// The directory is created if missing. Returns the written paths, node
/// listing first, then nodesets in [`NodesetKind::ALL`] order.
///
/// # Example
///
/// ```rust,no_run
/// use borehole_mesh::export::{export_to_dir, NodeFormat};
/// use borehole_mesh::{generate, MeshParams};
///
/// let mesh = generate(&MeshParams::reference()).unwrap();
/// let files = export_to_dir("out", &mesh, &NodeFormat::default()).unwrap();
/// assert_eq!(files.len(), 6);
/// ```
pub fn export_to_dir(
    dir: impl AsRef<Path>,
    mesh: &Discretization,
    format: &NodeFormat,
) -> MeshResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(1 + NodesetKind::ALL.len());

    let node_path = dir.join(NODE_FILE_NAME);
    write_file(&node_path, |w| write_nodes(w, &mesh.nodes, format))?;
    written.push(node_path);

    for (kind, ids) in mesh.nodesets.iter() {
        let path = dir.join(nodeset_file_name(kind));
        write_file(&path, |w| write_nodeset(w, ids))?;
        written.push(path);
    }

    info!(
        dir = %dir.display(),
        files = written.len(),
        nodes = mesh.node_count(),
        "exported borehole mesh"
    );
    Ok(written)
}

#[cfg(test)]
mod tests;
