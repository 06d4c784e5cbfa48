//! Mesh generation command.
//!
//! Loads parameters, runs the generator and writes the solver listings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use borehole_mesh::export::{export_to_dir, NodeFormat};
use borehole_mesh::{generate_with, GenerateOptions};
use clap::Args;
use tracing::info;

use super::load_params;

/// Generation arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Parameter file (JSON); the reference scenario is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for the node and nodeset listings
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Scan lattice layers on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Maximum number of lattice points to visit
    #[arg(long)]
    pub max_points: Option<usize>,

    /// Digits after the decimal point in the node listing
    #[arg(long, default_value_t = 2)]
    pub precision: usize,

    /// Print the generation statistics as JSON
    #[arg(long)]
    pub stats: bool,
}

/// Runs the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let params = load_params(args.config.as_deref())?;

    let mut options = if args.sequential {
        GenerateOptions::sequential()
    } else {
        GenerateOptions::default()
    };
    if let Some(max) = args.max_points {
        options = options.with_max_lattice_points(max);
    }

    let mesh = generate_with(&params, &options).context("mesh generation failed")?;
    let stats = mesh.stats();
    info!(
        lattice = ?stats.lattice,
        candidates = stats.candidates,
        nodes = stats.nodes,
        unit = %params.units.unit,
        "mesh generated"
    );
    for (kind, count) in &stats.nodesets {
        info!("  {kind}: {count} nodes");
    }

    let format = NodeFormat::with_precision(args.precision);
    let files = export_to_dir(&args.output, &mesh, &format)
        .with_context(|| format!("failed to write listings to {}", args.output.display()))?;
    for file in &files {
        info!("wrote {}", file.display());
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}
