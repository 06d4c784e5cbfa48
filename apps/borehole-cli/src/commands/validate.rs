//! Parameter validation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use borehole_mesh::lattice::LatticeDims;
use clap::Args;
use tracing::{info, warn};

use super::load_params;

/// Validation arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Parameter file (JSON); the reference scenario is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Runs the validate command.
pub fn execute(args: ValidateArgs) -> Result<()> {
    let params = load_params(args.config.as_deref())?;
    let resolved = params.resolved().context("invalid mesh parameters")?;

    let lattice = LatticeDims::for_params(&resolved);
    info!(
        nx = lattice.nx,
        ny = lattice.ny,
        nz = lattice.nz,
        candidates = lattice.candidate_count(),
        "parameters are valid"
    );
    if lattice.is_empty() {
        warn!("spacing exceeds a domain dimension; the mesh will be empty");
    }

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
