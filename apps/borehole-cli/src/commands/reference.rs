//! Prints the reference parameters.

use anyhow::Result;
use borehole_mesh::MeshParams;

/// Writes the reference scenario as JSON to stdout.
pub fn execute() -> Result<()> {
    println!("{}", MeshParams::reference().to_json_string()?);
    Ok(())
}
