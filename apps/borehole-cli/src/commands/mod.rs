//! Subcommand implementations.

pub mod generate;
pub mod reference;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use borehole_mesh::MeshParams;
use tracing::info;

/// Loads parameters from `path`, or falls back to the reference scenario.
pub(crate) fn load_params(path: Option<&Path>) -> Result<MeshParams> {
    match path {
        Some(path) => MeshParams::from_json_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display())),
        None => {
            info!("no parameter file given, using the reference scenario");
            Ok(MeshParams::reference())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_reference() {
        assert_eq!(load_params(None).unwrap(), MeshParams::reference());
    }

    #[test]
    fn test_unreadable_file_reports_path() {
        let err = load_params(Some(Path::new("/nonexistent/params.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/params.json"));
    }
}
