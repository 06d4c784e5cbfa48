//! # Error Types
//!
//! Error types for mesh generation. Invalid configuration is always reported
//! before any lattice traversal starts.
//!
//! ## Error Policy
//!
//! - An empty lattice is a valid result, never an error
//! - Parameter errors name the offending field and value
//! - I/O and JSON failures from the collaborators are wrapped, not stringified

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while configuring, generating or exporting a mesh.
///
/// ## Example
///
/// ```rust
/// use borehole_mesh::{MeshError, MeshParams};
///
/// let params = MeshParams::new(4.0, 1.0, 2.0, 0.1);
/// match params.validate() {
///     Err(MeshError::InvalidRadii { inner, outer }) => assert!(inner >= outer),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A length parameter is zero, negative or not finite.
    #[error("Invalid parameter '{name}': must be positive and finite, got {value}")]
    InvalidParameter {
        /// Name of the configuration field
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The wellbore does not fit inside the outer radius.
    #[error("Inner radius {inner} must be smaller than outer radius {outer}")]
    InvalidRadii {
        /// Wellbore radius
        inner: f64,
        /// Outer domain radius
        outer: f64,
    },

    /// The injection zone must span at least one lattice layer.
    #[error("Fracture layer count must be at least 1, got {0}")]
    InvalidLayerCount(u32),

    /// Block ids start at 1 in the downstream solver.
    #[error("Block id must be at least 1, got {0}")]
    InvalidBlockId(u32),

    /// The unit scale factor is zero, negative or not finite.
    #[error("Invalid unit scale for '{unit}': {scale}")]
    InvalidUnitScale {
        /// Label of the unit system
        unit: String,
        /// Offending scale factor
        scale: f64,
    },

    /// The lattice would visit more candidates than allowed.
    #[error("Too many lattice points: {count} (max: {max})")]
    LatticeTooLarge {
        /// Number of candidates the lattice would visit
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter JSON could not be parsed.
    #[error("Invalid parameter file: {0}")]
    Json(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Returns true if the error was raised by parameter validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::InvalidRadii { .. }
                | Self::InvalidLayerCount(_)
                | Self::InvalidBlockId(_)
                | Self::InvalidUnitScale { .. }
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
