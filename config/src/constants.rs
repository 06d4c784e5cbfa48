//! # Configuration Constants
//!
//! Centralized constants for the borehole mesh pipeline. Tolerances, default
//! peridynamic factors, the reference scenario and safety limits are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Peridynamics**: Default horizon and fracture-zone factors
//! - **Reference Scenario**: Dimensions of the reference borehole (metres)
//! - **Units**: Conversion factors between length units
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing derived lengths.
///
/// Used when checking whether the horizon is an integer multiple of the
/// lattice spacing. It is never applied to the inclusion predicates, which
/// compare exactly.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_TOLERANCE;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON_TOLERANCE
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// PERIDYNAMIC CONSTANTS
// =============================================================================

/// Default horizon expressed as a multiple of the lattice spacing.
///
/// The peridynamic solver interacts each node with its neighbours inside the
/// horizon; three lattice spacings is the customary choice.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HORIZON_FACTOR;
///
/// let spacing = 0.5;
/// assert_eq!(DEFAULT_HORIZON_FACTOR * spacing, 1.5);
/// ```
pub const DEFAULT_HORIZON_FACTOR: f64 = 3.0;

/// Default height of the fracture (injection) zone as a multiple of the
/// lattice spacing.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FRACTURE_ZONE_FACTOR;
///
/// let spacing = 0.45;
/// let zone = DEFAULT_FRACTURE_ZONE_FACTOR * spacing;
/// assert!(zone > spacing);
/// ```
pub const DEFAULT_FRACTURE_ZONE_FACTOR: f64 = 6.0;

/// Default number of lattice layers around the wellbore that receive the
/// injection boundary condition.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FRACTURE_LAYER_COUNT;
///
/// let user_layers: Option<u32> = None;
/// assert_eq!(user_layers.unwrap_or(DEFAULT_FRACTURE_LAYER_COUNT), 3);
/// ```
pub const DEFAULT_FRACTURE_LAYER_COUNT: u32 = 3;

/// Default material block tag applied to every node.
///
/// Block numbering in the downstream solver starts at 1.
pub const DEFAULT_BLOCK_ID: u32 = 1;

// =============================================================================
// REFERENCE SCENARIO (metres)
// =============================================================================

/// Height of the reference borehole domain.
pub const REFERENCE_HEIGHT: f64 = 4.0;

/// Outer radius of the reference borehole domain.
pub const REFERENCE_OUTER_RADIUS: f64 = 15.0;

/// Wellbore radius of the reference scenario.
pub const REFERENCE_INNER_RADIUS: f64 = 0.9;

/// Lattice spacing of the reference scenario.
///
/// Slightly above 0.45 so that floor division of the box dimensions never
/// lands on an exact integer after scaling to centimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::{REFERENCE_OUTER_RADIUS, REFERENCE_SPACING};
///
/// let count = ((2.0 * REFERENCE_OUTER_RADIUS) / REFERENCE_SPACING).floor();
/// assert_eq!(count, 66.0);
/// ```
pub const REFERENCE_SPACING: f64 = 0.450001;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Conversion factor from metres to centimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::CENTIMETERS_PER_METER;
///
/// let height_cm = 4.0 * CENTIMETERS_PER_METER;
/// assert_eq!(height_cm, 400.0);
/// ```
pub const CENTIMETERS_PER_METER: f64 = 100.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of lattice candidates a single generation may visit.
///
/// Safety limit to prevent runaway memory and time from a tiny spacing over a
/// large domain. Callers may override it per run.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LATTICE_POINTS;
///
/// let candidates: usize = 66 * 66 * 8;
/// assert!(candidates < MAX_LATTICE_POINTS);
/// ```
pub const MAX_LATTICE_POINTS: usize = 200_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the default horizon for a lattice spacing.
///
/// # Example
///
/// ```rust
/// use config::constants::default_horizon;
///
/// assert_eq!(default_horizon(2.0), 6.0);
/// ```
#[inline]
pub fn default_horizon(spacing: f64) -> f64 {
    DEFAULT_HORIZON_FACTOR * spacing
}

/// Computes the default fracture zone height for a lattice spacing.
///
/// # Example
///
/// ```rust
/// use config::constants::default_fracture_zone_height;
///
/// assert_eq!(default_fracture_zone_height(0.5), 3.0);
/// ```
#[inline]
pub fn default_fracture_zone_height(spacing: f64) -> f64 {
    DEFAULT_FRACTURE_ZONE_FACTOR * spacing
}

/// Returns true when `length` is an integer multiple of `unit` within
/// [`EPSILON_TOLERANCE`] (relative to `unit`).
///
/// # Example
///
/// ```rust
/// use config::constants::is_multiple_of;
///
/// assert!(is_multiple_of(1.35, 0.45));
/// assert!(!is_multiple_of(1.0, 0.45));
/// ```
pub fn is_multiple_of(length: f64, unit: f64) -> bool {
    if unit <= 0.0 {
        return false;
    }
    let ratio = length / unit;
    (ratio - ratio.round()).abs() < EPSILON_TOLERANCE * ratio.abs().max(1.0)
}
