//! # Mesh Parameters
//!
//! User-facing configuration for a borehole discretization. Parameters are
//! supplied in input units, validated eagerly and then resolved into concrete
//! output-unit values that the generator consumes.

use std::fs;
use std::path::Path;

use config::constants::{
    default_fracture_zone_height, default_horizon, is_multiple_of, CENTIMETERS_PER_METER,
    DEFAULT_BLOCK_ID, DEFAULT_FRACTURE_LAYER_COUNT, REFERENCE_HEIGHT, REFERENCE_INNER_RADIUS,
    REFERENCE_OUTER_RADIUS, REFERENCE_SPACING,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MeshError, MeshResult};

fn default_block_id() -> u32 {
    DEFAULT_BLOCK_ID
}

fn default_layer_count() -> u32 {
    DEFAULT_FRACTURE_LAYER_COUNT
}

/// Unit system for the supplied lengths.
///
/// Every length in [`MeshParams`] is multiplied by `scale` before generation,
/// so node coordinates and volumes come out in `unit`.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::UnitSystem;
///
/// let units = UnitSystem::centimeters_from_meters();
/// assert_eq!(units.apply(4.0), 400.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitSystem {
    /// Label of the output length unit.
    pub unit: String,
    /// Factor converting input lengths to `unit`.
    pub scale: f64,
}

impl UnitSystem {
    /// Creates a unit system with an explicit scale factor.
    pub fn new(unit: impl Into<String>, scale: f64) -> Self {
        Self {
            unit: unit.into(),
            scale,
        }
    }

    /// Lengths are used as given.
    pub fn identity(unit: impl Into<String>) -> Self {
        Self::new(unit, 1.0)
    }

    /// Input in metres, output in centimetres.
    pub fn centimeters_from_meters() -> Self {
        Self::new("cm", CENTIMETERS_PER_METER)
    }

    /// Converts an input length to the output unit.
    #[inline]
    pub fn apply(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Checks that the scale factor is usable.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MeshError::InvalidUnitScale {
                unit: self.unit.clone(),
                scale: self.scale,
            });
        }
        Ok(())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::identity("m")
    }
}

/// Geometric and physical parameters of a borehole discretization.
///
/// `horizon` and `fracture_zone_height` are optional and default to three and
/// six lattice spacings respectively.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::MeshParams;
///
/// let params = MeshParams::new(4.0, 15.0, 0.9, 0.45)
///     .with_fracture_zone(6.0 * 0.45, 3)
///     .with_block_id(2);
/// let resolved = params.resolved().unwrap();
/// assert_eq!(resolved.block_id, 2);
/// assert!((resolved.horizon - 1.35).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeshParams {
    /// Height of the cylinder along z.
    pub height: f64,
    /// Outer radius of the rock domain.
    pub outer_radius: f64,
    /// Wellbore radius.
    pub inner_radius: f64,
    /// Lattice pitch.
    pub spacing: f64,
    /// Peridynamic horizon; thickness of the boundary shell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<f64>,
    /// Material block tag applied to every node.
    #[serde(default = "default_block_id")]
    pub block_id: u32,
    /// Height of the band around z = 0 where injection is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fracture_zone_height: Option<f64>,
    /// Number of lattice layers beyond the wellbore wall in the injection zone.
    #[serde(default = "default_layer_count")]
    pub fracture_layer_count: u32,
    /// Unit system of the lengths above.
    #[serde(default)]
    pub units: UnitSystem,
}

impl MeshParams {
    /// Creates parameters with default horizon, fracture zone, block and units.
    pub fn new(height: f64, outer_radius: f64, inner_radius: f64, spacing: f64) -> Self {
        Self {
            height,
            outer_radius,
            inner_radius,
            spacing,
            horizon: None,
            block_id: DEFAULT_BLOCK_ID,
            fracture_zone_height: None,
            fracture_layer_count: DEFAULT_FRACTURE_LAYER_COUNT,
            units: UnitSystem::default(),
        }
    }

    /// The reference borehole: 4 m tall, 15 m outer radius, 0.9 m wellbore,
    /// generated in centimetres.
    pub fn reference() -> Self {
        Self::new(
            REFERENCE_HEIGHT,
            REFERENCE_OUTER_RADIUS,
            REFERENCE_INNER_RADIUS,
            REFERENCE_SPACING,
        )
        .with_units(UnitSystem::centimeters_from_meters())
    }

    /// Overrides the horizon.
    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the material block tag.
    pub fn with_block_id(mut self, block_id: u32) -> Self {
        self.block_id = block_id;
        self
    }

    /// Sets the fracture zone height and layer count.
    pub fn with_fracture_zone(mut self, height: f64, layer_count: u32) -> Self {
        self.fracture_zone_height = Some(height);
        self.fracture_layer_count = layer_count;
        self
    }

    /// Sets the unit system.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Parses parameters from a JSON document.
    pub fn from_json_str(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> MeshResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the parameters as pretty-printed JSON.
    pub fn to_json_string(&self) -> MeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the parameters without resolving them.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidUnitScale`] for a bad scale factor
    /// - [`MeshError::InvalidParameter`] for a non-positive or non-finite length
    /// - [`MeshError::InvalidRadii`] when the wellbore does not fit
    /// - [`MeshError::InvalidLayerCount`] / [`MeshError::InvalidBlockId`] for zero tags
    pub fn validate(&self) -> MeshResult<()> {
        self.units.validate()?;

        let mut lengths = vec![
            ("height", self.height),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("spacing", self.spacing),
        ];
        if let Some(horizon) = self.horizon {
            lengths.push(("horizon", horizon));
        }
        if let Some(zone) = self.fracture_zone_height {
            lengths.push(("fracture_zone_height", zone));
        }
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_parameter(name, value));
            }
        }

        if self.inner_radius >= self.outer_radius {
            return Err(MeshError::InvalidRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if self.fracture_layer_count == 0 {
            return Err(MeshError::InvalidLayerCount(self.fracture_layer_count));
        }
        if self.block_id == 0 {
            return Err(MeshError::InvalidBlockId(self.block_id));
        }
        Ok(())
    }

    /// Validates, applies defaults and converts every length to output units.
    pub fn resolved(&self) -> MeshResult<ResolvedParams> {
        self.validate()?;

        let horizon = self.horizon.unwrap_or_else(|| default_horizon(self.spacing));
        let zone = self
            .fracture_zone_height
            .unwrap_or_else(|| default_fracture_zone_height(self.spacing));
        if !is_multiple_of(horizon, self.spacing) {
            warn!(
                horizon,
                spacing = self.spacing,
                "horizon is not an integer multiple of the lattice spacing"
            );
        }

        let units = &self.units;
        let spacing = units.apply(self.spacing);
        Ok(ResolvedParams {
            height: units.apply(self.height),
            outer_radius: units.apply(self.outer_radius),
            inner_radius: units.apply(self.inner_radius),
            spacing,
            horizon: units.apply(horizon),
            block_id: self.block_id,
            fracture_zone_height: units.apply(zone),
            fracture_layer_count: self.fracture_layer_count,
            volume: spacing * spacing * spacing,
        })
    }
}

/// Fully concrete parameters in output units.
///
/// Produced by [`MeshParams::resolved`]; the generator assumes the values
/// passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedParams {
    /// Height of the cylinder along z.
    pub height: f64,
    /// Outer radius of the rock domain.
    pub outer_radius: f64,
    /// Wellbore radius.
    pub inner_radius: f64,
    /// Lattice pitch.
    pub spacing: f64,
    /// Boundary shell thickness.
    pub horizon: f64,
    /// Material block tag.
    pub block_id: u32,
    /// Height of the injection band around z = 0.
    pub fracture_zone_height: f64,
    /// Lattice layers beyond the wellbore wall in the injection zone.
    pub fracture_layer_count: u32,
    /// Volume carried by every node (spacing cubed).
    pub volume: f64,
}

impl ResolvedParams {
    /// Largest radial distance that still belongs to the injection zone.
    #[inline]
    pub fn injection_radius(&self) -> f64 {
        self.inner_radius + f64::from(self.fracture_layer_count) * self.spacing
    }

    /// Smallest radial distance that belongs to the boundary shell.
    #[inline]
    pub fn boundary_radius(&self) -> f64 {
        self.outer_radius - self.horizon
    }

    /// Half of the fracture zone height.
    #[inline]
    pub fn injection_half_height(&self) -> f64 {
        self.fracture_zone_height / 2.0
    }
}
