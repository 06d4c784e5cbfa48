//! # Config Crate
//!
//! Centralized configuration constants for the borehole mesh pipeline.
//! Default physics factors, reference scenario dimensions, unit conversions
//! and safety limits are defined here so the generator and the CLI never
//! embed literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{default_horizon, DEFAULT_HORIZON_FACTOR, EPSILON_TOLERANCE};
//!
//! let spacing = 0.45;
//! let horizon = default_horizon(spacing);
//! assert!((horizon - DEFAULT_HORIZON_FACTOR * spacing).abs() < EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit-Agnostic**: Lengths are plain numbers; scaling lives in the unit system
//! - **Reference Compatible**: Defaults reproduce the reference borehole scenario

pub mod constants;
