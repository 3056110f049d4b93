//! # Constants and type definitions for parallax-horizons
//!
//! This module centralizes the **grid parameters**, **observability limits**, and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Distance-grid bounds and sampling
//! - Observable apparent magnitude window of the survey
//! - Relative parallax accuracy thresholds defining the horizons
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the photometric relations, the
//! astrometric error models, and the horizon scan.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in parsecs
pub type Parsec = f64;
/// Magnitude (apparent or absolute, any photometric band)
pub type Magnitude = f64;
/// Angle in microarcseconds
pub type MicroArcsec = f64;
/// Spectral type code (e.g. "G2V", "M0III")
pub type SptCode = String;

// -------------------------------------------------------------------------------------------------
// Distance grid
// -------------------------------------------------------------------------------------------------

/// Base-10 exponent of the nearest grid distance (10 pc)
pub const MIN_LOG_DISTANCE: f64 = 1.0;

/// Base-10 exponent of the farthest grid distance (10^6 pc)
pub const MAX_LOG_DISTANCE: f64 = 6.0;

/// Number of samples in the logarithmic distance grid
pub const GRID_SAMPLES: usize = 10_001;

// -------------------------------------------------------------------------------------------------
// Observability and accuracy
// -------------------------------------------------------------------------------------------------

/// Bright end of the observable window in apparent G magnitude
pub const BRIGHT_LIMIT_G: Magnitude = 5.7;

/// Faint end of the observable window in apparent G magnitude
pub const FAINT_LIMIT_G: Magnitude = 20.0;

/// Relative parallax accuracy thresholds defining the horizons, tightest first
pub const ACCURACY_THRESHOLDS: [f64; 3] = [0.001, 0.01, 0.1];

/// Microarcseconds per arcsecond; the true parallax of a source at `d` pc is `1e6 / d` µas
pub const MICROARCSEC_PER_ARCSEC: f64 = 1.0e6;

/// Spectral types charted by the default analysis
pub const DEFAULT_SPECTRAL_TYPES: [&str; 6] = ["B0I", "B1V", "G2V", "M0V", "M6V", "M0III"];
