//! # Constants and type definitions for PrayTimes
//!
//! This module centralizes the **astronomical constants**, the **unit aliases**
//! and the fixed defaults shared by the solver, the high-latitude corrector and
//! the formatter.
//!
//! ## Overview
//!
//! - Epoch and refraction constants of the low-precision solar model
//! - Unit aliases used in signatures across the crate
//! - Initial hour-of-day guesses fed to the first refinement pass
//! - Rendering defaults (invalid-time sentinel, am/pm suffixes)

// -------------------------------------------------------------------------------------------------
// Astronomical constants
// -------------------------------------------------------------------------------------------------

/// Julian day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000: f64 = 2_451_545.0;

/// Apparent sun radius plus standard refraction at the horizon, in degrees
pub const RISE_SET_ANGLE: f64 = 0.833;

/// Horizon dip coefficient, degrees per square root of a meter of elevation
pub const ELEVATION_DIP: f64 = 0.0347;

/// Degrees of hour angle covered by the sun in one hour
pub const DEGREES_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Time of day in fractional hours
pub type Hour = f64;
/// Duration in minutes
pub type Minute = f64;
/// Elevation above sea level in meters
pub type Meter = f64;
/// Julian day number (days)
pub type JulianDay = f64;

// -------------------------------------------------------------------------------------------------
// Solver and rendering defaults
// -------------------------------------------------------------------------------------------------

/// Initial guesses (hour of day) in [`Prayer::ALL`](crate::events::Prayer::ALL) order.
/// Midnight is derived from the other events, its guess is never solved.
pub const INITIAL_GUESSES: [Hour; 9] = [5.0, 5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0, 0.0];

/// Number of refinement passes run by default
pub const DEFAULT_ITERATIONS: usize = 1;

/// Rendering of a time that does not exist for the given place and date
pub const INVALID_TIME: &str = "-----";

/// Suffixes appended by the 12-hour format (before noon, after noon)
pub const TIME_SUFFIXES: [&str; 2] = ["am", "pm"];
