//! # Constants and type definitions for orbitsim
//!
//! This module centralizes the **physical constants**, **default run parameters** and
//! **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Gravitational constant and length scales
//! - Default fixed time step (one day)
//! - Unit-carrying type aliases and the planar vector type
//!
//! Nothing here is read implicitly by the engine: the gravitational constant is handed to the
//! [`CentralGravity`](crate::force_model::CentralGravity) model through
//! [`SimulationParams`](crate::params::SimulationParams).

use nalgebra::Vector2;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Newtonian constant of gravitation in m³·kg⁻¹·s⁻² (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Astronomical unit in meters, rounded as used by the built-in scenarios
pub const AU: f64 = 1.5e11;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Default fixed integration step: one day
pub const DEFAULT_TIME_STEP: Second = SECONDS_PER_DAY;

/// Default run length: two years of daily steps
pub const DEFAULT_STEPS: usize = 730;

/// Solar mass used by the built-in scenarios, in kilograms
pub const SUN_MASS: Kilogram = 1.9e30;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in meters
pub type Meter = f64;
/// Mass in kilograms
pub type Kilogram = f64;
/// Duration in seconds
pub type Second = f64;

/// Planar vector (position in m, velocity in m/s or acceleration in m/s²)
pub type Vec2 = Vector2<f64>;
