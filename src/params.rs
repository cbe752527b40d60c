//! # Simulation run parameters
//!
//! [`SimulationParams`] groups the numerical and physical settings that stay fixed for the whole
//! run:
//!
//! * `time_step` – fixed integration step in seconds (default one day, 86 400 s),
//! * `gravitational_constant` – `G` handed to the force model (default CODATA 2018),
//! * `start_epoch` – epoch of trajectory index 0, used to timestamp exported samples
//!   (default J2000, 2000-01-01T12:00:00 UTC).
//!
//! The run length is not a parameter of the simulation itself; it is the argument of
//! [`Simulation::run`](crate::simulation::Simulation::run).
//!
//! ## Builder
//!
//! ```rust
//! use orbitsim::params::SimulationParams;
//!
//! let params = SimulationParams::builder()
//!     .time_step(3_600.0)
//!     .start_epoch_str("2024-03-20T03:06:00 UTC")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(params.time_step, 3_600.0);
//! ```
use std::{cmp::Ordering::Greater, fmt, str::FromStr};

use hifitime::{Duration, Epoch};

use crate::{
    constants::{Second, DEFAULT_TIME_STEP, GRAVITATIONAL_CONSTANT},
    sim_errors::SimError,
};

/// Fixed settings of a simulation run.
///
/// Defaults
/// -----------------
/// * `time_step`: 86 400 s
/// * `gravitational_constant`: 6.674 30e-11 m³·kg⁻¹·s⁻²
/// * `start_epoch`: J2000 (2000-01-01T12:00:00 UTC)
///
/// Validation
/// -----------------
/// * `time_step > 0` and finite.
/// * `gravitational_constant > 0` and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub time_step: Second,
    pub gravitational_constant: f64,
    pub start_epoch: Epoch,
}

impl SimulationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`SimulationParamsBuilder`] initialized with the defaults.
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::new()
    }

    /// Epoch of trajectory index `step`: `start_epoch + step · time_step`.
    pub fn epoch_at(&self, step: usize) -> Epoch {
        self.start_epoch + Duration::from_seconds(step as f64 * self.time_step)
    }

    /// Check the invariants listed on [`SimulationParams`].
    pub fn validate(&self) -> Result<(), SimError> {
        if !gt0(self.time_step) || !self.time_step.is_finite() {
            return Err(SimError::InvalidTimeStep(self.time_step));
        }
        if !gt0(self.gravitational_constant) || !self.gravitational_constant.is_finite() {
            return Err(SimError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            time_step: DEFAULT_TIME_STEP,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            start_epoch: j2000(),
        }
    }
}

/// J2000 reference epoch.
pub fn j2000() -> Epoch {
    Epoch::from_gregorian_utc_at_noon(2000, 1, 1)
}

/// Parse an epoch string such as `"2000-01-01T12:00:00 UTC"`.
pub fn parse_epoch(s: &str) -> Result<Epoch, SimError> {
    Epoch::from_str(s.trim()).map_err(|e| SimError::InvalidEpoch(format!("{s}: {e}")))
}

/// Return true iff x > 0.0 and comparable (i.e., not NaN).
#[inline]
fn gt0(x: f64) -> bool {
    x.partial_cmp(&0.0) == Some(Greater)
}

/// Builder for [`SimulationParams`], with validation.
#[derive(Debug, Clone)]
pub struct SimulationParamsBuilder {
    params: SimulationParams,
}

impl Default for SimulationParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SimulationParams::default(),
        }
    }

    pub fn time_step(mut self, v: Second) -> Self {
        self.params.time_step = v;
        self
    }
    pub fn gravitational_constant(mut self, v: f64) -> Self {
        self.params.gravitational_constant = v;
        self
    }
    pub fn start_epoch(mut self, v: Epoch) -> Self {
        self.params.start_epoch = v;
        self
    }

    /// Set the start epoch from a string; fails with [`SimError::InvalidEpoch`].
    pub fn start_epoch_str(mut self, v: &str) -> Result<Self, SimError> {
        self.params.start_epoch = parse_epoch(v)?;
        Ok(self)
    }

    /// Finalize the builder, applying [`SimulationParams::validate`].
    pub fn build(self) -> Result<SimulationParams, SimError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl fmt::Display for SimulationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 44;
            writeln!(f, "Simulation Parameters")?;
            writeln!(f, "---------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!("time_step              = {:.1} s", self.time_step, "Fixed integration step")?;
            line!(
                "gravitational_constant = {:.5e}",
                self.gravitational_constant,
                "G in m^3 kg^-1 s^-2"
            )?;
            line!("start_epoch            = {}", self.start_epoch, "Epoch of index 0")?;
            Ok(())
        } else {
            write!(
                f,
                "SimulationParams(time_step={:.1}s, G={:.5e}, start={})",
                self.time_step, self.gravitational_constant, self.start_epoch
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = SimulationParams::default();
        assert_eq!(p.time_step, 86_400.0);
        assert_eq!(p.gravitational_constant, GRAVITATIONAL_CONSTANT);
        assert_eq!(p.start_epoch, j2000());
        assert!(p.validate().is_ok());
        assert_eq!(SimulationParams::builder().build().unwrap(), p);
    }

    #[test]
    fn test_builder_rejects_bad_time_step() {
        for dt in [0.0, -86_400.0, f64::NAN, f64::INFINITY] {
            let err = SimulationParams::builder().time_step(dt).build().unwrap_err();
            assert!(err.is_configuration_error());
            assert!(matches!(err, SimError::InvalidTimeStep(_)));
        }
    }

    #[test]
    fn test_builder_rejects_bad_gravitational_constant() {
        let err = SimulationParams::builder()
            .gravitational_constant(-1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, SimError::InvalidGravitationalConstant(-1.0));
    }

    #[test]
    fn test_epoch_at_counts_whole_steps() {
        let p = SimulationParams::default();
        assert_eq!(p.epoch_at(0), j2000());
        let two_days = p.epoch_at(2) - p.start_epoch;
        assert_eq!(two_days, Duration::from_seconds(2.0 * 86_400.0));
    }

    #[test]
    fn test_invalid_epoch_string() {
        let err = SimulationParams::builder()
            .start_epoch_str("not an epoch")
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidEpoch(_)));
    }

    #[test]
    fn test_display() {
        let p = SimulationParams::default();
        let short = format!("{p}");
        assert!(short.starts_with("SimulationParams(time_step=86400.0s"));
        let table = format!("{p:#}");
        assert!(table.contains("Simulation Parameters"));
        assert!(table.contains("Fixed integration step"));
    }
}
