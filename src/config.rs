//! # Scenario configuration
//!
//! A thin, `serde`-deserializable description of a run, loaded from YAML and turned into a
//! ready-to-run [`Scenario`]. A scenario consists of:
//!
//! - [`CentralMassConfig`] – mass and (optional, default origin) position of the attractor,
//! - [`BodyConfig`] – name and initial state of each orbiting body,
//! - [`ParametersConfig`] – time step, run length, `G` and start epoch, all optional.
//!
//! # YAML format
//!
//! ```yaml
//! central:
//!   mass: 1.9e30
//!   position: [0.0, 0.0]     # optional
//!
//! parameters:                # optional block, every field has a default
//!   time_step: 86400.0       # seconds
//!   steps: 730
//!   gravitational_constant: 6.6743e-11
//!   start_epoch: "2000-01-01T12:00:00 UTC"
//!
//! bodies:
//!   - name: earth
//!     position: [1.5e11, 0.0]
//!     velocity: [0.0, 29290.0]
//!     mass: 6.0e24
//! ```
//!
//! All validation happens in [`ScenarioConfig::build`]; parsing only checks the shape of the
//! document.
use std::{fs::File, io, io::BufReader, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    body::Body,
    central_mass::CentralMass,
    constants::{Vec2, AU, DEFAULT_STEPS, DEFAULT_TIME_STEP, GRAVITATIONAL_CONSTANT, SUN_MASS},
    params::SimulationParams,
    sim_errors::SimError,
    simulation::Simulation,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CentralMassConfig {
    pub mass: f64,
    #[serde(default)]
    pub position: [f64; 2],
}

/// Initial state of a single body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub position: [f64; 2], // meters
    pub velocity: [f64; 2], // meters per second
    pub mass: f64,          // kilograms
}

/// Run parameters; missing fields fall back to the crate defaults
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub time_step: f64,
    pub steps: usize,
    pub gravitational_constant: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_epoch: Option<String>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        ParametersConfig {
            time_step: DEFAULT_TIME_STEP,
            steps: DEFAULT_STEPS,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            start_epoch: None,
        }
    }
}

/// Top-level scenario loaded from YAML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub central: CentralMassConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

/// A validated simulation together with the number of steps it should run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub steps: usize,
}

impl Scenario {
    /// Run the configured number of steps.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.simulation.run(self.steps)
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, SimError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path.as_ref())?;
        let cfg = Self::from_reader(BufReader::new(file))?;
        debug!(
            "loaded scenario from {} ({} bodies)",
            path.as_ref().display(),
            cfg.bodies.len()
        );
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String, SimError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration and build the runtime [`Scenario`].
    ///
    /// Return
    /// ----------
    /// * The scenario, or the first configuration error found: invalid central mass, invalid
    ///   body mass or state, `steps == 0`, invalid time step, `G` or epoch, duplicate names.
    pub fn build(&self) -> Result<Scenario, SimError> {
        let central = CentralMass::new(
            self.central.mass,
            Vec2::new(self.central.position[0], self.central.position[1]),
        )?;

        let bodies = self
            .bodies
            .iter()
            .map(|bc| {
                Body::new(
                    bc.name.clone(),
                    Vec2::new(bc.position[0], bc.position[1]),
                    Vec2::new(bc.velocity[0], bc.velocity[1]),
                    bc.mass,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let p = &self.parameters;
        if p.steps == 0 {
            return Err(SimError::ZeroSteps);
        }

        let mut builder = SimulationParams::builder()
            .time_step(p.time_step)
            .gravitational_constant(p.gravitational_constant);
        if let Some(epoch) = &p.start_epoch {
            builder = builder.start_epoch_str(epoch)?;
        }

        Ok(Scenario {
            simulation: Simulation::new(central, bodies, builder.build()?)?,
            steps: p.steps,
        })
    }

    /// Mercury, Venus, Earth and Mars around a 1.9e30 kg sun, two years of daily steps.
    ///
    /// Bodies start on the +x axis at 0.4, 0.7, 1.0 and 1.5 AU (AU = 1.5e11 m) with purely
    /// tangential velocities.
    pub fn inner_planets() -> Self {
        const PLANETS: [(&str, f64, f64, f64); 4] = [
            // name, distance (AU), vy (m/s), mass (kg)
            ("mercury", 0.4, 47_360.0, 3.28e23),
            ("venus", 0.7, 35_000.0, 4.87e24),
            ("earth", 1.0, 29_290.0, 6e24),
            ("mars", 1.5, 24_000.0, 3.4e23),
        ];

        ScenarioConfig {
            central: CentralMassConfig {
                mass: SUN_MASS,
                position: [0.0, 0.0],
            },
            parameters: ParametersConfig::default(),
            bodies: PLANETS
                .iter()
                .map(|&(name, dist, vy, mass)| BodyConfig {
                    name: name.to_string(),
                    position: [dist * AU, 0.0],
                    velocity: [0.0, vy],
                    mass,
                })
                .collect(),
        }
    }
}
