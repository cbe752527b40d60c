//! # orbitsim
//!
//! Fixed-step simulation of bodies orbiting a fixed central mass in the plane.
//!
//! Each body feels only the attraction of the central mass. Every step computes all
//! accelerations from pre-step positions, advances each body with semi-implicit Euler and
//! appends the new state to the body's trajectory. Finished trajectories can be read directly,
//! exported to CSV ([`export`]) or checked for energy conservation ([`diagnostics`]).
//!
//! ```rust
//! use orbitsim::ScenarioConfig;
//!
//! let mut scenario = ScenarioConfig::inner_planets().build().unwrap();
//! scenario.run().unwrap();
//!
//! for (name, trajectory) in scenario.simulation.trajectories() {
//!     assert_eq!(trajectory.len(), 731, "{name}");
//! }
//! ```
//!
//! Feature flags
//! -----------------
//! * `parallel` – evaluate per-body accelerations with rayon. Results are identical to the
//!   sequential path.
pub mod body;
pub mod central_mass;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod export;
pub mod force_model;
pub mod integrator;
pub mod params;
pub mod sim_errors;
pub mod simulation;
pub mod trajectory;

pub use body::Body;
pub use central_mass::CentralMass;
pub use config::{Scenario, ScenarioConfig};
pub use force_model::{CentralGravity, ForceModel};
pub use params::SimulationParams;
pub use sim_errors::SimError;
pub use simulation::{Simulation, SimulationStatus};
pub use trajectory::{BodyState, Trajectory};
