//! # Central-body gravity
//!
//! Acceleration sources for the engine. A [`ForceModel`] maps the pre-step position and mass of
//! one body, together with the fixed [`CentralMass`], to an acceleration vector. Implementations
//! are pure: they read their inputs and never mutate anything, which is what lets the
//! [`Simulation`](crate::simulation::Simulation) evaluate bodies independently (and in parallel
//! with the `parallel` feature).
//!
//! ## Force law
//!
//! [`CentralGravity`] evaluates, with `Δ = x_body − x_central`:
//!
//! ```text
//! r  = (Δx² + Δy²)^(3/2)
//! F  = −G · M · m / r
//! a  = F · Δ / m
//! ```
//!
//! Since `(Δx² + Δy²)^(3/2) = |Δ|³`, this is the usual vector form `a = −G M Δ / |Δ|³`,
//! pointing from the body toward the central mass. The body mass cancels out but is kept in
//! the computation so results match the reference formula bit for bit.
//!
//! A body sitting exactly on the central mass (`r == 0`) makes the law undefined and yields
//! [`SimError::ZeroSeparation`]; no softening or substitute value is applied.
use crate::{
    central_mass::CentralMass,
    constants::{Kilogram, Vec2, GRAVITATIONAL_CONSTANT},
    sim_errors::SimError,
};

/// Source of the acceleration acting on one body.
///
/// `Send + Sync` so bodies can be evaluated concurrently with the `parallel` feature.
pub trait ForceModel: Send + Sync {
    /// Acceleration in m/s² felt by a body of mass `mass` at `position`.
    fn acceleration(
        &self,
        position: &Vec2,
        mass: Kilogram,
        central: &CentralMass,
    ) -> Result<Vec2, SimError>;
}

/// Newtonian attraction toward a fixed central mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralGravity {
    pub gravitational_constant: f64,
}

impl CentralGravity {
    pub fn new(gravitational_constant: f64) -> Self {
        CentralGravity {
            gravitational_constant,
        }
    }
}

impl Default for CentralGravity {
    fn default() -> Self {
        CentralGravity::new(GRAVITATIONAL_CONSTANT)
    }
}

impl ForceModel for CentralGravity {
    fn acceleration(
        &self,
        position: &Vec2,
        mass: Kilogram,
        central: &CentralMass,
    ) -> Result<Vec2, SimError> {
        let delta = position - central.position();
        let r = (delta.x * delta.x + delta.y * delta.y).powf(1.5);
        if r == 0.0 {
            return Err(SimError::ZeroSeparation);
        }

        let force = -self.gravitational_constant * central.mass() * mass / r;
        Ok(Vec2::new(force * delta.x / mass, force * delta.y / mass))
    }
}
