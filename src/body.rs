//! # Orbiting bodies
//!
//! A [`Body`] couples an immutable identity (name, mass) with a mutable kinematic
//! [`BodyState`] and the [`Trajectory`] recording every state it has been in.
//!
//! ## Invariants
//!
//! * `mass > 0` and finite, checked by [`Body::new`] and never mutated afterwards.
//! * The initial state is finite.
//! * `trajectory().len() == steps executed + 1`; the latest trajectory sample is always the
//!   current state.
//!
//! The name carries no physical meaning; it only identifies the body in outputs and
//! error reports.
use crate::{
    constants::{Kilogram, Vec2},
    sim_errors::SimError,
    trajectory::{BodyState, Trajectory},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: Kilogram,
    state: BodyState,
    trajectory: Trajectory,
}

impl Body {
    /// Create a body from its initial condition.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: Identifier used in outputs and error reports.
    /// * `position`: Initial position in meters.
    /// * `velocity`: Initial velocity in meters per second.
    /// * `mass`: Mass in kilograms, strictly positive.
    ///
    /// Return
    /// ----------
    /// * The body, with a one-entry trajectory holding the initial condition, or
    ///   [`SimError::InvalidBodyMass`] / [`SimError::NonFiniteState`].
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        mass: Kilogram,
    ) -> Result<Self, SimError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidBodyMass { name, mass });
        }

        let state = BodyState::new(position, velocity);
        if !state.is_finite() {
            return Err(SimError::NonFiniteState(name));
        }

        Ok(Body {
            name,
            mass,
            state,
            trajectory: Trajectory::new(state),
        })
    }

    /// Convenience constructor from scalar components `(x, y, vx, vy)`.
    pub fn from_components(
        name: impl Into<String>,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        mass: Kilogram,
    ) -> Result<Self, SimError> {
        Body::new(name, Vec2::new(x, y), Vec2::new(vx, vy), mass)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> Kilogram {
        self.mass
    }

    pub fn state(&self) -> &BodyState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Replace the current state and log it. Only the integrator commits states.
    pub(crate) fn commit(&mut self, state: BodyState) {
        self.state = state;
        self.trajectory.push(state);
    }

    pub(crate) fn reserve_steps(&mut self, steps: usize) {
        self.trajectory.reserve(steps);
    }
}
