//! Fixed gravitational source at the center of the system.
use crate::{
    constants::{Kilogram, Vec2},
    sim_errors::SimError,
};

/// Immovable attracting mass. The simulation never models its own motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMass {
    mass: Kilogram,
    position: Vec2,
}

impl CentralMass {
    /// Central mass at `position`. Fails on a non-positive or non-finite mass or position.
    pub fn new(mass: Kilogram, position: Vec2) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidCentralMass(mass));
        }
        if !position.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteCentralPosition);
        }
        Ok(CentralMass { mass, position })
    }

    /// Central mass at the origin.
    pub fn at_origin(mass: Kilogram) -> Result<Self, SimError> {
        CentralMass::new(mass, Vec2::zeros())
    }

    pub fn mass(&self) -> Kilogram {
        self.mass
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}
