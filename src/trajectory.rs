//! # Body state and trajectory logs
//!
//! [`BodyState`] is the kinematic state of one orbiting body: a planar position and velocity.
//! [`Trajectory`] is the append-only, time-ordered log of those states, one entry per executed
//! step plus the initial condition at index 0.
//!
//! Trajectories are written only by the integrator
//! ([`integrator::advance`](crate::integrator::advance)); everything else sees them read-only.
//!
//! ## Consumer view
//!
//! External consumers (plotting, animation, export) read a trajectory either as
//! [`BodyState`] samples or as flat `(x, y, vx, vy)` tuples:
//!
//! ```rust
//! use orbitsim::constants::Vec2;
//! use orbitsim::trajectory::{BodyState, Trajectory};
//!
//! let traj = Trajectory::new(BodyState::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0)));
//! assert_eq!(traj.as_tuples(), vec![(1.0, 0.0, 0.0, 2.0)]);
//! ```
use std::ops::Index;

use crate::constants::Vec2;

/// Kinematic state of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Position in meters
    pub position: Vec2,
    /// Velocity in meters per second
    pub velocity: Vec2,
}

impl BodyState {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        BodyState { position, velocity }
    }

    /// Flatten into `(x, y, vx, vy)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
        )
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }
}

/// Append-only history of a body's states.
///
/// Never empty: it is created with the initial condition and only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<BodyState>,
}

impl Trajectory {
    /// Start a trajectory from its initial condition (index 0).
    pub fn new(initial: BodyState) -> Self {
        Trajectory {
            samples: vec![initial],
        }
    }

    /// Reserve room for `additional` more samples.
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    pub(crate) fn push(&mut self, state: BodyState) {
        self.samples.push(state);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BodyState> {
        self.samples.get(index)
    }

    pub fn initial(&self) -> &BodyState {
        &self.samples[0]
    }

    pub fn latest(&self) -> &BodyState {
        &self.samples[self.samples.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BodyState> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[BodyState] {
        &self.samples
    }

    /// Full history as `(x, y, vx, vy)` tuples, index 0 being the initial condition.
    pub fn as_tuples(&self) -> Vec<(f64, f64, f64, f64)> {
        self.samples.iter().map(BodyState::as_tuple).collect()
    }

    /// Positions only, in order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.samples.iter().map(|s| s.position)
    }
}

impl Index<usize> for Trajectory {
    type Output = BodyState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a BodyState;
    type IntoIter = std::slice::Iter<'a, BodyState>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(x: f64) -> BodyState {
        BodyState::new(Vec2::new(x, 0.0), Vec2::new(0.0, x))
    }

    #[test]
    fn test_trajectory_starts_with_initial_state() {
        let traj = Trajectory::new(state(1.0));
        assert_eq!(traj.len(), 1);
        assert!(!traj.is_empty());
        assert_eq!(traj.initial(), &state(1.0));
        assert_eq!(traj.latest(), &state(1.0));
    }

    #[test]
    fn test_trajectory_appends_in_order() {
        let mut traj = Trajectory::new(state(1.0));
        traj.reserve(2);
        traj.push(state(2.0));
        traj.push(state(3.0));

        assert_eq!(traj.len(), 3);
        assert_eq!(traj[1], state(2.0));
        assert_eq!(traj.latest(), &state(3.0));
        assert_eq!(traj.get(3), None);

        let xs: Vec<f64> = traj.positions().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(traj.as_tuples()[2], (3.0, 0.0, 0.0, 3.0));
    }

    #[test]
    fn test_state_finiteness() {
        assert!(state(1.0).is_finite());
        let bad = BodyState::new(Vec2::new(f64::NAN, 0.0), Vec2::zeros());
        assert!(!bad.is_finite());
    }
}
