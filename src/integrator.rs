//! Fixed-step semi-implicit (symplectic) Euler integration.
//!
//! The velocity is kicked first, then the position drifts with the **updated** velocity:
//!
//! ```text
//! v' = v + a·dt
//! x' = x + v'·dt
//! ```
//!
//! Using `v` instead of `v'` in the drift would turn this into explicit Euler, whose energy
//! grows without bound on closed orbits.
use crate::{body::Body, constants::Second, constants::Vec2, trajectory::BodyState};

/// Advance `state` by one step of length `dt` under `acceleration`.
pub fn semi_implicit_euler(state: &BodyState, acceleration: &Vec2, dt: Second) -> BodyState {
    let velocity = state.velocity + acceleration * dt;
    let position = state.position + velocity * dt;
    BodyState::new(position, velocity)
}

/// Integrate `body` by one step and append the new state to its trajectory.
pub fn advance(body: &mut Body, acceleration: &Vec2, dt: Second) {
    let next = semi_implicit_euler(body.state(), acceleration, dt);
    body.commit(next);
}
