#![allow(dead_code)]
use approx::assert_relative_eq;
use orbitsim::{Body, BodyState, CentralMass, Simulation, SimulationParams};

pub fn sun() -> CentralMass {
    CentralMass::at_origin(1.9e30).unwrap()
}

pub fn earth() -> Body {
    Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap()
}

/// The four inner planets on the +x axis, as in the built-in preset.
pub fn inner_planets() -> Vec<Body> {
    vec![
        Body::from_components("mercury", 0.4 * 1.5e11, 0.0, 0.0, 47_360.0, 3.28e23).unwrap(),
        Body::from_components("venus", 0.7 * 1.5e11, 0.0, 0.0, 35_000.0, 4.87e24).unwrap(),
        earth(),
        Body::from_components("mars", 1.5 * 1.5e11, 0.0, 0.0, 24_000.0, 3.4e23).unwrap(),
    ]
}

pub fn daily_simulation(bodies: Vec<Body>) -> Simulation {
    Simulation::new(sun(), bodies, SimulationParams::default()).unwrap()
}

pub fn assert_state_close(actual: &BodyState, expected: &BodyState, max_relative: f64) {
    assert_relative_eq!(
        actual.position.x,
        expected.position.x,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.position.y,
        expected.position.y,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.velocity.x,
        expected.velocity.x,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.velocity.y,
        expected.velocity.y,
        max_relative = max_relative
    );
}
