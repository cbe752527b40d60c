//! # Energy diagnostics
//!
//! Post-run checks computed from trajectory samples. The mechanical energy of a body in the
//! field of the fixed central mass is
//!
//! ```text
//! E = ½ m |v|² − G M m / |x − x_central|
//! ```
//!
//! Semi-implicit Euler keeps `E` oscillating around its initial value with a bounded
//! amplitude; a drift that keeps growing over a run usually means the kick/drift order was
//! swapped. [`energy_drift`] summarizes that behavior for one body.
use itertools::{Itertools, MinMaxResult};

use crate::{
    body::Body,
    central_mass::CentralMass,
    constants::{Kilogram, Meter},
    force_model::ForceModel,
    simulation::Simulation,
    trajectory::BodyState,
};

/// Kinetic plus potential energy (J) of a body of mass `mass` in `state`.
///
/// Returns `-inf` when the body sits on the central mass.
pub fn mechanical_energy(
    state: &BodyState,
    mass: Kilogram,
    central: &CentralMass,
    gravitational_constant: f64,
) -> f64 {
    let kinetic = 0.5 * mass * state.velocity.norm_squared();
    let distance: Meter = (state.position - central.position()).norm();
    let potential = -gravitational_constant * central.mass() * mass / distance;
    kinetic + potential
}

/// Energy of every sample of `body`'s trajectory, in order.
pub fn energy_series(body: &Body, central: &CentralMass, gravitational_constant: f64) -> Vec<f64> {
    body.trajectory()
        .iter()
        .map(|s| mechanical_energy(s, body.mass(), central, gravitational_constant))
        .collect()
}

/// Summary of the energy excursion along one trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub initial: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    /// `max(|max − initial|, |min − initial|) / |initial|`; infinite or NaN when `initial == 0`.
    pub relative_drift: f64,
}

/// Energy excursion of `body` over its whole trajectory.
///
/// Arguments
/// -----------------
/// * `body`: A body, typically read back from a finished [`Simulation`].
/// * `central`: The central mass it orbited.
/// * `gravitational_constant`: `G` used during the run.
///
/// Return
/// ----------
/// * An [`EnergyReport`]; a one-sample trajectory yields zero drift.
pub fn energy_drift(body: &Body, central: &CentralMass, gravitational_constant: f64) -> EnergyReport {
    let series = energy_series(body, central, gravitational_constant);
    let initial = series[0];
    let last = series[series.len() - 1];

    let (min, max) = match series.iter().copied().minmax() {
        MinMaxResult::NoElements => (initial, initial),
        MinMaxResult::OneElement(e) => (e, e),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let excursion = (max - initial).abs().max((min - initial).abs());
    EnergyReport {
        initial,
        last,
        min,
        max,
        relative_drift: excursion / initial.abs(),
    }
}

/// [`energy_drift`] for every body of a simulation, in body order.
pub fn simulation_energy_drift<F: ForceModel>(sim: &Simulation<F>) -> Vec<(String, EnergyReport)> {
    let g = sim.params().gravitational_constant;
    sim.bodies()
        .iter()
        .map(|b| (b.name().to_string(), energy_drift(b, sim.central(), g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::Vec2, params::SimulationParams};
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_energy() {
        let g = 1.0;
        let central = CentralMass::at_origin(1.0).unwrap();
        // circular speed at r = 1 with G M = 1 is 1, so E = 1/2 - 1 = -1/2 (per unit mass)
        let state = BodyState::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert_relative_eq!(mechanical_energy(&state, 2.0, &central, g), -1.0);
    }

    #[test]
    fn test_single_sample_has_no_drift() {
        let central = CentralMass::at_origin(1.9e30).unwrap();
        let body = Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap();
        let report = energy_drift(&body, &central, 6.674_30e-11);
        assert_eq!(report.initial, report.last);
        assert_eq!(report.min, report.max);
        assert_eq!(report.relative_drift, 0.0);
    }

    #[test]
    fn test_report_for_each_body() {
        let central = CentralMass::at_origin(1.9e30).unwrap();
        let bodies = vec![
            Body::from_components("venus", 1.05e11, 0.0, 0.0, 35_000.0, 4.87e24).unwrap(),
            Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap(),
        ];
        let mut sim = Simulation::new(central, bodies, SimulationParams::default()).unwrap();
        sim.run(5).unwrap();

        let reports = simulation_energy_drift(&sim);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].0, "venus");
        for (_, report) in reports {
            assert!(report.min <= report.initial && report.initial <= report.max);
            assert!(report.relative_drift < 1e-2);
        }
    }
}
