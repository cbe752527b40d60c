//! # Simulation driver
//!
//! The [`Simulation`] owns one [`CentralMass`] and a fixed, ordered list of [`Body`] values and
//! advances them in lock step with a fixed time step.
//!
//! ## Step semantics
//!
//! Each call to [`Simulation::step`]:
//!
//! 1. evaluates the [`ForceModel`] for every body from its **pre-step** position and the static
//!    central mass (no body sees another body's update of the same step),
//! 2. commits the results in body order through [`integrator::advance`],
//! 3. increments `elapsed_steps` once, after every body has been advanced.
//!
//! With the `parallel` feature the accelerations of step 1 are computed with rayon; the commit
//! of step 2 stays ordered, so both paths produce bit-identical trajectories.
//!
//! ## Failure
//!
//! If the force law fails for one body, the bodies before it in the list keep their advanced
//! state, the step is aborted, `elapsed_steps` is left unchanged and the simulation becomes
//! [`SimulationStatus::Failed`]. The failed state is terminal: [`Simulation::step`] and
//! [`Simulation::run`] reject every later call with [`SimError::SimulationFailed`]. Partial
//! trajectories stay readable for diagnostics.
//!
//! ```text
//!   Ready ──step() ok──▶ Ready
//!     │
//!     └──step() err──▶ Failed (terminal)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use orbitsim::{Body, CentralMass, Simulation, SimulationParams};
//!
//! let sun = CentralMass::at_origin(1.9e30).unwrap();
//! let earth = Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap();
//!
//! let mut sim = Simulation::new(sun, vec![earth], SimulationParams::default()).unwrap();
//! sim.run(365).unwrap();
//!
//! assert_eq!(sim.elapsed_steps(), 365);
//! assert_eq!(sim.body("earth").unwrap().trajectory().len(), 366);
//! ```
use std::collections::HashSet;

use hifitime::Epoch;
use log::{debug, trace, warn};

use crate::{
    body::Body,
    central_mass::CentralMass,
    constants::{Second, Vec2},
    force_model::{CentralGravity, ForceModel},
    integrator,
    params::SimulationParams,
    sim_errors::SimError,
    trajectory::Trajectory,
};

/// Lifecycle state of a [`Simulation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationStatus {
    /// Constructed, zero or more completed steps.
    Ready,
    /// A step failed; `step` is the 0-based index of the step that was being computed.
    Failed {
        body: String,
        index: usize,
        step: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Simulation<F: ForceModel = CentralGravity> {
    central: CentralMass,
    bodies: Vec<Body>,
    params: SimulationParams,
    force_model: F,
    elapsed_steps: usize,
    status: SimulationStatus,
}

impl Simulation<CentralGravity> {
    /// Build a simulation driven by [`CentralGravity`] with `params.gravitational_constant`.
    ///
    /// Arguments
    /// -----------------
    /// * `central`: The fixed attracting mass.
    /// * `bodies`: Orbiting bodies, in output order. Names must be unique.
    /// * `params`: Time step, `G` and start epoch.
    ///
    /// Return
    /// ----------
    /// * A [`SimulationStatus::Ready`] simulation with `elapsed_steps == 0`, or a configuration
    ///   error ([`SimError::InvalidTimeStep`], [`SimError::DuplicateBodyName`], ...).
    pub fn new(
        central: CentralMass,
        bodies: Vec<Body>,
        params: SimulationParams,
    ) -> Result<Self, SimError> {
        let gravity = CentralGravity::new(params.gravitational_constant);
        Simulation::with_force_model(central, bodies, params, gravity)
    }
}

impl<F: ForceModel> Simulation<F> {
    /// Build a simulation with a caller-provided force model.
    pub fn with_force_model(
        central: CentralMass,
        bodies: Vec<Body>,
        params: SimulationParams,
        force_model: F,
    ) -> Result<Self, SimError> {
        params.validate()?;

        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if !seen.insert(body.name()) {
                return Err(SimError::DuplicateBodyName(body.name().to_string()));
            }
        }

        debug!(
            "simulation created: {} bodies, central mass {:.3e} kg, {}",
            bodies.len(),
            central.mass(),
            params
        );

        Ok(Simulation {
            central,
            bodies,
            params,
            force_model,
            elapsed_steps: 0,
            status: SimulationStatus::Ready,
        })
    }

    /// Advance every body by one time step.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` once all bodies have been advanced and `elapsed_steps` incremented.
    /// * [`SimError::Singularity`] if a body coincides with the central mass; the simulation
    ///   is then [`SimulationStatus::Failed`].
    /// * [`SimError::SimulationFailed`] if a previous step already failed.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.ensure_ready()?;

        let step = self.elapsed_steps;
        let dt = self.params.time_step;
        let accelerations = self.accelerations();

        let mut failure = None;
        for (index, (body, acceleration)) in
            self.bodies.iter_mut().zip(accelerations).enumerate()
        {
            match acceleration {
                Ok(a) => integrator::advance(body, &a, dt),
                Err(source) => {
                    failure = Some((index, body.name().to_string(), source));
                    break;
                }
            }
        }

        if let Some((index, body, source)) = failure {
            return Err(self.fail(index, body, step, source));
        }

        self.elapsed_steps += 1;
        trace!("step {step} committed");
        Ok(())
    }

    /// Call [`Simulation::step`] exactly `steps` times, stopping at the first error.
    ///
    /// Trajectories are pre-sized for the whole run. `steps == 0` is rejected with
    /// [`SimError::ZeroSteps`] without touching the simulation.
    pub fn run(&mut self, steps: usize) -> Result<(), SimError> {
        if steps == 0 {
            return Err(SimError::ZeroSteps);
        }
        self.ensure_ready()?;

        debug!(
            "running {steps} steps of {:.1} s from step {}",
            self.params.time_step, self.elapsed_steps
        );
        for body in &mut self.bodies {
            body.reserve_steps(steps);
        }

        for _ in 0..steps {
            self.step()?;
        }

        debug!("run finished at step {}", self.elapsed_steps);
        Ok(())
    }

    pub fn central(&self) -> &CentralMass {
        &self.central
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// First body named `name`.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// `(name, trajectory)` pairs in body order.
    pub fn trajectories(&self) -> impl Iterator<Item = (&str, &Trajectory)> + '_ {
        self.bodies.iter().map(|b| (b.name(), b.trajectory()))
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn force_model(&self) -> &F {
        &self.force_model
    }

    pub fn time_step(&self) -> Second {
        self.params.time_step
    }

    pub fn elapsed_steps(&self) -> usize {
        self.elapsed_steps
    }

    /// Simulated time covered by the completed steps, in seconds.
    pub fn elapsed_time(&self) -> Second {
        self.elapsed_steps as f64 * self.params.time_step
    }

    /// Epoch of trajectory index `step`.
    pub fn epoch_at(&self, step: usize) -> Epoch {
        self.params.epoch_at(step)
    }

    pub fn status(&self) -> &SimulationStatus {
        &self.status
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SimulationStatus::Failed { .. })
    }

    /// Give up the simulation and keep its bodies (and their trajectories).
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    fn ensure_ready(&self) -> Result<(), SimError> {
        match &self.status {
            SimulationStatus::Ready => Ok(()),
            SimulationStatus::Failed { body, step, .. } => Err(SimError::SimulationFailed {
                body: body.clone(),
                step: *step,
            }),
        }
    }

    fn fail(&mut self, index: usize, body: String, step: usize, source: SimError) -> SimError {
        warn!("step {step} failed on body '{body}' (index {index}): {source}");
        self.status = SimulationStatus::Failed {
            body: body.clone(),
            index,
            step,
        };
        match source {
            SimError::ZeroSeparation => SimError::Singularity { body, index, step },
            other => other,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn accelerations(&self) -> Vec<Result<Vec2, SimError>> {
        self.bodies
            .iter()
            .map(|b| {
                self.force_model
                    .acceleration(&b.position(), b.mass(), &self.central)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn accelerations(&self) -> Vec<Result<Vec2, SimError>> {
        use rayon::prelude::*;

        self.bodies
            .par_iter()
            .map(|b| {
                self.force_model
                    .acceleration(&b.position(), b.mass(), &self.central)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> CentralMass {
        CentralMass::at_origin(1.9e30).unwrap()
    }

    fn earth() -> Body {
        Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap()
    }

    #[test]
    fn test_new_simulation_is_ready() {
        let sim = Simulation::new(sun(), vec![earth()], SimulationParams::default()).unwrap();
        assert_eq!(sim.elapsed_steps(), 0);
        assert_eq!(sim.status(), &SimulationStatus::Ready);
        assert!(!sim.is_failed());
        assert_eq!(sim.bodies().len(), 1);
        assert_eq!(sim.elapsed_time(), 0.0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Simulation::new(sun(), vec![earth(), earth()], SimulationParams::default())
            .unwrap_err();
        assert_eq!(err, SimError::DuplicateBodyName("earth".into()));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = SimulationParams {
            time_step: 0.0,
            ..SimulationParams::default()
        };
        let err = Simulation::new(sun(), vec![earth()], params).unwrap_err();
        assert_eq!(err, SimError::InvalidTimeStep(0.0));
    }

    #[test]
    fn test_step_counts_once_per_call() {
        let mut sim = Simulation::new(sun(), vec![earth()], SimulationParams::default()).unwrap();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.elapsed_steps(), 2);
        assert_eq!(sim.elapsed_time(), 2.0 * 86_400.0);
        assert_eq!(sim.body("earth").unwrap().trajectory().len(), 3);
    }

    #[test]
    fn test_run_zero_steps_rejected() {
        let mut sim = Simulation::new(sun(), vec![earth()], SimulationParams::default()).unwrap();
        assert_eq!(sim.run(0).unwrap_err(), SimError::ZeroSteps);
        assert!(!sim.is_failed());
        assert_eq!(sim.elapsed_steps(), 0);
    }

    #[test]
    fn test_failure_is_terminal_and_partial() {
        let lost = Body::from_components("lost", 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let mut sim =
            Simulation::new(sun(), vec![earth(), lost], SimulationParams::default()).unwrap();

        let err = sim.step().unwrap_err();
        assert_eq!(
            err,
            SimError::Singularity {
                body: "lost".into(),
                index: 1,
                step: 0
            }
        );
        assert_eq!(
            sim.status(),
            &SimulationStatus::Failed {
                body: "lost".into(),
                index: 1,
                step: 0
            }
        );

        // earth was advanced before the failing body, lost was not
        assert_eq!(sim.body("earth").unwrap().trajectory().len(), 2);
        assert_eq!(sim.body("lost").unwrap().trajectory().len(), 1);
        assert_eq!(sim.elapsed_steps(), 0);

        let again = sim.step().unwrap_err();
        assert_eq!(
            again,
            SimError::SimulationFailed {
                body: "lost".into(),
                step: 0
            }
        );
        assert!(matches!(sim.run(3), Err(SimError::SimulationFailed { .. })));
    }

    #[test]
    fn test_custom_force_model() {
        struct NoForce;
        impl ForceModel for NoForce {
            fn acceleration(
                &self,
                _position: &Vec2,
                _mass: f64,
                _central: &CentralMass,
            ) -> Result<Vec2, SimError> {
                Ok(Vec2::zeros())
            }
        }

        let params = SimulationParams::builder().time_step(1.0).build().unwrap();
        let mut sim = Simulation::with_force_model(sun(), vec![earth()], params, NoForce).unwrap();
        sim.run(10).unwrap();
        let last = sim.body("earth").unwrap().trajectory().latest();
        assert_eq!(last.position, Vec2::new(1.5e11, 292_900.0));
    }
}
