//! Two years of the inner planets around the Sun, with daily steps.
//!
//! ```text
//! RUST_LOG=info cargo run --example inner_planets [-- scenario.yaml [out.csv]]
//! ```
//!
//! Without arguments the built-in preset is used and trajectories are written to
//! `inner_planets.csv` in the current directory.
use std::error::Error;

use log::{info, warn};
use orbitsim::{
    constants::SECONDS_PER_DAY, diagnostics::simulation_energy_drift, export::write_csv_file,
    ScenarioConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let cfg = match args.next() {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::inner_planets(),
    };
    let out = args.next().unwrap_or_else(|| "inner_planets.csv".to_string());

    let mut scenario = cfg.build()?;
    info!("{:#}", scenario.simulation.params());

    if let Err(e) = scenario.run() {
        warn!("run stopped early: {e}");
    }

    let sim = &scenario.simulation;
    info!(
        "{} steps done, {:.1} days simulated, final epoch {}",
        sim.elapsed_steps(),
        sim.elapsed_time() / SECONDS_PER_DAY,
        sim.epoch_at(sim.elapsed_steps())
    );

    for body in sim.bodies() {
        let p = body.position();
        info!(
            "{:>8}: r = {:.4e} m, |v| = {:.1} m/s",
            body.name(),
            p.norm(),
            body.velocity().norm()
        );
    }

    for (name, report) in simulation_energy_drift(sim) {
        info!("{name:>8}: relative energy drift {:.3e}", report.relative_drift);
    }

    let rows = write_csv_file(sim, &out)?;
    info!("wrote {rows} rows to {out}");
    Ok(())
}
