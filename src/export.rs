//! # Trajectory export
//!
//! Writes finished trajectories to CSV so plotting or animation tools can consume them without
//! linking against the engine. One row per body per trajectory index:
//!
//! ```text
//! body,step,epoch,x,y,vx,vy
//! earth,0,2000-01-01T12:00:00 UTC,150000000000.0,0.0,0.0,29290.0
//! earth,1,2000-01-02T12:00:00 UTC,...
//! ```
//!
//! Rows are grouped by body (in simulation order), then by increasing `step`. Positions are in
//! meters and velocities in meters per second. A failed simulation can still be exported; its
//! bodies may then have trajectories of different lengths.
use std::{fs::File, io, path::Path};

use serde::Serialize;

use crate::{force_model::ForceModel, sim_errors::SimError, simulation::Simulation};

#[derive(Debug, Serialize)]
struct TrajectoryRecord<'a> {
    body: &'a str,
    step: usize,
    epoch: String,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Write every trajectory of `sim` as CSV to `writer`.
///
/// Return
/// ----------
/// * The number of data rows written (header excluded), or a [`SimError::CsvError`].
pub fn write_csv<F: ForceModel, W: io::Write>(
    sim: &Simulation<F>,
    writer: W,
) -> Result<usize, SimError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (name, trajectory) in sim.trajectories() {
        for (step, sample) in trajectory.iter().enumerate() {
            let (x, y, vx, vy) = sample.as_tuple();
            wtr.serialize(TrajectoryRecord {
                body: name,
                step,
                epoch: sim.epoch_at(step).to_string(),
                x,
                y,
                vx,
                vy,
            })?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// [`write_csv`] into a newly created file at `path`.
pub fn write_csv_file<F: ForceModel>(
    sim: &Simulation<F>,
    path: impl AsRef<Path>,
) -> Result<usize, SimError> {
    let file = File::create(path)?;
    write_csv(sim, io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, CentralMass, SimulationParams};

    fn small_sim() -> Simulation {
        let sun = CentralMass::at_origin(1.9e30).unwrap();
        let bodies = vec![
            Body::from_components("mercury", 6.0e10, 0.0, 0.0, 47_360.0, 3.28e23).unwrap(),
            Body::from_components("earth", 1.5e11, 0.0, 0.0, 29_290.0, 6e24).unwrap(),
        ];
        Simulation::new(sun, bodies, SimulationParams::default()).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let mut sim = small_sim();
        sim.run(3).unwrap();

        let mut buf = Vec::new();
        let rows = write_csv(&sim, &mut buf).unwrap();
        assert_eq!(rows, 8);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "body,step,epoch,x,y,vx,vy");
        assert!(lines[1].starts_with("mercury,0,2000-01-01T12:00:00 UTC,"));
        assert!(lines[5].starts_with("earth,0,"));
        assert!(lines[8].starts_with("earth,3,2000-01-04T12:00:00 UTC,"));
    }

    #[test]
    fn test_csv_values_read_back() {
        let mut sim = small_sim();
        sim.run(2).unwrap();

        let mut buf = Vec::new();
        write_csv(&sim, &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let record = rdr.records().nth(2).unwrap().unwrap();
        let expected = sim.bodies()[0].trajectory()[2];
        assert_eq!(&record[0], "mercury");
        assert_eq!(record[3].parse::<f64>().unwrap(), expected.position.x);
        assert_eq!(record[6].parse::<f64>().unwrap(), expected.velocity.y);
    }
}
