//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - the `Simulation` with its validated parameters
//! - the initial population: a seeded random disc plus explicit bodies
//! - the fixed frame delta used when driving the simulation headless

use std::f64::consts::PI;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{to_vec2, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimResult;
use crate::simulation::forces::PassStats;
use crate::simulation::states::NVec2;

/// Side of the square that holds one body at density 1
const CELL: f64 = 200.0;

/// Scatter `count` bodies at rest in a disc around `center`.
///
/// The disc area is `count / density * CELL^2`. Angle and radial fraction are
/// both uniform, which piles bodies up towards the centre.
pub fn scatter_disc<R: Rng>(
    sim: &mut Simulation,
    rng: &mut R,
    count: usize,
    density: f64,
    center: NVec2,
) -> SimResult<()> {
    let area = count as f64 / density * CELL * CELL;
    let max_distance = (area / PI).sqrt();

    for _ in 0..count {
        let angle = rng.random::<f64>() * 2.0 * PI;
        let distance = rng.random::<f64>() * max_distance;
        let radius = rng.random::<f64>().max(0.3) * 2.0;

        let position = center + NVec2::new(angle.cos(), angle.sin()) * distance;
        sim.add_body(radius, position, NVec2::zeros())?;
    }

    Ok(())
}

/// Totals over a headless run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub pairs: u64,
    pub merges: u64,
    pub population: usize,
}

pub struct Scenario {
    pub simulation: Simulation,
    pub frame_delta: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let parameters = cfg.parameters()?;
        let frame_delta = cfg.frame_delta()?;

        let mut rng = StdRng::seed_from_u64(parameters.seed);
        let (count, density, center) = (
            parameters.initial_objects,
            parameters.initial_density,
            parameters.center,
        );

        let mut simulation = Simulation::new(parameters)?;
        scatter_disc(&mut simulation, &mut rng, count, density, center)?;

        // Bodies: map `BodyConfig` -> launched bodies
        for bc in &cfg.bodies {
            let x = to_vec2("bodies.x", &bc.x)?;
            let v = to_vec2("bodies.v", &bc.v)?;
            simulation.add_body_with_velocity(bc.radius, x, v)?;
        }

        info!(
            "scenario built: {} bodies, resolution {}, mass_base {}",
            simulation.len(),
            simulation.params().resolution,
            simulation.params().mass_base
        );

        Ok(Self { simulation, frame_delta })
    }

    /// Drive `frames` fixed-delta frames
    pub fn run(&mut self, frames: u64) -> SimResult<RunSummary> {
        let mut summary = RunSummary::default();

        for _ in 0..frames {
            let PassStats { pairs, merges, population, .. } = self.simulation.advance(self.frame_delta)?;
            summary.frames += 1;
            summary.pairs += pairs as u64;
            summary.merges += merges as u64;
            summary.population = population;
        }
        summary.population = self.simulation.len();

        Ok(summary)
    }
}
