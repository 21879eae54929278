use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Helper to build a simulation of `n` scattered bodies at rest
fn make_simulation(n: usize) -> SimResult<Simulation> {
    let mut sim = Simulation::default();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed; spread wide so few merge
        let x = NVec2::new(
            (i_f * 0.37).sin() * 50.0 * (n as f64).sqrt(),
            (i_f * 0.13).cos() * 50.0 * (n as f64).sqrt(),
        );
        let radius = 0.6 + (i_f * 0.71).sin().abs();

        sim.add_body(radius, x, NVec2::zeros())?;
    }

    Ok(sim)
}

/// Time one tick for growing populations at a fixed resolution.
/// With the ranked budget the per-step time should flatten out instead of
/// growing with n^2.
pub fn bench_step() -> SimResult<()> {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];
    let resolution = Parameters::default().resolution;
    let steps = 3;

    println!("resolution = {resolution}");

    for n in ns {
        let mut sim = make_simulation(n)?;

        // Warm up
        sim.step(0.0, resolution)?;

        let mut pairs = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            pairs += sim.step(1.0 / 60.0, resolution)?.pairs;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, step = {:8.6} s, pairs/step = {:8}",
            per_step,
            pairs / steps
        );
    }

    Ok(())
}
