use gravsim::{bench_step, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in the crate's `scenarios` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Print the final body list as YAML
    #[arg(long)]
    snapshot: bool,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;

    let summary = scenario.run(args.ticks)?;
    let sim = &scenario.simulation;
    info!(
        "ran {} frames ({:.2} s simulated): {} bodies left, {} merges, {} pair visits",
        summary.frames,
        sim.time(),
        summary.population,
        summary.merges,
        summary.pairs
    );
    info!("total mass {:.3}, total momentum {:?}", sim.total_mass(), sim.total_momentum());

    if args.snapshot {
        print!("{}", serde_yaml::to_string(&sim.snapshot())?);
    }

    Ok(())
}
