use rpsim::{Scenario, ScenarioConfig};
use rpsim::{bench_force, bench_step};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "three_sign.yaml")]
    file_name: String,

    /// How many steps to advance before reporting
    #[arg(short, long, default_value_t = 2000)]
    steps: u32,

    /// Run the wall-clock benchmarks instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Count particles per category in the current generation.
fn category_counts(scenario: &Scenario) -> Vec<usize> {
    let mut counts = vec![0usize; scenario.parameters.k as usize];
    for view in scenario.state.snapshot() {
        counts[view.category as usize] += 1;
    }
    counts
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_force();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    println!(
        "N = {}, k = {}, initial counts = {:?}",
        scenario.state.len(),
        scenario.parameters.k,
        category_counts(&scenario)
    );

    let t0 = Instant::now();
    for _ in 0..args.steps {
        scenario.step();
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "{} steps in {:.3} s ({:.1} steps/s), final counts = {:?}",
        args.steps,
        elapsed,
        args.steps as f64 / elapsed,
        category_counts(&scenario)
    );

    Ok(())
}
