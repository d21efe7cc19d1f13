//! Batch Experiment Runner
//!
//! Executes mechanism trial batches based on TOML configuration files
//! and writes CSV/JSON results for external analysis.
//!
//! Usage:
//!   cargo run --release --bin run_experiment -- experiments/baseline.toml

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use double_auction::valuation::values_from_spec;
use mida::mechanism::{run_median, run_mida};
use mida::output::ExperimentOutput;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

/// Top-level experiment configuration
#[derive(Debug, Clone, Deserialize)]
struct ExperimentConfig {
    experiment: ExperimentSettings,
    #[serde(rename = "scenario")]
    scenarios: Vec<ScenarioConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct ExperimentSettings {
    name: String,
    iterations: usize,
    base_seed: u64,
    output_dir: PathBuf,
}

/// One named market, given as valuation-spec strings
#[derive(Debug, Clone, Deserialize)]
struct ScenarioConfig {
    name: String,
    buyers: String,
    sellers: String,
    #[serde(default)]
    bias: f64,
    #[serde(default)]
    noise: f64,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <experiment_config.toml>", args[0]);
        eprintln!("Example: {} experiments/baseline.toml", args[0]);
        process::exit(1);
    }

    let config_str = fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        eprintln!("Failed to read config file {}: {}", args[1], e);
        process::exit(1);
    });
    let config: ExperimentConfig = toml::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Failed to parse config file {}: {}", args[1], e);
        process::exit(1);
    });

    println!(
        "Experiment \"{}\": {} scenarios, {} iterations each",
        config.experiment.name,
        config.scenarios.len(),
        config.experiment.iterations
    );

    for (index, scenario) in config.scenarios.iter().enumerate() {
        let buyers = values_from_spec(&scenario.buyers, scenario.bias, scenario.noise);
        let sellers = values_from_spec(&scenario.sellers, scenario.bias, scenario.noise);
        let seed = config.experiment.base_seed + index as u64;

        println!(
            "\nScenario \"{}\": {} buyers, {} sellers, seed {}",
            scenario.name,
            buyers.len(),
            sellers.len(),
            seed
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let trials: Vec<_> = (0..config.experiment.iterations)
            .map(|_| run_mida(&buyers, &sellers, &mut rng))
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let median = run_median(&buyers, &sellers, config.experiment.iterations, &mut rng)
            .unwrap_or_else(|e| {
                eprintln!("Scenario \"{}\" failed: {}", scenario.name, e);
                process::exit(1);
            });
        match median.competitive_ratio {
            Some(ratio) => println!("  Median competitive ratio: {:.4}", ratio),
            None => println!("  Median competitive ratio: undefined (zero benchmark gain)"),
        }

        let output = ExperimentOutput::from_trials(
            &scenario.name,
            seed,
            buyers.len(),
            sellers.len(),
            &trials,
        );
        let dir = config.experiment.output_dir.join(&scenario.name);
        if let Err(e) = output.write_all(&dir) {
            eprintln!("Failed to write results to {}: {}", dir.display(), e);
            process::exit(1);
        }
        println!("  Results written to {}", dir.display());
    }
}
