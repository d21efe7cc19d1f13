//! Competitive ratio as a function of market size.
//!
//! The mechanism's efficiency loss comes from the two random halves
//! disagreeing about the clearing price; as markets grow the halves look
//! more alike and the median competitive ratio should climb toward 1.
//! This experiment measures that convergence on synthetic markets.

use mida::analysis::RatioSummary;
use mida::datasets::uniform_market;
use mida::mechanism::run_mida;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

const MEAN_VALUE: f64 = 100.0;
const MAX_NOISE: f64 = 50.0;
const TRIALS_PER_SESSION: usize = 100;

fn run_sessions(num_traders: usize, num_sessions: usize) -> Vec<RatioSummary> {
    (0..num_sessions)
        .into_par_iter()
        .map(|session| {
            let seed = num_traders as u64 * 10_000 + session as u64;
            let mut rng = StdRng::seed_from_u64(seed);
            let (buyers, sellers) = uniform_market(num_traders, MEAN_VALUE, MAX_NOISE, &mut rng);
            let trials: Vec<_> = (0..TRIALS_PER_SESSION)
                .map(|_| run_mida(&buyers, &sellers, &mut rng))
                .collect();
            RatioSummary::from_trials(&trials)
        })
        .collect()
}

fn main() {
    let market_sizes = [5, 10, 20, 50, 100, 200, 500];
    let num_sessions = 50;

    println!("Competitive ratio vs market size");
    println!(
        "Uniform values in [{:.0}, {:.0}], {} trials x {} sessions per size\n",
        MEAN_VALUE - MAX_NOISE,
        MEAN_VALUE + MAX_NOISE,
        TRIALS_PER_SESSION,
        num_sessions
    );
    println!(
        "{:>8} | {:>8} | {:>8} | {:>8}",
        "Traders", "Median", "Mean", "Std Dev"
    );
    println!("{:-<8}-+-{:-<8}-+-{:-<8}-+-{:-<8}", "", "", "", "");

    for &num_traders in &market_sizes {
        let summaries = run_sessions(num_traders, num_sessions);

        let medians: Vec<f64> = summaries.iter().map(|s| s.median).collect();
        let means: Vec<f64> = summaries.iter().map(|s| s.mean).collect();

        let median = medians.iter().sum::<f64>() / medians.len() as f64;
        let mean = means.iter().sum::<f64>() / means.len() as f64;
        let variance =
            means.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / means.len() as f64;

        println!(
            "{:>8} | {:>8.4} | {:>8.4} | {:>8.4}",
            num_traders,
            median,
            mean,
            variance.sqrt()
        );
    }

    println!("\nExpected: the median column climbs toward 1 as markets grow.");
}
