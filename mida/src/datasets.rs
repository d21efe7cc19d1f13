//! Random market instances for experiments.
//!
//! Real valuation data is scarce, so scaling studies draw synthetic
//! markets: n buyer values and n seller costs around a common mean, so
//! the two curves cross near the middle of the market and the amount of
//! feasible trade grows with n.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Market with values drawn uniformly from `mean_value ± max_noise`,
/// independently for buyers and sellers.
pub fn uniform_market<R: Rng + ?Sized>(
    num_traders: usize,
    mean_value: f64,
    max_noise: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let mut draw = |rng: &mut R| -> Vec<f64> {
        (0..num_traders)
            .map(|_| mean_value + rng.random_range(-max_noise..=max_noise))
            .collect()
    };
    let buyers = draw(rng);
    let sellers = draw(rng);
    (buyers, sellers)
}

/// Market with values drawn from `Normal(mean_value, std_dev)`,
/// truncated at zero.
pub fn normal_market<R: Rng + ?Sized>(
    num_traders: usize,
    mean_value: f64,
    std_dev: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let normal = Normal::new(mean_value, std_dev).unwrap();
    let mut draw = |rng: &mut R| -> Vec<f64> {
        (0..num_traders)
            .map(|_| normal.sample(rng).max(0.0))
            .collect()
    };
    let buyers = draw(rng);
    let sellers = draw(rng);
    (buyers, sellers)
}
