//! Aggregate statistics over batches of mechanism trials.

use crate::mechanism::Trial;

/// Distribution of competitive ratios across a batch of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSummary {
    pub trials: usize,
    /// Trials whose benchmark gain was zero (no defined ratio).
    pub undefined: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Upper-middle element of the sorted defined ratios.
    pub median: f64,
}

impl RatioSummary {
    pub fn from_trials(trials: &[Trial]) -> Self {
        let mut ratios: Vec<f64> = trials.iter().filter_map(|t| t.competitive_ratio).collect();
        ratios.sort_by(f64::total_cmp);

        let undefined = trials.len() - ratios.len();
        if ratios.is_empty() {
            return RatioSummary {
                trials: trials.len(),
                undefined,
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                median: 0.0,
            };
        }

        let mean = mean(&ratios);
        RatioSummary {
            trials: trials.len(),
            undefined,
            mean,
            std_dev: std_dev(&ratios, mean),
            min: ratios[0],
            max: ratios[ratios.len() - 1],
            median: ratios[ratios.len() / 2],
        }
    }

    pub fn print_summary(&self, label: &str) {
        println!("\n{}", label);
        println!("  Trials: {} ({} undefined ratios)", self.trials, self.undefined);
        println!(
            "  Competitive ratio: {:.4} (±{:.4}) [{:.4}, {:.4}]",
            self.mean, self.std_dev, self.min, self.max
        );
        println!("  Median ratio: {:.4}", self.median);
    }
}

/// Calculate mean of a slice
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate sample standard deviation
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanism::run_mida;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mean_and_std_dev() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let m = mean(&values);
        assert_relative_eq!(m, 3.0);

        // Sample std dev of 1..5 is sqrt(2.5).
        let s = std_dev(&values, m);
        assert_relative_eq!(s, 2.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_summary_over_seeded_batch() {
        let buyers = double_auction::valuation::values_from_spec("10 of 100", 0.000001, 0.0);
        let sellers =
            double_auction::valuation::values_from_spec("1 of 1, 99 of 99", 0.000001, 0.0);
        let mut rng = StdRng::seed_from_u64(42);
        let trials: Vec<_> = (0..40).map(|_| run_mida(&buyers, &sellers, &mut rng)).collect();

        let summary = RatioSummary::from_trials(&trials);
        assert_eq!(summary.trials, 40);
        assert_eq!(summary.undefined, 0);
        assert!(summary.min <= summary.median && summary.median <= summary.max);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        assert!(summary.min >= 0.0);
    }

    #[test]
    fn test_summary_with_only_undefined_ratios() {
        let mut rng = StdRng::seed_from_u64(1);
        let trials: Vec<_> = (0..3).map(|_| run_mida(&[], &[], &mut rng)).collect();

        let summary = RatioSummary::from_trials(&trials);
        assert_eq!(summary.trials, 3);
        assert_eq!(summary.undefined, 3);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
    }

    #[test]
    fn test_summary_empty_batch() {
        let summary = RatioSummary::from_trials(&[]);
        assert_eq!(summary.trials, 0);
        assert_eq!(summary.undefined, 0);
        assert_eq!(summary.std_dev, 0.0);
    }
}
