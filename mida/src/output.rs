//! Data output and serialization for experimental analysis
//!
//! Structured export of trial batches to CSV and JSON for analysis in
//! Python (pandas, scipy, matplotlib).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::RatioSummary;
use crate::mechanism::Trial;

/// Top-level container for one experiment's output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentOutput {
    pub metadata: ExperimentMetadata,
    pub trials: Vec<TrialRecord>,
    pub summary: SummaryRecord,
}

/// Metadata for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentMetadata {
    pub scenario: String,
    pub seed: u64,
    pub num_buyers: usize,
    pub num_sellers: usize,
    pub iterations: usize,
    pub timestamp: String,
}

/// One mechanism trial, flattened for tabular analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    pub trial: usize,
    pub optimal_price: f64,
    pub optimal_gain: f64,
    pub left_clearing_price: f64,
    pub right_clearing_price: f64,
    pub left_gain: f64,
    pub right_gain: f64,
    pub gain: f64,
    /// Empty in CSV output when the benchmark gain was zero.
    pub competitive_ratio: Option<f64>,
}

impl TrialRecord {
    fn from_trial(index: usize, trial: &Trial) -> Self {
        TrialRecord {
            trial: index,
            optimal_price: trial.optimal.price,
            optimal_gain: trial.optimal.gain,
            left_clearing_price: trial.left.clearing_price,
            right_clearing_price: trial.right.clearing_price,
            left_gain: trial.left.gain,
            right_gain: trial.right.gain,
            gain: trial.gain,
            competitive_ratio: trial.competitive_ratio,
        }
    }
}

/// Serializable version of [`RatioSummary`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub trials: usize,
    pub undefined: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl From<&RatioSummary> for SummaryRecord {
    fn from(summary: &RatioSummary) -> Self {
        SummaryRecord {
            trials: summary.trials,
            undefined: summary.undefined,
            mean: summary.mean,
            std_dev: summary.std_dev,
            min: summary.min,
            max: summary.max,
            median: summary.median,
        }
    }
}

impl ExperimentOutput {
    /// Assemble the output container for a batch of trials.
    pub fn from_trials(
        scenario: &str,
        seed: u64,
        num_buyers: usize,
        num_sellers: usize,
        trials: &[Trial],
    ) -> Self {
        let summary = RatioSummary::from_trials(trials);
        ExperimentOutput {
            metadata: ExperimentMetadata {
                scenario: scenario.to_string(),
                seed,
                num_buyers,
                num_sellers,
                iterations: trials.len(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            trials: trials
                .iter()
                .enumerate()
                .map(|(i, t)| TrialRecord::from_trial(i, t))
                .collect(),
            summary: SummaryRecord::from(&summary),
        }
    }

    /// Write per-trial records to CSV
    pub fn write_trials_csv<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record([
            "trial",
            "optimal_price",
            "optimal_gain",
            "left_clearing_price",
            "right_clearing_price",
            "left_gain",
            "right_gain",
            "gain",
            "competitive_ratio",
        ])?;

        for record in &self.trials {
            wtr.write_record(&[
                record.trial.to_string(),
                record.optimal_price.to_string(),
                record.optimal_gain.to_string(),
                record.left_clearing_price.to_string(),
                record.right_clearing_price.to_string(),
                record.left_gain.to_string(),
                record.right_gain.to_string(),
                record.gain.to_string(),
                record
                    .competitive_ratio
                    .map_or(String::new(), |r| r.to_string()),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Write metadata and summary JSON
    pub fn write_summary_json<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write all outputs to a directory
    ///
    /// Creates:
    /// - trials.csv
    /// - summary.json
    pub fn write_all<P: AsRef<Path>>(&self, dir: P) -> Result<(), Box<dyn std::error::Error>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.write_trials_csv(dir.join("trials.csv"))?;
        self.write_summary_json(dir.join("summary.json"))?;

        Ok(())
    }
}
