//! JSON output format for score reports
//!
//! `--format json`: the config that produced the series, the summary and both
//! partitions, so a rendering layer can redraw the chart without re-running
//! the generator.

use crate::config::DetectorConfig;
use crate::robust::{ScoreReport, ScoredSample, StatisticsSummary};
use crate::session::SweepPoint;
use serde::{Deserialize, Serialize};

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Configuration used for generation and scoring
    pub config: DetectorConfig,
    /// Rounded median/MAD and partition sizes
    pub summary: StatisticsSummary,
    /// Samples with |z| >= threshold, index order
    pub flagged: Vec<ScoredSample>,
    /// Remaining samples, index order
    pub clean: Vec<ScoredSample>,
    /// Flagged counts across a threshold range (if --sweep enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<SweepPoint>>,
}

impl JsonOutput {
    /// Create a JSON output structure from a finished report
    pub fn new(config: &DetectorConfig, report: &ScoreReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "madlens-json-v1".to_string(),
            config: config.clone(),
            summary: report.summary,
            flagged: report.flagged.clone(),
            clean: report.clean.clone(),
            sweep: None,
        }
    }

    /// Attach threshold sweep results
    pub fn set_sweep(&mut self, sweep: Vec<SweepPoint>) {
        self.sweep = Some(sweep);
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
