// Threshold classification of robust z-scores
//
// Pure function of (series, threshold): nothing is mutated, every call builds
// a fresh report. Comparison is inclusive (|z| >= t is flagged). A series
// with zero MAD flags nothing, whatever the threshold. Both partitions keep
// index order.

use crate::robust::statistics::{round2, RobustStats, MAD_SCALE};
use crate::series::{Sample, Series};
use serde::{Deserialize, Serialize};

/// Default flagging threshold on |z|
pub const DEFAULT_THRESHOLD: f64 = 3.5;

/// Range offered by interactive threshold controls
///
/// The classifier itself accepts any non-negative finite threshold.
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<f64> = 2.0..=6.0;

/// A sample annotated with its robust z-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    pub index: usize,
    pub value: f64,
    /// Signed robust z-score (full precision)
    pub z: f64,
    #[serde(rename = "absZ")]
    pub abs_z: f64,
    pub flagged: bool,
}

impl ScoredSample {
    fn new(sample: &Sample, stats: &RobustStats, threshold: f64) -> Self {
        let z = stats.z(sample.value);
        let abs_z = z.abs();
        Self {
            index: sample.index,
            value: sample.value,
            z,
            abs_z,
            flagged: stats.mad > 0.0 && abs_z >= threshold,
        }
    }
}

/// Presentation summary; median/MAD/scaled MAD rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub median: f64,
    pub mad: f64,
    /// `round2(1.4826 * mad)` computed from the unrounded MAD
    pub scaled_mad: f64,
    pub flagged_count: usize,
    pub total_count: usize,
}

/// Result of scoring a series at one threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub summary: StatisticsSummary,
    pub threshold: f64,
    pub flagged: Vec<ScoredSample>,
    pub clean: Vec<ScoredSample>,
}

impl ScoreReport {
    /// Both partitions merged back into index order
    pub fn scored(&self) -> Vec<ScoredSample> {
        let mut all: Vec<ScoredSample> = self
            .flagged
            .iter()
            .chain(self.clean.iter())
            .copied()
            .collect();
        all.sort_by_key(|s| s.index);
        all
    }

    /// Indices of flagged samples, ascending
    pub fn flagged_indices(&self) -> Vec<usize> {
        self.flagged.iter().map(|s| s.index).collect()
    }
}

/// Score `series` at `threshold`
///
/// Computes median and MAD, assigns every sample a robust z-score and splits
/// the series into flagged (`|z| >= threshold`) and clean partitions.
///
/// # Example
/// ```
/// use madlens::robust::score;
/// use madlens::series::Series;
///
/// let series = Series::from_values([10.0, 11.0, 9.0, 10.0, 12.0, 8.0, 10.0, 95.0]);
/// let report = score(&series, 3.5);
/// assert_eq!(report.flagged_indices(), vec![8]);
/// assert_eq!(report.summary.total_count, 8);
/// ```
pub fn score(series: &Series, threshold: f64) -> ScoreReport {
    let stats = RobustStats::from_values(&series.values());
    classify(series, &stats, threshold)
}

/// Classify `series` against precomputed `stats`
///
/// Used directly when only the threshold changed and the series statistics
/// are already known.
pub fn classify(series: &Series, stats: &RobustStats, threshold: f64) -> ScoreReport {
    let (flagged, clean): (Vec<ScoredSample>, Vec<ScoredSample>) = series
        .iter()
        .map(|sample| ScoredSample::new(sample, stats, threshold))
        .partition(|s| s.flagged);

    let summary = StatisticsSummary {
        median: round2(stats.median),
        mad: round2(stats.mad),
        scaled_mad: round2(MAD_SCALE * stats.mad),
        flagged_count: flagged.len(),
        total_count: series.len(),
    };

    tracing::debug!(
        threshold,
        flagged = summary.flagged_count,
        total = summary.total_count,
        "classified series"
    );

    ScoreReport {
        summary,
        threshold,
        flagged,
        clean,
    }
}
