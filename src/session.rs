//! Cached detector state for interactive front-ends
//!
//! Two independent events drive recomputation:
//! - seed/shape change: regenerate the series and recompute median/MAD
//! - threshold change: re-classify against the cached statistics only
//!
//! The random source is never touched on a threshold change.

use crate::config::{self, DetectorConfig};
use crate::robust::{classify, RobustStats, ScoreReport};
use crate::series::{generate_with, FixtureInjector, NoInjection, OutlierInjector, Series};
use serde::{Deserialize, Serialize};

/// Number of samples flagged at one threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: f64,
    pub flagged_count: usize,
}

/// Series + statistics cache keyed by the current config
#[derive(Debug, Clone)]
pub struct DetectorSession {
    config: DetectorConfig,
    series: Series,
    stats: RobustStats,
}

impl DetectorSession {
    /// Validate `config` and generate the initial series
    pub fn new(config: DetectorConfig) -> config::Result<Self> {
        config.validate()?;
        let (series, stats) = build(&config);
        Ok(Self {
            config,
            series,
            stats,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn stats(&self) -> &RobustStats {
        &self.stats
    }

    /// Change the threshold; the series and statistics are reused
    pub fn set_threshold(&mut self, threshold: f64) -> config::Result<()> {
        config::validate_threshold(threshold)?;
        tracing::debug!(
            from = self.config.threshold,
            to = threshold,
            "threshold changed, reclassifying"
        );
        self.config.threshold = threshold;
        Ok(())
    }

    /// Change the seed and regenerate
    pub fn set_seed(&mut self, seed: i64) {
        self.config.seed = seed;
        self.regenerate();
    }

    /// Change the series length and regenerate
    pub fn set_count(&mut self, count: usize) -> config::Result<()> {
        let candidate = DetectorConfig {
            count,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config = candidate;
        self.regenerate();
        Ok(())
    }

    /// Score the cached series at the current threshold
    pub fn report(&self) -> ScoreReport {
        classify(&self.series, &self.stats, self.config.threshold)
    }

    /// Flagged counts for each threshold, in the order given
    ///
    /// Non-finite or negative thresholds are rejected before any scoring.
    pub fn sweep(&self, thresholds: &[f64]) -> config::Result<Vec<SweepPoint>> {
        thresholds
            .iter()
            .map(|&threshold| -> config::Result<SweepPoint> {
                config::validate_threshold(threshold)?;
                Ok(SweepPoint {
                    threshold,
                    flagged_count: classify(&self.series, &self.stats, threshold)
                        .summary
                        .flagged_count,
                })
            })
            .collect()
    }

    fn regenerate(&mut self) {
        let (series, stats) = build(&self.config);
        self.series = series;
        self.stats = stats;
    }
}

/// Evenly spaced thresholds from `start` to `end` inclusive
///
/// Degenerate input yields just `start`: non-finite bounds, `end < start`, a
/// non-positive step, or more than `MAX_COUNT` steps.
pub fn threshold_steps(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || step.is_nan() || step <= 0.0 || end < start
    {
        return vec![start];
    }
    let steps = ((end - start) / step).round();
    if !steps.is_finite() || steps > config::MAX_COUNT as f64 {
        return vec![start];
    }
    (0..=steps as usize).map(|i| start + step * i as f64).collect()
}

fn build(config: &DetectorConfig) -> (Series, RobustStats) {
    let injector: &dyn OutlierInjector = if config.inject_outliers {
        &FixtureInjector
    } else {
        &NoInjection
    };
    let series = generate_with(config.seed, &config.generator(), injector);
    let stats = RobustStats::from_values(&series.values());

    tracing::info!(
        seed = config.seed,
        count = series.len(),
        median = stats.median,
        mad = stats.mad,
        "series regenerated"
    );

    (series, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robust::score;
    use crate::series::generate;

    #[test]
    fn test_new_matches_direct_scoring() {
        let session = DetectorSession::new(DetectorConfig::default()).unwrap();
        let direct = score(&generate(42, 320), 3.5);
        assert_eq!(session.report(), direct);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DetectorConfig {
            threshold: f64::NAN,
            ..DetectorConfig::default()
        };
        assert!(DetectorSession::new(config).is_err());
    }

    #[test]
    fn test_threshold_change_keeps_series() {
        let mut session = DetectorSession::new(DetectorConfig::default()).unwrap();
        let before = session.series().clone();
        let stats = *session.stats();

        session.set_threshold(6.0).unwrap();

        assert_eq!(session.series(), &before);
        assert_eq!(session.stats(), &stats);
        assert_eq!(session.report().threshold, 6.0);
    }

    #[test]
    fn test_invalid_threshold_leaves_state() {
        let mut session = DetectorSession::new(DetectorConfig::default()).unwrap();
        assert!(session.set_threshold(-1.0).is_err());
        assert_eq!(session.config().threshold, 3.5);
    }

    #[test]
    fn test_seed_change_regenerates() {
        let mut session = DetectorSession::new(DetectorConfig::default()).unwrap();
        let before = session.series().clone();

        session.set_seed(7);
        assert_ne!(session.series(), &before);
        assert_eq!(session.series(), &generate(7, 320));

        session.set_seed(42);
        assert_eq!(session.series(), &before);
    }

    #[test]
    fn test_count_change_regenerates() {
        let mut session = DetectorSession::new(DetectorConfig::default()).unwrap();
        session.set_count(100).unwrap();
        assert_eq!(session.series().len(), 100);
        assert_eq!(session.report().summary.total_count, 100);
    }

    #[test]
    fn test_without_injection() {
        let config = DetectorConfig {
            inject_outliers: false,
            ..DetectorConfig::default()
        };
        let session = DetectorSession::new(config).unwrap();
        assert_ne!(session.series().samples()[12].value, 130.0);
    }

    #[test]
    fn test_sweep_monotonic() {
        let session = DetectorSession::new(DetectorConfig::default()).unwrap();
        let points = session.sweep(&threshold_steps(2.0, 6.0, 0.5)).unwrap();

        assert_eq!(points.len(), 9);
        for pair in points.windows(2) {
            assert!(pair[1].flagged_count <= pair[0].flagged_count);
        }
    }

    #[test]
    fn test_sweep_rejects_invalid() {
        let session = DetectorSession::new(DetectorConfig::default()).unwrap();
        assert!(session.sweep(&[3.5, f64::NAN]).is_err());
    }

    #[test]
    fn test_threshold_steps() {
        assert_eq!(threshold_steps(2.0, 3.0, 0.5), vec![2.0, 2.5, 3.0]);
        assert_eq!(threshold_steps(2.0, 2.0, 0.5), vec![2.0]);
        assert_eq!(threshold_steps(2.0, 3.0, 0.0), vec![2.0]);
    }

    #[test]
    fn test_threshold_steps_non_finite_bounds() {
        assert_eq!(threshold_steps(0.0, f64::INFINITY, 1.0), vec![0.0]);
        assert_eq!(threshold_steps(0.0, f64::NAN, 1.0), vec![0.0]);
        assert_eq!(threshold_steps(f64::NEG_INFINITY, 1.0, 1.0), vec![f64::NEG_INFINITY]);
        assert_eq!(threshold_steps(0.0, 1.0, f64::INFINITY), vec![0.0]);
    }

    #[test]
    fn test_threshold_steps_too_many() {
        assert_eq!(threshold_steps(0.0, 1.0, 1e-300), vec![0.0]);
        assert_eq!(threshold_steps(-f64::MAX, f64::MAX, 1.0), vec![-f64::MAX]);
    }
}
