// Configuration for series generation and outlier scoring
//
// Everything the detector needs is explicit here: seed, length, threshold and
// the distribution shape. Config files are TOML; CLI flags override them field
// by field. Validation happens once, at the boundary, so the numeric core
// never sees a non-finite threshold or spread.

use crate::robust::DEFAULT_THRESHOLD;
use crate::series::{
    GeneratorConfig, DEFAULT_CENTER_MEAN, DEFAULT_CENTER_SPREAD, DEFAULT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default seed, the one used by the reference scenarios
pub const DEFAULT_SEED: i64 = 42;

/// Upper bound on series length accepted at the boundary
pub const MAX_COUNT: usize = 10_000_000;

/// Errors for detector configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("center_mean must be finite, got {0}")]
    InvalidCenterMean(f64),

    #[error("center_spread must be finite and non-negative, got {0}")]
    InvalidCenterSpread(f64),

    #[error("count must be at most {max}, got {actual}")]
    CountTooLarge { max: usize, actual: usize },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Full detector configuration
///
/// # Example
/// ```
/// use madlens::config::DetectorConfig;
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.count, 320);
/// assert_eq!(config.threshold, 3.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Seed for the Lehmer generator; any integer, negative included
    pub seed: i64,

    /// Number of samples to generate
    pub count: usize,

    /// Flag samples with |robust z| >= threshold
    ///
    /// - 3.5 (default): Iglewicz & Hoaglin's recommended cut-off
    /// - 2.0: most sensitive end of the interactive range
    /// - 6.0: strictest end of the interactive range
    pub threshold: f64,

    /// Center (μ) of the generated distribution
    pub center_mean: f64,

    /// Spread (σ) of the generated distribution
    pub center_spread: f64,

    /// Overwrite the fixture positions with extreme values
    pub inject_outliers: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_COUNT,
            threshold: DEFAULT_THRESHOLD,
            center_mean: DEFAULT_CENTER_MEAN,
            center_spread: DEFAULT_CENTER_SPREAD,
            inject_outliers: true,
        }
    }
}

impl DetectorConfig {
    /// Strict preset: only the most extreme points (threshold 6.0)
    pub fn strict() -> Self {
        Self {
            threshold: 6.0,
            ..Self::default()
        }
    }

    /// Sensitive preset: flags borderline points too (threshold 2.0)
    pub fn sensitive() -> Self {
        Self {
            threshold: 2.0,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Distribution shape for the series generator
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            center_mean: self.center_mean,
            center_spread: self.center_spread,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;

        if !self.center_mean.is_finite() {
            return Err(ConfigError::InvalidCenterMean(self.center_mean));
        }

        if !self.center_spread.is_finite() || self.center_spread < 0.0 {
            return Err(ConfigError::InvalidCenterSpread(self.center_spread));
        }

        if self.count > MAX_COUNT {
            return Err(ConfigError::CountTooLarge {
                max: MAX_COUNT,
                actual: self.count,
            });
        }

        Ok(())
    }
}

/// Reject thresholds the classifier cannot meaningfully apply
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigError::InvalidThreshold(threshold));
    }
    Ok(())
}
