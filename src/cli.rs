//! CLI argument parsing for Madlens

use crate::config::DetectorConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for score reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Self-contained HTML page with an SVG chart
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "madlens")]
#[command(version)]
#[command(
    about = "Generate a reproducible synthetic series and flag outliers with MAD-based robust z-scores",
    long_about = None
)]
pub struct Cli {
    /// Seed for the deterministic generator (default: 42)
    #[arg(long, value_name = "SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Number of samples to generate (default: 320)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Flag samples with |robust z| >= THRESHOLD (default: 3.5)
    #[arg(short = 't', long, value_name = "THRESHOLD")]
    pub threshold: Option<f64>,

    /// Center of the generated distribution (default: 50)
    #[arg(long = "center-mean", value_name = "MU", allow_negative_numbers = true)]
    pub center_mean: Option<f64>,

    /// Spread of the generated distribution (default: 10)
    #[arg(long = "center-spread", value_name = "SIGMA")]
    pub center_spread: Option<f64>,

    /// Do not overwrite the fixture positions with extreme values
    ///
    /// Only disables injection: a config file with `inject_outliers = false`
    /// cannot be switched back on from the command line.
    #[arg(long = "no-inject")]
    pub no_inject: bool,

    /// Load settings from a TOML file; flags override file values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also report flagged counts across the 2.0..=6.0 threshold range
    ///
    /// Text, JSON and HTML add the sweep to the report; CSV prints only the
    /// `threshold,flagged_count` table in place of the per-sample rows.
    #[arg(long)]
    pub sweep: bool,

    /// Enable debug tracing output (to stderr)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Apply flag overrides on top of `base`
    pub fn merge_into(&self, base: DetectorConfig) -> DetectorConfig {
        DetectorConfig {
            seed: self.seed.unwrap_or(base.seed),
            count: self.count.unwrap_or(base.count),
            threshold: self.threshold.unwrap_or(base.threshold),
            center_mean: self.center_mean.unwrap_or(base.center_mean),
            center_spread: self.center_spread.unwrap_or(base.center_spread),
            inject_outliers: base.inject_outliers && !self.no_inject,
        }
    }
}
