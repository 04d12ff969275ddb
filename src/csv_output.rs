//! CSV output format for score reports
//!
//! One row per sample in index order, for spreadsheet analysis and plotting
//! tools that want the raw points.

use crate::robust::{ScoreReport, ScoredSample};
use crate::session::SweepPoint;

/// CSV output formatter for scored samples
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<ScoredSample>,
}

impl CsvOutput {
    /// Create an empty CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build rows from a report, restoring index order across partitions
    pub fn from_report(report: &ScoreReport) -> Self {
        Self {
            rows: report.scored(),
        }
    }

    /// Add a sample to the output
    pub fn add_sample(&mut self, sample: ScoredSample) {
        self.rows.push(sample);
    }

    fn header() -> &'static str {
        "index,value,z,abs_z,flagged"
    }

    /// Format a sample as CSV row
    fn format_row(sample: &ScoredSample) -> String {
        format!(
            "{},{},{:.6},{:.6},{}",
            sample.index, sample.value, sample.z, sample.abs_z, sample.flagged
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for sample in &self.rows {
            output.push_str(&Self::format_row(sample));
            output.push('\n');
        }

        output
    }
}

/// CSV rendering of a threshold sweep (`--sweep --format csv`)
pub fn sweep_to_csv(points: &[SweepPoint]) -> String {
    let mut output = String::from("threshold,flagged_count\n");
    for point in points {
        output.push_str(&format!("{},{}\n", point.threshold, point.flagged_count));
    }
    output
}
