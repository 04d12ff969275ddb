//! Human-readable text report (default `--format text`)

use crate::robust::ScoreReport;
use crate::session::SweepPoint;

/// Number of flagged samples listed before the report truncates
const MAX_LISTED: usize = 25;

/// Render the summary block followed by the flagged samples
pub fn to_report_string(report: &ScoreReport, seed: i64) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str("=== Robust Outlier Report ===\n");
    out.push_str(&format!("Seed:        {}\n", seed));
    out.push_str(&format!("Threshold:   |z| >= {}\n", report.threshold));
    out.push_str(&format!("Median:      {:.2}\n", summary.median));
    out.push_str(&format!("MAD:         {:.2}\n", summary.mad));
    out.push_str(&format!("Scaled MAD:  {:.2}\n", summary.scaled_mad));
    out.push_str(&format!(
        "Flagged:     {} of {}\n",
        summary.flagged_count, summary.total_count
    ));

    if report.flagged.is_empty() {
        out.push_str("\nNo samples reached the threshold.\n");
        return out;
    }

    out.push_str("\nFlagged samples:\n");
    for sample in report.flagged.iter().take(MAX_LISTED) {
        let direction = if sample.z >= 0.0 { "high" } else { "low" };
        out.push_str(&format!(
            "  #{:<5} {:>9.2}  z={:>7.2}  ({})\n",
            sample.index, sample.value, sample.z, direction
        ));
    }
    if report.flagged.len() > MAX_LISTED {
        out.push_str(&format!(
            "  ... and {} more\n",
            report.flagged.len() - MAX_LISTED
        ));
    }

    out
}

/// Render a threshold sweep as a two-column table
pub fn sweep_to_string(points: &[SweepPoint]) -> String {
    let mut out = String::from("\nThreshold sweep:\n  threshold  flagged\n");
    for point in points {
        out.push_str(&format!(
            "  {:>9.2}  {:>7}\n",
            point.threshold, point.flagged_count
        ));
    }
    out
}
