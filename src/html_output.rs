//! HTML output format for score reports
//!
//! Self-contained page: embedded CSS, an inline SVG scatter chart of value by
//! index (flagged points in red, median as a dashed line), the summary table,
//! an optional threshold sweep and the flagged samples.

use crate::robust::{ScoreReport, ScoredSample};
use crate::session::SweepPoint;

const CHART_WIDTH: f64 = 960.0;
const CHART_HEIGHT: f64 = 360.0;
const CHART_MARGIN: f64 = 40.0;

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a ScoreReport,
    seed: i64,
    sweep: &'a [SweepPoint],
}

impl<'a> HtmlOutput<'a> {
    /// Create a new HTML output formatter
    pub fn new(report: &'a ScoreReport, seed: i64) -> Self {
        Self {
            report,
            seed,
            sweep: &[],
        }
    }

    /// Include a threshold sweep table after the summary
    pub fn with_sweep(mut self, sweep: &'a [SweepPoint]) -> Self {
        self.sweep = sweep;
        self
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        .point-clean {
            fill: #4a90d9;
        }
        .point-flagged {
            fill: #cc0000;
        }
        .median-line {
            stroke: #5cb85c;
            stroke-dasharray: 6 4;
        }
        .axis {
            stroke: #888;
        }
        .numeric {
            font-family: monospace;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Value range covered by the chart's y-axis, padded so points never touch the edge
    fn value_range(samples: &[ScoredSample]) -> (f64, f64) {
        let (min, max) = samples
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return (0.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(1.0);
        (min - pad, max + pad)
    }

    /// Render the scatter chart as inline SVG
    fn render_chart(&self) -> String {
        let samples = self.report.scored();
        let (lo, hi) = Self::value_range(&samples);
        let plot_w = CHART_WIDTH - 2.0 * CHART_MARGIN;
        let plot_h = CHART_HEIGHT - 2.0 * CHART_MARGIN;
        let n = samples.len().max(2) as f64;

        let x = |index: usize| CHART_MARGIN + (index as f64 - 1.0) / (n - 1.0) * plot_w;
        let y = |value: f64| CHART_MARGIN + (hi - value) / (hi - lo) * plot_h;

        let mut svg = String::new();
        svg.push_str(&format!(
            "    <svg class=\"chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\">\n",
            w = CHART_WIDTH,
            h = CHART_HEIGHT
        ));

        // Axes
        svg.push_str(&format!(
            "        <line class=\"axis\" x1=\"{m}\" y1=\"{b}\" x2=\"{r}\" y2=\"{b}\"/>\n",
            m = CHART_MARGIN,
            b = CHART_HEIGHT - CHART_MARGIN,
            r = CHART_WIDTH - CHART_MARGIN
        ));
        svg.push_str(&format!(
            "        <line class=\"axis\" x1=\"{m}\" y1=\"{m}\" x2=\"{m}\" y2=\"{b}\"/>\n",
            m = CHART_MARGIN,
            b = CHART_HEIGHT - CHART_MARGIN
        ));

        let median = self.report.summary.median;
        if median.is_finite() && (lo..=hi).contains(&median) {
            svg.push_str(&format!(
                "        <line class=\"median-line\" x1=\"{m}\" y1=\"{y:.2}\" x2=\"{r}\" y2=\"{y:.2}\"/>\n",
                m = CHART_MARGIN,
                r = CHART_WIDTH - CHART_MARGIN,
                y = y(median)
            ));
        }

        for sample in samples.iter().filter(|s| s.value.is_finite()) {
            let (class, radius) = if sample.flagged {
                ("point-flagged", 4.5)
            } else {
                ("point-clean", 2.5)
            };
            svg.push_str(&format!(
                "        <circle class=\"{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\"><title>#{} value={} z={:.2}</title></circle>\n",
                class,
                x(sample.index),
                y(sample.value),
                radius,
                sample.index,
                sample.value,
                sample.z
            ));
        }

        svg.push_str("    </svg>\n");
        svg
    }

    /// Render the statistics summary table
    fn render_summary(&self) -> String {
        let summary = &self.report.summary;
        let rows = [
            ("Seed", self.seed.to_string()),
            ("Threshold |z| &ge;", format!("{}", self.report.threshold)),
            ("Median", format!("{:.2}", summary.median)),
            ("MAD", format!("{:.2}", summary.mad)),
            ("Scaled MAD (1.4826 &times; MAD)", format!("{:.2}", summary.scaled_mad)),
            (
                "Flagged",
                format!("{} / {}", summary.flagged_count, summary.total_count),
            ),
        ];

        let mut html = String::new();
        html.push_str("    <h2>Statistics Summary</h2>\n");
        html.push_str("    <table class=\"stats-table\">\n");
        for (label, value) in rows {
            html.push_str(&format!(
                "        <tr><th>{}</th><td class=\"numeric\">{}</td></tr>\n",
                label,
                Self::escape_html(&value)
            ));
        }
        html.push_str("    </table>\n");
        html
    }

    fn render_sweep(&self) -> String {
        if self.sweep.is_empty() {
            return String::new();
        }

        let mut html = String::new();
        html.push_str("    <h2>Threshold Sweep</h2>\n");
        html.push_str("    <table class=\"sweep-table\">\n");
        html.push_str("        <tr><th>Threshold |z| &ge;</th><th>Flagged</th></tr>\n");
        for point in self.sweep {
            html.push_str(&format!(
                "        <tr><td class=\"numeric\">{:.2}</td><td class=\"numeric\">{}</td></tr>\n",
                point.threshold, point.flagged_count
            ));
        }
        html.push_str("    </table>\n");
        html
    }

    /// Render flagged samples as HTML table
    fn render_flagged(&self) -> String {
        let mut html = String::new();
        html.push_str("    <h2>Flagged Samples</h2>\n");

        if self.report.flagged.is_empty() {
            html.push_str("    <p>No samples reached the threshold.</p>\n");
            return html;
        }

        html.push_str("    <table>\n");
        html.push_str("        <tr><th>Index</th><th>Value</th><th>z</th></tr>\n");
        for sample in &self.report.flagged {
            html.push_str(&format!(
                "        <tr><td class=\"numeric\">{}</td><td class=\"numeric\">{}</td><td class=\"numeric\">{:.2}</td></tr>\n",
                sample.index, sample.value, sample.z
            ));
        }
        html.push_str("    </table>\n");
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Madlens Outlier Report</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Robust Outlier Report</h1>\n");
        html.push_str(&self.render_chart());
        html.push_str(&self.render_summary());
        html.push_str(&self.render_sweep());
        html.push_str(&self.render_flagged());

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by Madlens - MAD-based outlier scoring\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robust::score;
    use crate::series::{generate, Series};

    #[test]
    fn test_html_escape() {
        assert_eq!(HtmlOutput::escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(HtmlOutput::escape_html("a&b"), "a&amp;b");
        assert_eq!(HtmlOutput::escape_html("\"test\""), "&quot;test&quot;");
        assert_eq!(HtmlOutput::escape_html("'test'"), "&#39;test&#39;");
    }

    #[test]
    fn test_html_basic_structure() {
        let report = score(&generate(42, 320), 3.5);
        let html = HtmlOutput::new(&report, 42).to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg class=\"chart\""));
        assert!(html.contains("Statistics Summary"));
        assert!(html.contains("Flagged Samples"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_one_circle_per_sample() {
        let report = score(&generate(42, 100), 3.5);
        let html = HtmlOutput::new(&report, 42).to_html();

        assert_eq!(html.matches("<circle").count(), 100);
        assert_eq!(
            html.matches("point-flagged\"").count(),
            report.summary.flagged_count
        );
    }

    #[test]
    fn test_no_flagged_message() {
        let report = score(&Series::from_values(vec![1.0; 10]), 3.5);
        let html = HtmlOutput::new(&report, 0).to_html();
        assert!(html.contains("No samples reached the threshold."));
    }

    #[test]
    fn test_value_range_padding() {
        let samples = score(&Series::from_values([0.0, 100.0]), 3.5).scored();
        let (lo, hi) = HtmlOutput::value_range(&samples);
        assert!(lo < 0.0 && hi > 100.0);

        assert_eq!(HtmlOutput::value_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_sweep_table_after_summary() {
        let report = score(&generate(42, 320), 3.5);
        let sweep = [
            SweepPoint {
                threshold: 2.0,
                flagged_count: 19,
            },
            SweepPoint {
                threshold: 6.0,
                flagged_count: 6,
            },
        ];
        let html = HtmlOutput::new(&report, 42).with_sweep(&sweep).to_html();

        let summary_at = html.find("Statistics Summary").unwrap();
        let sweep_at = html.find("Threshold Sweep").unwrap();
        assert!(summary_at < sweep_at);
        assert!(html.contains("<td class=\"numeric\">2.00</td><td class=\"numeric\">19</td>"));
        assert!(html.contains("<td class=\"numeric\">6.00</td><td class=\"numeric\">6</td>"));
    }

    #[test]
    fn test_no_sweep_section_by_default() {
        let report = score(&generate(42, 50), 3.5);
        let html = HtmlOutput::new(&report, 42).to_html();
        assert!(!html.contains("Threshold Sweep"));
    }

    #[test]
    fn test_empty_report_renders() {
        let report = score(&Series::default(), 3.5);
        let html = HtmlOutput::new(&report, 1).to_html();
        assert_eq!(html.matches("<circle").count(), 0);
    }
}
