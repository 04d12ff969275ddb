use anyhow::{Context, Result};
use clap::Parser;
use madlens::cli::{Cli, OutputFormat};
use madlens::config::DetectorConfig;
use madlens::csv_output::{sweep_to_csv, CsvOutput};
use madlens::html_output::HtmlOutput;
use madlens::json_output::JsonOutput;
use madlens::robust::THRESHOLD_RANGE;
use madlens::session::{threshold_steps, DetectorSession, SweepPoint};
use madlens::text_output;
use tracing_subscriber::EnvFilter;

/// Step between thresholds in `--sweep`
const SWEEP_STEP: f64 = 0.5;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the effective configuration: file (if any), then flag overrides
fn load_config(args: &Cli) -> Result<DetectorConfig> {
    let base = match &args.config {
        Some(path) => DetectorConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => DetectorConfig::default(),
    };

    let config = args.merge_into(base);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Render the report in the requested format
fn render(
    format: OutputFormat,
    config: &DetectorConfig,
    session: &DetectorSession,
    sweep: Option<Vec<SweepPoint>>,
) -> Result<String> {
    let report = session.report();

    let rendered = match format {
        OutputFormat::Text => {
            let mut text = text_output::to_report_string(&report, config.seed);
            if let Some(points) = &sweep {
                text.push_str(&text_output::sweep_to_string(points));
            }
            text
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new(config, &report);
            if let Some(points) = sweep {
                output.set_sweep(points);
            }
            let mut json = output.to_json()?;
            json.push('\n');
            json
        }
        // A CSV holds one table, so a sweep replaces the per-sample rows
        OutputFormat::Csv => match &sweep {
            Some(points) => sweep_to_csv(points),
            None => CsvOutput::from_report(&report).to_csv(),
        },
        OutputFormat::Html => {
            let points = sweep.as_deref().unwrap_or_default();
            HtmlOutput::new(&report, config.seed)
                .with_sweep(points)
                .to_html()
        }
    };

    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Reject bad configuration before anything is generated
    let config = load_config(&args)?;

    let session = DetectorSession::new(config.clone())?;

    let sweep = if args.sweep {
        let thresholds = threshold_steps(
            *THRESHOLD_RANGE.start(),
            *THRESHOLD_RANGE.end(),
            SWEEP_STEP,
        );
        Some(session.sweep(&thresholds)?)
    } else {
        None
    };

    let rendered = render(args.format, &config, &session, sweep)?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}
