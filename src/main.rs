use anyhow::{Context, Result};
use clap::Parser;
use titlecast::cli::Cli;
use titlecast::config::{Config, OutputFormat};
use titlecast::filter::CategoryFilter;
use titlecast::ingest::RecordParser;
use titlecast::json_output::JsonPrediction;
use titlecast::{Session, TargetQuery};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let config = cli.apply_overrides(config);
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

fn print_categories(session: &Session) {
    let categories = session.categories();
    if categories.is_empty() {
        println!("No category labels found ({} samples)", session.len());
        return;
    }

    for label in categories {
        println!("{}", label);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = load_config(&cli)?;
    let parser = RecordParser::new(config.parser.clone())?;
    let report = parser.load_file(&cli.input)?;

    for skipped in &report.skipped {
        tracing::warn!(
            "{}:{}: {}",
            cli.input.display(),
            skipped.line,
            skipped.reason
        );
    }
    if !report.skipped.is_empty() {
        eprintln!(
            "Skipped {} row(s) of {} (use --debug for details)",
            report.skipped.len(),
            report.skipped.len() + report.samples.len()
        );
    }

    let session = Session::from_samples(report.samples);

    if cli.list_categories {
        print_categories(&session);
        return Ok(());
    }

    let target: TargetQuery = cli
        .target
        .as_deref()
        .unwrap_or_default()
        .parse()?;
    let filter = CategoryFilter::only(&cli.categories);

    let outcome = session
        .predict(target, &filter)
        .with_context(|| format!("Cannot predict title number for house {}", target.house_number()))?;

    match config.output.format {
        OutputFormat::Text => print!("{}", outcome.to_report_string()),
        OutputFormat::Json => {
            let json = JsonPrediction::from(&outcome)
                .to_json()
                .context("Failed to serialize prediction")?;
            println!("{}", json);
        }
    }

    Ok(())
}
