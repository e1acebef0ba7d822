//! CLI entry point for the summary-statistics reporter.

use anyhow::{Result, anyhow};
use clap::Parser;
use frame_stats::StatsReporter;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Per-column summary statistics for CSV datasets",
    long_about = "Profiles a CSV dataset and prints one row per column with its data type,\n\
                  percentage of missing values, and distinct non-null value count.\n\n\
                  EXAMPLES:\n  \
                  # Print the rendered summary table\n  \
                  frame-stats -i data.csv\n\n  \
                  # Machine-readable output for piping\n  \
                  frame-stats -i data.csv --json | jq .shape"
)]
struct Args {
    /// Path to the CSV file to summarize
    #[arg(short, long)]
    input: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the summary)
    #[arg(short, long)]
    quiet: bool,

    /// Output the profile as JSON instead of a rendered table
    ///
    /// Disables all logging; only JSON is written to stdout.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !std::path::Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    info!("Loading dataset from: {}", args.input);
    let data = load_csv_with_fallbacks(&args.input)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    if args.json {
        let profile = StatsReporter::profile(&data)?;
        println!("{}", profile.to_json()?);
        return Ok(());
    }

    StatsReporter::report(&data)?;
    Ok(())
}

/// Load a CSV file, retrying with progressively more forgiving settings.
fn load_csv_with_fallbacks(path: &str) -> Result<DataFrame> {
    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: pre-clean content (collapse doubled quotes, drop blank lines)
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cleaned = clean_csv_content(&content);
            let cursor = std::io::Cursor::new(cleaned);

            CsvReadOptions::default()
                .with_infer_schema_length(Some(100))
                .with_has_header(true)
                .into_reader_with_file_handle(cursor)
                .finish()
                .map_err(|e| e.into())
        }
        Err(e) => {
            error!("Could not read file: {}", e);
            Err(e.into())
        }
    }
}

fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
