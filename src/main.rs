//! CLI entry point for the flight deal analyzer.
//!
//! Scans a directory of captured flight-price snapshot files, aggregates
//! the best prices per destination and departure airport, and prints a
//! ranked deal report to stdout.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use flight_deal_analyzer::{
    aggregate::DealAnalysis,
    ingest::scan_directory,
    report::build_report,
    tables::{BUDGET_CEILING, Lookups},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "flight_deal_analyzer")]
#[command(about = "Rank the cheapest flight deals from captured price snapshots", long_about = None)]
struct Cli {
    /// Directory containing snapshot JSON files
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/flight_deal_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("flight_deal_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    run(&cli.data_dir)
}

/// Runs the full batch: scan, aggregate, report.
#[tracing::instrument(fields(data_dir = %data_dir.display()))]
fn run(data_dir: &Path) -> Result<()> {
    let started_at = Utc::now();

    let scan = scan_directory(data_dir)?;
    info!(
        files_scanned = scan.files_scanned,
        files_errored = scan.files_errored,
        files_without_record = scan.files_without_record,
        valid_records = scan.records.len(),
        "Snapshot scan complete"
    );

    let analysis = DealAnalysis::from_records(scan.records);
    let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

    print!("{}", report);

    info!(
        destinations = analysis.destinations.len(),
        airports = analysis.airports.len(),
        total_records = analysis.total_records,
        under_budget = analysis.below_budget(BUDGET_CEILING),
        started_at = %started_at,
        "Report complete"
    );

    Ok(())
}
