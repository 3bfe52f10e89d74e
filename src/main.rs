mod analytics;
mod engine;
mod enrichment;
mod ingest;
mod models;
mod report;
mod types;

use std::path::Path;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::SalesPipeline;
use crate::enrichment::DummyJsonCatalog;

const DEFAULT_OUTPUT: &str = "output/sales_report.txt";

#[tokio::main]
async fn main() {
    //NOTE: Three positional arguments did not feel worth bringing in the clap crate for
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sales-analytics-engine [input].txt [output:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let input = &args[1];
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    // Single top-level catch: whatever escapes the pipeline is reported
    // here and the process exits cleanly instead of unwinding further
    if let Err(error) = run(Path::new(input), Path::new(output)).await {
        eprintln!("Pipeline failed: {error:#}");
        exit(1);
    }
}

async fn run(input: &Path, output: &Path) -> Result<()> {
    let catalog = DummyJsonCatalog::new()?;
    let pipeline = SalesPipeline::new(catalog);

    let timer = Instant::now();
    let outcome = pipeline.run(input, output).await?;
    let duration = timer.elapsed();

    info!("Pipeline completed in: {duration:?}");

    let validation = &outcome.validation;

    println!("Total records parsed: {}", validation.total_input);
    println!("Invalid records removed: {}", validation.invalid_count());
    println!("Valid records after cleaning: {}", validation.final_count);
    println!("Catalog match rate: {}", report::percent(outcome.enrichment.success_rate));
    println!("Report written to: {}", outcome.report_path.display());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Narration and the final summary go to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
