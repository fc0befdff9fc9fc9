//! EmSearch CLI
//!
//! Launches the terminal search screen over the built-in dataset or a
//! JSON file supplied on the command line.

use clap::Parser;
use console::style;
use emsearch::directory::{self, InMemoryDirectory};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// EmSearch - terminal employee search
///
/// Looks up employee records by employee number or name against a mock
/// directory that simulates backend latency.
#[derive(Parser)]
#[command(name = "emsearch")]
#[command(author = "EmSearch Contributors")]
#[command(version)]
#[command(about = "Terminal employee search", long_about = None)]
struct Cli {
    /// Load employee records from a JSON file instead of the built-in dataset
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Simulated backend latency in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Log file path (default: emsearch.log next to the executable)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> emsearch::Result<()> {
    emsearch::logging::init(cli.log_file.as_deref())?;
    tracing::info!(version = emsearch::VERSION, "emsearch starting up");

    let records = match &cli.data {
        Some(path) => directory::load_records(path)?,
        None => directory::builtin_records(),
    };
    tracing::info!(count = records.len(), "employee records loaded");

    let directory = Arc::new(
        InMemoryDirectory::new(records).with_latency(Duration::from_millis(cli.delay_ms)),
    );

    emsearch::tui::run(directory)
}
