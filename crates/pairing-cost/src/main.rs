//! Pairing cost estimator CLI.
//!
//! Reads the benchmark collector's JSON output and prints the projected
//! cost of naive verification across a sweep of transaction counts:
//!
//! ```bash
//! # collector output in the working directory
//! pairing-cost
//!
//! # or point at a specific results file
//! pairing-cost --input results/machine-b.json
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pairing_cost::sweep::{default_txn_counts, sweep_lines, DEFAULT_ELL, SEPARATOR};
use pairing_cost::BenchDb;

#[derive(Parser)]
#[command(name = "pairing-cost")]
#[command(about = "Projects naive verification costs from measured pairing benchmarks")]
struct Cli {
    /// Benchmark database produced by the collector
    #[arg(long, default_value = "benchmarking-results-nanoseconds.json")]
    input: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pairing_cost=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let db = BenchDb::load(&cli.input)
        .with_context(|| format!("loading benchmark database from {}", cli.input))?;
    info!(entries = db.len(), input = %cli.input, "benchmark database loaded");

    // full vocabulary of the collector, for diagnostic visibility
    for key in db.keys() {
        println!("{key}");
    }
    println!();

    println!("{SEPARATOR}");
    for line in sweep_lines(&db, &DEFAULT_ELL, &default_txn_counts())? {
        println!("{line}");
    }

    Ok(())
}
