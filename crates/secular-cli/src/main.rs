//! Secular CLI - Historical market data extraction and analysis.
//!
//! # Usage
//!
//! ```bash
//! # Extract monthly Shiller data into an annual-series artifact
//! secular extract shiller --input data/ie-data.csv --output historical-data.ts
//!
//! # Extract the NYU Stern annual table
//! secular extract nyu --input data/nyu-historical-data.csv --output nyu-historical-data.ts
//!
//! # Reconcile two generated series
//! secular compare --artifact-a nyu-historical-data.ts --collection-a nyuHistoricalData \
//!     --artifact-b historical-data.ts --collection-b historicalData
//!
//! # Correlation matrices over the merged series
//! secular correlate --annual nyu-historical-data.ts --yields shiller-yield-data.ts
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; skipped-row diagnostics arrive on stderr.
    let filter = if cli.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Extract(args) => commands::extract::execute(args, format)?,
        Commands::Compare(args) => commands::compare::execute(args, format)?,
        Commands::Correlate(args) => commands::correlate::execute(args, format)?,
        Commands::Stats(args) => commands::stats::execute(args, format)?,
    }

    Ok(())
}
