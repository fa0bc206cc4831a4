//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CompareArgs, CorrelateArgs, ExtractArgs, StatsArgs};

/// Secular - Historical market data normalization and statistics
#[derive(Parser)]
#[command(name = "secular")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a raw source table into an annual-series artifact
    Extract(ExtractArgs),

    /// Reconcile two independently produced annual series
    Compare(CompareArgs),

    /// Correlation matrices over a merged annual + yield series
    Correlate(CorrelateArgs),

    /// Summary statistics for an annual-series artifact
    Stats(StatsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
