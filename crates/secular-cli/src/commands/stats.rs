//! Stats command implementation.
//!
//! Prints summary statistics (mean, sample standard deviation, min,
//! max) for each return field of an annual artifact, optionally
//! restricted to a year range.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use secular_core::types::Field;
use secular_pipeline::artifact::load_annual_artifact;
use secular_stats::summary::{summarize_annual_field, SummaryStats};
use secular_stats::window::restrict_years;

use crate::cli::OutputFormat;
use crate::commands::{resolve_path, validate_year_range};
use crate::output::{print_header, print_output, print_warning};

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Annual return artifact to summarize
    #[arg(long)]
    pub artifact: PathBuf,

    /// Collection name declared in the artifact
    #[arg(long, default_value = "nyuHistoricalData")]
    pub collection: String,

    /// First year of the range (inclusive)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of the range (inclusive)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Directory against which relative paths are resolved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Per-field summary row, pre-formatted as percentages.
#[derive(Debug, Serialize, Tabled)]
struct StatsRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Years")]
    count: usize,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Std Dev")]
    std_dev: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

impl StatsRow {
    fn new(field: Field, stats: &SummaryStats) -> Self {
        Self {
            field: field.to_string(),
            count: stats.count,
            mean: format!("{:.2}%", stats.mean * 100.0),
            std_dev: format!("{:.2}%", stats.std_dev * 100.0),
            min: format!("{:.2}%", stats.min * 100.0),
            max: format!("{:.2}%", stats.max * 100.0),
        }
    }
}

/// Executes the stats command.
pub fn execute(args: StatsArgs, format: OutputFormat) -> Result<()> {
    let path = resolve_path(args.data_dir.as_deref(), &args.artifact);
    let mut records = load_annual_artifact(&path, &args.collection)?;

    if args.start_year.is_some() || args.end_year.is_some() {
        let start = args.start_year.unwrap_or(i32::MIN);
        let end = args.end_year.unwrap_or(i32::MAX);
        validate_year_range(start, end)?;
        records = restrict_years(&records, start, end);
    }

    if records.is_empty() {
        print_warning("No years in the requested range.");
        return Ok(());
    }

    let rows: Vec<StatsRow> = [
        Field::StockReturn,
        Field::BondReturn,
        Field::CashReturn,
        Field::InflationRate,
    ]
    .into_iter()
    .filter_map(|field| {
        summarize_annual_field(&records, field).map(|stats| StatsRow::new(field, &stats))
    })
    .collect();

    if matches!(format, OutputFormat::Table) {
        let first = records.first().map(|r| r.year).unwrap_or_default();
        let last = records.last().map(|r| r.year).unwrap_or_default();
        print_header(&format!("Summary statistics: {} - {}", first, last));
    }
    print_output(&rows, format)
}
