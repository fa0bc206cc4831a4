//! Correlate command implementation.
//!
//! Merges an annual return artifact with a December yield artifact over
//! their overlapping years and prints pairwise Pearson correlation
//! matrices for the full range and for a trailing window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use secular_core::types::Field;
use secular_pipeline::artifact::{load_annual_artifact, load_yield_artifact, YIELD_COLLECTION};
use secular_pipeline::merge::{merge_with_yields, MergeOptions};
use secular_stats::correlation::{correlation_matrix, CorrelationMatrix};
use secular_stats::window::trailing;

use crate::cli::OutputFormat;
use crate::commands::resolve_path;
use crate::output::{print_header, print_single, print_warning};

/// Arguments for the correlate command.
#[derive(Args, Debug)]
pub struct CorrelateArgs {
    /// Annual return artifact to correlate
    #[arg(long)]
    pub annual: PathBuf,

    /// Collection name declared in the annual artifact
    #[arg(long, default_value = "nyuHistoricalData")]
    pub collection: String,

    /// December yield artifact
    #[arg(long)]
    pub yields: PathBuf,

    /// Collection name declared in the yield artifact
    #[arg(long, default_value = YIELD_COLLECTION)]
    pub yield_collection: String,

    /// Trailing window length in years for the second matrix
    #[arg(long, default_value = "35")]
    pub window: usize,

    /// Correlate real returns instead of nominal ones
    #[arg(long)]
    pub real: bool,

    /// Directory against which relative paths are resolved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Full-range and trailing-window matrices, bundled for serialization.
#[derive(Debug, Serialize)]
struct CorrelationReport {
    full_range: CorrelationMatrix,
    trailing: Option<CorrelationMatrix>,
}

/// Executes the correlate command.
pub fn execute(args: CorrelateArgs, format: OutputFormat) -> Result<()> {
    let annual_path = resolve_path(args.data_dir.as_deref(), &args.annual);
    let yields_path = resolve_path(args.data_dir.as_deref(), &args.yields);

    let annual = load_annual_artifact(&annual_path, &args.collection)?;
    let yields = load_yield_artifact(&yields_path, &args.yield_collection)?;

    let options = MergeOptions {
        nominal: !args.real,
    };
    let merged = merge_with_yields(&annual, &yields, options);

    let fields: Vec<Field> = if args.real {
        vec![
            Field::StockReturn,
            Field::BondReturn,
            Field::CashReturn,
            Field::InflationRate,
            Field::BondYield,
            Field::StockYield,
        ]
    } else {
        Field::CORRELATION_SET.to_vec()
    };

    let Some(full_range) = correlation_matrix(&merged, &fields) else {
        print_warning("No overlapping years between returns and yields.");
        return Ok(());
    };

    let windowed = trailing(&merged, args.window);
    let report = CorrelationReport {
        full_range,
        trailing: correlation_matrix(&windowed, &fields),
    };

    match format {
        OutputFormat::Table => print_report(&report),
        OutputFormat::Json => print_single(&report, OutputFormat::Json),
        OutputFormat::Csv => print_csv(&report.full_range),
    }
}

fn print_csv(matrix: &CorrelationMatrix) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    let mut header = vec!["field".to_string()];
    header.extend(matrix.fields.iter().map(|f| f.label().to_string()));
    wtr.write_record(&header)?;
    for (i, field) in matrix.fields.iter().enumerate() {
        let mut row = vec![field.label().to_string()];
        row.extend((0..matrix.fields.len()).map(|j| format!("{:.6}", matrix.get(i, j))));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_report(report: &CorrelationReport) -> Result<()> {
    print_matrix("Correlation matrix (full range)", &report.full_range);
    match &report.trailing {
        Some(matrix) => {
            print_matrix(
                &format!("Correlation matrix (last {} years)", matrix.count),
                matrix,
            );
        }
        None => print_warning("Not enough years for the trailing window."),
    }
    Ok(())
}

fn print_matrix(title: &str, matrix: &CorrelationMatrix) {
    print_header(&format!(
        "{}: {} - {} ({} years)",
        title, matrix.start_year, matrix.end_year, matrix.count
    ));

    let mut builder = tabled::builder::Builder::default();
    let mut header = vec![String::new()];
    header.extend(matrix.fields.iter().map(|f| f.label().to_string()));
    builder.push_record(header);

    for (i, field) in matrix.fields.iter().enumerate() {
        let mut row = vec![field.label().to_string()];
        row.extend((0..matrix.fields.len()).map(|j| format!("{:.4}", matrix.get(i, j))));
        builder.push_record(row);
    }

    let table = builder.build().with(tabled::settings::Style::rounded()).to_string();
    println!("{}", table);
}
