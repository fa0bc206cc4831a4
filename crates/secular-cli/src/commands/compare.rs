//! Compare command implementation.
//!
//! Reconciles two independently produced annual-series artifacts over
//! their overlapping years: per-field difference statistics, the years
//! with the largest differences, and the cross-source correlation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use secular_core::types::{ComparisonRecord, Field};
use secular_pipeline::artifact::load_annual_artifact;
use secular_pipeline::merge::join_annual;
use secular_stats::compare::{compare_series, largest_differences, ComparisonStats};
use secular_stats::correlation::pearson;

use crate::cli::OutputFormat;
use crate::commands::{parse_field, resolve_path};
use crate::output::{print_header, print_output, print_single, print_warning, KeyValue};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First generated artifact (the values under scrutiny)
    #[arg(long)]
    pub artifact_a: PathBuf,

    /// Collection name declared in the first artifact
    #[arg(long, default_value = "nyuHistoricalData")]
    pub collection_a: String,

    /// Second generated artifact (the reference values)
    #[arg(long)]
    pub artifact_b: PathBuf,

    /// Collection name declared in the second artifact
    #[arg(long, default_value = "historicalData")]
    pub collection_b: String,

    /// Number of largest-difference years to surface per field
    #[arg(long, default_value = "5")]
    pub top: usize,

    /// Fields to compare (comma-separated artifact field names)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "stockReturn,bondReturn,inflationRate"
    )]
    pub fields: Vec<String>,

    /// Directory against which relative paths are resolved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Reconciliation report for one field.
#[derive(Debug, Serialize)]
struct FieldReport {
    field: String,
    stats: Option<ComparisonStats>,
    correlation: f64,
    largest: Vec<ComparisonRecord>,
}

/// One comparison row, formatted for display.
#[derive(Debug, Serialize, Tabled)]
struct CompareRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "A")]
    value_a: String,
    #[tabled(rename = "B")]
    value_b: String,
    #[tabled(rename = "Diff")]
    difference: String,
    #[tabled(rename = "Diff %")]
    percent_diff: String,
}

impl CompareRow {
    fn new(field: &Field, record: &ComparisonRecord) -> Self {
        let percent = if record.has_finite_percent() {
            format!("{:.1}%", record.percent_diff)
        } else {
            "undefined".to_string()
        };
        Self {
            field: field.to_string(),
            year: record.year,
            value_a: format!("{:.4}", record.value_a),
            value_b: format!("{:.4}", record.value_b),
            difference: format!("{:.4}", record.difference),
            percent_diff: percent,
        }
    }
}

/// Executes the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat) -> Result<()> {
    let path_a = resolve_path(args.data_dir.as_deref(), &args.artifact_a);
    let path_b = resolve_path(args.data_dir.as_deref(), &args.artifact_b);

    let series_a = load_annual_artifact(&path_a, &args.collection_a)?;
    let series_b = load_annual_artifact(&path_b, &args.collection_b)?;
    let pairs = join_annual(&series_a, &series_b);

    if pairs.is_empty() {
        print_warning("No overlapping years between the two series.");
        return Ok(());
    }

    let fields: Vec<Field> = args
        .fields
        .iter()
        .map(|name| parse_field(name))
        .collect::<Result<_, _>>()?;

    let mut reports = Vec::new();
    for field in &fields {
        let records = compare_series(&pairs, *field);
        let (values_a, values_b): (Vec<f64>, Vec<f64>) =
            records.iter().map(|c| (c.value_a, c.value_b)).unzip();
        reports.push(FieldReport {
            field: field.to_string(),
            stats: ComparisonStats::from_records(&records),
            correlation: pearson(&values_a, &values_b),
            largest: largest_differences(&records, args.top),
        });
    }

    match format {
        OutputFormat::Table => print_table_report(&reports, &fields),
        OutputFormat::Json => print_single(&reports, format),
        OutputFormat::Csv => {
            let rows: Vec<CompareRow> = reports
                .iter()
                .zip(&fields)
                .flat_map(|(report, field)| {
                    report.largest.iter().map(|r| CompareRow::new(field, r))
                })
                .collect();
            print_output(&rows, format)
        }
    }
}

fn print_table_report(reports: &[FieldReport], fields: &[Field]) -> Result<()> {
    for (report, field) in reports.iter().zip(fields) {
        print_header(&format!("{} comparison", report.field));

        let Some(stats) = &report.stats else {
            print_warning("Nothing to compare for this field.");
            continue;
        };

        let summary = vec![
            KeyValue::new(
                "Years compared",
                format!("{} - {} ({})", stats.start_year, stats.end_year, stats.count),
            ),
            KeyValue::from_f64("Mean difference", stats.mean_diff, 4),
            KeyValue::from_f64("Std dev of differences", stats.std_dev_diff, 4),
            KeyValue::from_f64("Max absolute difference", stats.max_abs_diff, 4),
            KeyValue::new("Mean absolute diff %", format!("{:.2}%", stats.mean_abs_pct)),
            KeyValue::from_f64("Correlation", report.correlation, 4),
        ];
        print_output(&summary, OutputFormat::Table)?;

        let rows: Vec<CompareRow> = report
            .largest
            .iter()
            .map(|r| CompareRow::new(field, r))
            .collect();
        if !rows.is_empty() {
            print_header("Largest differences");
            print_output(&rows, OutputFormat::Table)?;
        }
    }
    Ok(())
}
