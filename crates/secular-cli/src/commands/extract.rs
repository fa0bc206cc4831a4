//! Extract command implementation.
//!
//! Parses a raw source table, runs the normalization pipeline, and writes
//! the generated annual-series artifact.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use secular_pipeline::aggregate::aggregate_annual;
use secular_pipeline::artifact::{
    render_annual_artifact, render_yield_artifact, NYU_ARTIFACT, SHILLER_ARTIFACT,
};
use secular_pipeline::parse::{
    parse_annual_table, parse_monthly_table, parse_yield_table, AnnualColumns, MonthlyColumns,
    YieldColumns,
};
use secular_pipeline::report::RunSummary;

use crate::cli::OutputFormat;
use crate::commands::resolve_path;
use crate::output::{print_output, print_success, KeyValue};

/// Arguments for the extract command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(subcommand)]
    pub command: ExtractCommand,
}

/// Extract subcommands, one per source layout.
#[derive(Subcommand, Debug)]
pub enum ExtractCommand {
    /// Monthly Shiller index levels, aggregated to annual returns
    Shiller(SourceArgs),

    /// NYU Stern annual percentage table
    Nyu(SourceArgs),

    /// Shiller price/dividend table, December yields only
    Yields(SourceArgs),
}

/// Common source/destination arguments.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Input CSV table
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output artifact path; written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory against which relative input paths are resolved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Executes the extract command.
pub fn execute(args: ExtractArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        ExtractCommand::Shiller(source) => extract_shiller(&source, format),
        ExtractCommand::Nyu(source) => extract_nyu(&source, format),
        ExtractCommand::Yields(source) => extract_yields(&source, format),
    }
}

fn extract_shiller(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let input = resolve_path(source.data_dir.as_deref(), &source.input);
    let parsed = parse_monthly_table(&input, &MonthlyColumns::default())?;
    let outcome = aggregate_annual(&parsed.records)?;

    let artifact = render_annual_artifact(&SHILLER_ARTIFACT, &outcome.records);
    emit(source, &artifact)?;

    let summary = RunSummary::new(&parsed.report, outcome.years_excluded, outcome.records.len());
    print_summary(source, &summary, format)
}

fn extract_nyu(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let input = resolve_path(source.data_dir.as_deref(), &source.input);
    let parsed = parse_annual_table(&input, &AnnualColumns::default())?;

    let artifact = render_annual_artifact(&NYU_ARTIFACT, &parsed.records);
    emit(source, &artifact)?;

    let summary = RunSummary::new(&parsed.report, 0, parsed.records.len());
    print_summary(source, &summary, format)
}

fn extract_yields(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let input = resolve_path(source.data_dir.as_deref(), &source.input);
    let parsed = parse_yield_table(&input, &YieldColumns::default())?;

    let artifact = render_yield_artifact(&parsed.records);
    emit(source, &artifact)?;

    let summary = RunSummary::new(&parsed.report, 0, parsed.records.len());
    print_summary(source, &summary, format)
}

/// Writes the artifact to the output path, or stdout when none is given.
fn emit(source: &SourceArgs, artifact: &str) -> Result<()> {
    match &source.output {
        Some(path) => {
            std::fs::write(path, artifact)?;
            print_success(&format!("Generated {}", path.display()));
        }
        None => print!("{artifact}"),
    }
    Ok(())
}

/// Renders the run summary; skip reasons have already gone to stderr via
/// tracing as the parse progressed. Suppressed when the artifact itself
/// went to stdout.
fn print_summary(source: &SourceArgs, summary: &RunSummary, format: OutputFormat) -> Result<()> {
    if source.output.is_none() {
        return Ok(());
    }
    match format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::new("Rows read", summary.rows_read.to_string()),
                KeyValue::new("Rows skipped", summary.rows_skipped.to_string()),
                KeyValue::new("Years excluded", summary.years_excluded.to_string()),
                KeyValue::new("Years in output", summary.years_out.to_string()),
            ];
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => {
            crate::output::print_single(summary, format)?;
        }
    }
    Ok(())
}
