//! # Secular Pipeline
//!
//! Parsing, aggregation, merging, and artifact I/O for the Secular market
//! history pipeline.
//!
//! This crate implements the stages between a raw delimited source table
//! and a typed annual series:
//!
//! - **Parsing**: positional column maps, decimal/percentage/price
//!   conversion, best-effort row skipping with diagnostics
//! - **Aggregation**: monthly index levels to annual returns via the
//!   index-ratio method, gated on twelve-month completeness
//! - **Merging**: inner join of independently sourced series by year
//! - **Artifacts**: generation of the downstream source artifact and the
//!   reverse read that re-parses one for reconciliation
//!
//! A pipeline run is a one-shot, stateless, single-threaded batch
//! transformation; every stage consumes its input and produces a fresh
//! collection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]

pub mod aggregate;
pub mod artifact;
pub mod convert;
pub mod merge;
pub mod parse;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{aggregate_annual, AggregateOutcome};
    pub use crate::artifact::{
        load_annual_artifact, load_yield_artifact, read_annual_artifact, read_yield_artifact,
        render_annual_artifact, render_yield_artifact, AnnualArtifactSpec, NYU_ARTIFACT,
        SHILLER_ARTIFACT, YIELD_COLLECTION,
    };
    pub use crate::merge::{intersect_years, join_annual, merge_with_yields, MergeOptions};
    pub use crate::parse::{
        parse_annual_table, parse_monthly_table, parse_yield_table, AnnualColumns, MonthlyColumns,
        Parsed, YieldColumns,
    };
    pub use crate::report::{ParseReport, RunSummary, SkippedRow};
}
