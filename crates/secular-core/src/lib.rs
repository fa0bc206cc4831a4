//! # Secular Core
//!
//! Core types and abstractions for the Secular market history pipeline.
//!
//! This crate provides the foundational building blocks used throughout Secular:
//!
//! - **Records**: Typed monthly, annual, yield, merged, and comparison records
//! - **Field Selectors**: Name-addressable numeric fields for statistics
//! - **Errors**: The shared error taxonomy for parsing and aggregation
//!
//! ## Design Philosophy
//!
//! - **Decimal Through the Pipeline**: index levels and returns stay in
//!   `rust_decimal::Decimal` until the statistics boundary, so ~150 years of
//!   chained ratios do not accumulate binary rounding error
//! - **Value Objects**: every record is an immutable value; each pipeline
//!   stage consumes inputs and produces a new independent collection
//! - **Explicit Over Implicit**: row- and year-scoped failures are values,
//!   not panics
//!
//! ## Example
//!
//! ```rust
//! use secular_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = AnnualRecord::new(1930, dec!(0.05), dec!(0.02), None, dec!(-0.06));
//! assert_eq!(record.year, 1930);
//! ```

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
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SeriesError, SeriesResult};
    pub use crate::types::{
        AnnualRecord, ComparisonRecord, Dated, Field, MergedRecord, MonthlyRecord, YieldRecord,
    };
}

pub use error::{SeriesError, SeriesResult};
pub use types::{
    AnnualRecord, ComparisonRecord, Dated, Field, MergedRecord, MonthlyRecord, YieldRecord,
};
