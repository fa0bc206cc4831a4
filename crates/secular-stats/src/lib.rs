//! # Secular Stats
//!
//! Statistics over merged annual series: summary statistics,
//! cross-source reconciliation, and Pearson correlation matrices.
//!
//! This crate operates entirely at the floating-point boundary: the
//! decimal pipeline has already done the precision-sensitive work by the
//! time a series reaches it.
//!
//! - **Summary**: mean, sample standard deviation, min, max per field
//! - **Windows**: year-range restriction and trailing N-year windows
//! - **Comparison**: per-year reconciliation of two annual series with
//!   largest-difference ranking
//! - **Correlation**: full pairwise Pearson matrices over a fixed field
//!   set, for the full range and a trailing window
//!
//! Empty inputs are not errors here: every engine returns `None` or an
//! empty result for an empty or non-overlapping series.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod compare;
pub mod correlation;
pub mod summary;
pub mod window;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compare::{compare_series, largest_differences, ComparisonStats};
    pub use crate::correlation::{correlation_matrix, pearson, CorrelationMatrix};
    pub use crate::summary::{summarize, summarize_annual_field, summarize_field, SummaryStats};
    pub use crate::window::{restrict_years, trailing};
}
