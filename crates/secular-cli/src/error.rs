//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid year range.
    #[error("Invalid year range: {start} to {end}")]
    InvalidYearRange {
        /// Requested start year.
        start: i32,
        /// Requested end year.
        end: i32,
    },

    /// Unknown field name.
    #[error("Unknown field: {0}. Expected one of stockReturn, bondReturn, cashReturn, inflationRate.")]
    UnknownField(String),

    /// Pipeline-level failure.
    #[error(transparent)]
    Series(#[from] secular_core::SeriesError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
