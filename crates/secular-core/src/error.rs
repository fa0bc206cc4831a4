//! Error types for the Secular pipeline.
//!
//! The taxonomy distinguishes row-scoped recoverable failures (a malformed
//! line in a community-maintained source file) from pipeline-scoped fatal
//! conditions (a missing input, or a zero base index that indicates source
//! corruption rather than a gap).

use thiserror::Error;

/// A specialized Result type for Secular operations.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// The main error type for Secular operations.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// A row could not be converted into a typed record.
    ///
    /// Row-scoped and recoverable: the parser skips the row, reports it,
    /// and continues.
    #[error("Row {line} skipped: {reason}")]
    RowParse {
        /// 1-based line number within the source table.
        line: u64,
        /// Description of what failed to convert.
        reason: String,
    },

    /// A return computation hit a zero-valued base index.
    ///
    /// Fatal for the run: a zero index level means the source data is
    /// corrupt, not merely incomplete, so this propagates instead of being
    /// silently excluded like a short year.
    #[error("Degenerate computation for {series} in {year}: zero base index")]
    DegenerateComputation {
        /// Year whose computation failed.
        year: i32,
        /// Which series hit the zero base (e.g. "stock index").
        series: String,
    },

    /// A required input artifact is missing.
    ///
    /// Aborts the run before any output is produced.
    #[error("Source not found: {path}")]
    SourceNotFound {
        /// Path that was expected to exist.
        path: String,
    },

    /// A header-labelled column required by the layout was not present.
    ///
    /// Pipeline-scoped: the table cannot be addressed without it.
    #[error("Missing column {label:?} in header")]
    MissingColumn {
        /// Header label that was expected.
        label: String,
    },

    /// A generated artifact did not contain the expected named collection,
    /// or a record inside it could not be parsed.
    #[error("Artifact format error: {reason}")]
    ArtifactFormat {
        /// Description of the failure.
        reason: String,
    },

    /// CSV-level read error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeriesError {
    /// Creates a row parse error.
    #[must_use]
    pub fn row_parse(line: u64, reason: impl Into<String>) -> Self {
        Self::RowParse {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a degenerate computation error.
    #[must_use]
    pub fn degenerate(year: i32, series: impl Into<String>) -> Self {
        Self::DegenerateComputation {
            year,
            series: series.into(),
        }
    }

    /// Creates a source-not-found error.
    #[must_use]
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(label: impl Into<String>) -> Self {
        Self::MissingColumn {
            label: label.into(),
        }
    }

    /// Creates an artifact format error.
    #[must_use]
    pub fn artifact_format(reason: impl Into<String>) -> Self {
        Self::ArtifactFormat {
            reason: reason.into(),
        }
    }

    /// Returns true if the error is row-scoped and the pipeline may continue.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RowParse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeriesError::row_parse(17, "empty first column");
        assert!(err.to_string().contains("Row 17"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_degenerate_error() {
        let err = SeriesError::degenerate(1929, "stock index");
        assert!(err.to_string().contains("1929"));
        assert!(!err.is_recoverable());
    }
}
