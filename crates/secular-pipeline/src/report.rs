//! Run diagnostics.
//!
//! Parsing is best-effort: source tables are community-maintained and a
//! malformed row must not abort the run. Every skip is recorded here so
//! the caller can render a run summary (rows read, rows skipped with
//! reasons, years excluded, years in the final output).

use serde::Serialize;
use std::fmt;

/// One skipped row with the reason it could not be converted.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    /// 1-based line number within the source table (header included).
    pub line: u64,
    /// Raw row content, joined with commas.
    pub content: String,
    /// Why the row was skipped.
    pub reason: String,
}

/// Diagnostics from one parse pass over a raw table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows skipped, in source order.
    pub skipped: Vec<SkippedRow>,
}

impl ParseReport {
    /// Number of rows that were skipped.
    #[must_use]
    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Number of rows that produced a record.
    #[must_use]
    pub fn rows_parsed(&self) -> usize {
        self.rows_read - self.skipped.len()
    }

    pub(crate) fn skip(&mut self, line: u64, content: String, reason: String) {
        tracing::warn!(line, %reason, "skipping row: {content}");
        self.skipped.push(SkippedRow {
            line,
            content,
            reason,
        });
    }
}

/// Summary of a full pipeline run, suitable for printing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Data rows read from the source table.
    pub rows_read: usize,
    /// Rows skipped with a diagnostic.
    pub rows_skipped: usize,
    /// Years excluded by the twelve-month completeness gate.
    pub years_excluded: usize,
    /// Years present in the final output series.
    pub years_out: usize,
}

impl RunSummary {
    /// Builds a summary from a parse report and aggregation counts.
    #[must_use]
    pub fn new(report: &ParseReport, years_excluded: usize, years_out: usize) -> Self {
        Self {
            rows_read: report.rows_read,
            rows_skipped: report.rows_skipped(),
            years_excluded,
            years_out,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows read, {} skipped, {} years excluded, {} years in output",
            self.rows_read, self.rows_skipped, self.years_excluded, self.years_out
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = ParseReport {
            rows_read: 10,
            ..Default::default()
        };
        report.skip(3, "bad,row".into(), "short row".into());
        assert_eq!(report.rows_skipped(), 1);
        assert_eq!(report.rows_parsed(), 9);

        let summary = RunSummary::new(&report, 2, 7);
        assert!(summary.to_string().contains("10 rows read"));
        assert!(summary.to_string().contains("2 years excluded"));
    }
}
