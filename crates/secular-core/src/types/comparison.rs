//! Cross-source comparison record.

use serde::{Deserialize, Serialize};

/// Per-year reconciliation of one field across two independently produced
/// annual series.
///
/// `percent_diff` is `(difference / |value_b|) * 100`. When `value_b` is
/// exactly zero the ratio is undefined: the record carries `0.0` if both
/// values are zero and `f64::INFINITY` otherwise. Infinite rows stay in
/// the per-year listing but are excluded from aggregate statistics (see
/// `secular-stats`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Calendar year common to both series.
    pub year: i32,
    /// Field value from the first series.
    pub value_a: f64,
    /// Field value from the second (reference) series.
    pub value_b: f64,
    /// `value_a - value_b`.
    pub difference: f64,
    /// Percentage difference relative to `|value_b|`, or the infinite
    /// sentinel when undefined.
    pub percent_diff: f64,
}

impl ComparisonRecord {
    /// Creates a comparison record, deriving the difference and percent
    /// difference from the two values.
    #[must_use]
    pub fn new(year: i32, value_a: f64, value_b: f64) -> Self {
        let difference = value_a - value_b;
        let percent_diff = if value_b != 0.0 {
            (difference / value_b.abs()) * 100.0
        } else if value_a == 0.0 {
            0.0
        } else {
            f64::INFINITY
        };
        Self {
            year,
            value_a,
            value_b,
            difference,
            percent_diff,
        }
    }

    /// Returns true if the percent difference is defined (finite).
    #[must_use]
    pub fn has_finite_percent(&self) -> bool {
        self.percent_diff.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_diff() {
        let rec = ComparisonRecord::new(1950, 0.055, 0.05);
        assert!((rec.difference - 0.005).abs() < 1e-12);
        assert!((rec.percent_diff - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_reference_both_zero() {
        let rec = ComparisonRecord::new(1950, 0.0, 0.0);
        assert_eq!(rec.percent_diff, 0.0);
        assert!(rec.has_finite_percent());
    }

    #[test]
    fn test_zero_reference_sentinel() {
        let rec = ComparisonRecord::new(1950, 0.01, 0.0);
        assert!(rec.percent_diff.is_infinite());
        assert!(!rec.has_finite_percent());
    }

    #[test]
    fn test_negative_reference_uses_abs() {
        let rec = ComparisonRecord::new(1931, -0.44, -0.40);
        // diff = -0.04, |b| = 0.40 => -10%
        assert!((rec.percent_diff + 10.0).abs() < 1e-9);
    }
}
