//! Cross-source reconciliation of two annual series.
//!
//! Two independently produced series for the same market history will
//! disagree; this module quantifies by how much. Infinite
//! percent-difference sentinels (a zero reference value) stay in the
//! per-year listing but are excluded from the aggregate statistics.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use secular_core::types::{AnnualRecord, ComparisonRecord, Field};

/// Aggregate statistics over one field's comparison records.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComparisonStats {
    /// First compared year.
    pub start_year: i32,
    /// Last compared year.
    pub end_year: i32,
    /// Number of years compared.
    pub count: usize,
    /// Mean of the signed differences.
    pub mean_diff: f64,
    /// Sample standard deviation of the signed differences.
    pub std_dev_diff: f64,
    /// Maximum absolute difference.
    pub max_abs_diff: f64,
    /// Mean absolute percent difference, infinite sentinels excluded.
    pub mean_abs_pct: f64,
}

/// Builds per-year comparison records for one field over already-joined
/// record pairs.
///
/// Pairs where either side lacks the field (e.g. cash on a source
/// without one) are dropped.
#[must_use]
pub fn compare_series(
    pairs: &[(AnnualRecord, AnnualRecord)],
    field: Field,
) -> Vec<ComparisonRecord> {
    pairs
        .iter()
        .filter_map(|(a, b)| {
            let value_a = a.field(field)?.to_f64()?;
            let value_b = b.field(field)?.to_f64()?;
            Some(ComparisonRecord::new(a.year, value_a, value_b))
        })
        .collect()
}

impl ComparisonStats {
    /// Aggregates comparison records; `None` when there is nothing to
    /// compare.
    #[must_use]
    pub fn from_records(records: &[ComparisonRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let diffs: Vec<f64> = records.iter().map(|c| c.difference).collect();
        let n = diffs.len();
        let mean_diff = diffs.iter().sum::<f64>() / n as f64;
        let std_dev_diff = if n > 1 {
            let sum_sq: f64 = diffs.iter().map(|d| (d - mean_diff).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        let max_abs_diff = diffs.iter().map(|d| d.abs()).fold(0.0, f64::max);

        let finite_pcts: Vec<f64> = records
            .iter()
            .filter(|c| c.has_finite_percent())
            .map(|c| c.percent_diff.abs())
            .collect();
        let mean_abs_pct = if finite_pcts.is_empty() {
            0.0
        } else {
            finite_pcts.iter().sum::<f64>() / finite_pcts.len() as f64
        };

        Some(Self {
            start_year: records.first().map(|c| c.year)?,
            end_year: records.last().map(|c| c.year)?,
            count: n,
            mean_diff,
            std_dev_diff,
            max_abs_diff,
            mean_abs_pct,
        })
    }
}

/// The `n` comparison records with the largest absolute differences.
///
/// The sort is stable and descending by |difference|, so ties keep their
/// original ascending-year order.
#[must_use]
pub fn largest_differences(records: &[ComparisonRecord], n: usize) -> Vec<ComparisonRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| {
        b.difference
            .abs()
            .partial_cmp(&a.difference.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn pair(year: i32, a: f64, b: f64) -> ComparisonRecord {
        ComparisonRecord::new(year, a, b)
    }

    #[test]
    fn test_compare_series_by_field() {
        let pairs = vec![(
            AnnualRecord::new(1950, dec!(0.055), dec!(0.01), Some(dec!(0.002)), dec!(0.02)),
            AnnualRecord::new(1950, dec!(0.050), dec!(0.012), None, dec!(0.02)),
        )];
        let stock = compare_series(&pairs, Field::StockReturn);
        assert_eq!(stock.len(), 1);
        assert_relative_eq!(stock[0].difference, 0.005, epsilon = 1e-12);
        // Cash exists on only one side: nothing to compare.
        assert!(compare_series(&pairs, Field::CashReturn).is_empty());
    }

    #[test]
    fn test_stats_exclude_infinite_pct() {
        let records = vec![
            pair(1950, 0.05, 0.05),  // diff 0, pct 0
            pair(1951, 0.02, 0.0),   // infinite sentinel
            pair(1952, 0.06, 0.05),  // diff 0.01, pct 20
        ];
        let stats = ComparisonStats::from_records(&records).unwrap();
        assert_eq!(stats.count, 3);
        // Infinite row retained in the count but excluded from pct mean.
        assert_relative_eq!(stats.mean_abs_pct, 10.0, epsilon = 1e-9);
        assert_relative_eq!(stats.max_abs_diff, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_comparison_is_none() {
        assert!(ComparisonStats::from_records(&[]).is_none());
    }

    #[test]
    fn test_largest_differences_stable_ties() {
        let records = vec![
            pair(1950, 0.06, 0.05),  // |diff| 0.01
            pair(1951, 0.04, 0.05),  // |diff| 0.01, tie with 1950
            pair(1952, 0.10, 0.05),  // |diff| 0.05
            pair(1953, 0.05, 0.05),  // |diff| 0
        ];
        let top = largest_differences(&records, 3);
        assert_eq!(top[0].year, 1952);
        // Tied years keep ascending order.
        assert_eq!(top[1].year, 1950);
        assert_eq!(top[2].year, 1951);
    }
}
