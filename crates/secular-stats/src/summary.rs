//! Summary statistics over a named field of a series.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use secular_core::types::{AnnualRecord, Field, MergedRecord};

/// Mean, sample standard deviation, min, and max of one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (divisor n-1); zero for a single value.
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Number of values that entered the computation.
    pub count: usize,
}

/// Computes summary statistics over raw values.
///
/// Returns `None` for an empty input; requesting statistics on an empty
/// or non-overlapping series is a warning condition, not an error.
#[must_use]
pub fn summarize(values: &[f64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SummaryStats {
        mean,
        std_dev,
        min,
        max,
        count: n,
    })
}

/// Summary statistics for one field of a merged series.
///
/// Records where the field is absent (a missing cash series, nominal
/// fields before the transform) are left out of the projection.
#[must_use]
pub fn summarize_field(series: &[MergedRecord], field: Field) -> Option<SummaryStats> {
    let values: Vec<f64> = series.iter().filter_map(|r| field.extract(r)).collect();
    summarize(&values)
}

/// Summary statistics for one field of an annual series.
#[must_use]
pub fn summarize_annual_field(series: &[AnnualRecord], field: Field) -> Option<SummaryStats> {
    let values: Vec<f64> = series
        .iter()
        .filter_map(|r| r.field(field).and_then(|d| d.to_f64()))
        .collect();
    summarize(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_series_is_none() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        // Sample variance of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is 32/7.
        let stats = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(stats.mean, 5.0);
        assert_relative_eq!(stats.std_dev, (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(stats.min, 2.0);
        assert_relative_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_single_value() {
        let stats = summarize(&[0.05]).unwrap();
        assert_relative_eq!(stats.mean, 0.05);
        assert_relative_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_annual_field_projection() {
        let series = vec![
            AnnualRecord::new(1950, dec!(0.05), dec!(0.01), None, dec!(0.02)),
            AnnualRecord::new(1951, dec!(0.15), dec!(0.02), None, dec!(0.03)),
        ];
        let stats = summarize_annual_field(&series, Field::StockReturn).unwrap();
        assert_relative_eq!(stats.mean, 0.10, epsilon = 1e-12);
        // Cash series absent everywhere: no values, no stats.
        assert_eq!(summarize_annual_field(&series, Field::CashReturn), None);
    }
}
