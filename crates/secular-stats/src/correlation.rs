//! Pearson correlation matrices over a merged series.

use nalgebra::DMatrix;
use serde::Serialize;

use secular_core::types::{Field, MergedRecord};

/// A labelled pairwise Pearson correlation matrix.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Fields, in the fixed order of the rows and columns.
    pub fields: Vec<Field>,
    /// The matrix entries; symmetric with a unit diagonal.
    #[serde(serialize_with = "serialize_matrix")]
    pub matrix: DMatrix<f64>,
    /// First year of the underlying series.
    pub start_year: i32,
    /// Last year of the underlying series.
    pub end_year: i32,
    /// Number of years in the underlying series.
    pub count: usize,
}

impl CorrelationMatrix {
    /// The correlation between fields `i` and `j` (row/column order).
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }
}

fn serialize_matrix<S: serde::Serializer>(
    matrix: &DMatrix<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeSeq;
    let mut rows = serializer.serialize_seq(Some(matrix.nrows()))?;
    for i in 0..matrix.nrows() {
        let row: Vec<f64> = (0..matrix.ncols()).map(|j| matrix[(i, j)]).collect();
        rows.serialize_element(&row)?;
    }
    rows.end()
}

/// Pearson correlation coefficient via the computational formula:
///
/// `r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)·(n·Σy² − (Σy)²))`
///
/// A degenerate pair (constant series, or fewer than two points) has an
/// exactly-zero denominator and is reported as `0.0` rather than an error.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];

    let n_f = n as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();
    let sum_y2: f64 = ys.iter().map(|y| y * y).sum();

    let numerator = n_f * sum_xy - sum_x * sum_y;
    let denominator = ((n_f * sum_x2 - sum_x * sum_x) * (n_f * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 || denominator.is_nan() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Computes the full pairwise correlation matrix over `fields`.
///
/// For each field pair, only the years where both fields are present
/// participate. Returns `None` for an empty series.
#[must_use]
pub fn correlation_matrix(series: &[MergedRecord], fields: &[Field]) -> Option<CorrelationMatrix> {
    if series.is_empty() {
        return None;
    }

    let n = fields.len();
    let matrix = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            return 1.0;
        }
        let (xs, ys): (Vec<f64>, Vec<f64>) = series
            .iter()
            .filter_map(|r| Some((fields[i].extract(r)?, fields[j].extract(r)?)))
            .unzip();
        pearson(&xs, &ys)
    });

    Some(CorrelationMatrix {
        fields: fields.to_vec(),
        matrix,
        start_year: series.iter().map(|r| r.year).min()?,
        end_year: series.iter().map(|r| r.year).max()?,
        count: series.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::trailing;
    use approx::assert_relative_eq;

    fn record(year: i32, stock: f64, bond: f64) -> MergedRecord {
        MergedRecord {
            year,
            stock_return: stock,
            bond_return: bond,
            cash_return: None,
            inflation_rate: 0.02,
            stock_yield: 0.04,
            bond_yield: 0.03,
            stock_return_nominal: None,
            bond_return_nominal: None,
            cash_return_nominal: None,
        }
    }

    #[test]
    fn test_self_correlation_is_one() {
        let xs = [0.05, -0.12, 0.31, 0.07, -0.02];
        assert_relative_eq!(pearson(&xs, &xs), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perfect_anticorrelation() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert_relative_eq!(pearson(&xs, &ys), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_is_zero() {
        let xs = [0.05, -0.12, 0.31];
        let constant = [0.02, 0.02, 0.02];
        assert_relative_eq!(pearson(&xs, &constant), 0.0);
        assert_relative_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn test_matrix_diagonal_and_symmetry() {
        let series: Vec<MergedRecord> = (0..20)
            .map(|i| record(1950 + i, 0.01 * f64::from(i), 0.3 - 0.01 * f64::from(i)))
            .collect();
        let fields = [Field::StockReturn, Field::BondReturn, Field::InflationRate];
        let corr = correlation_matrix(&series, &fields).unwrap();
        assert_relative_eq!(corr.get(0, 0), 1.0);
        assert_relative_eq!(corr.get(0, 1), corr.get(1, 0));
        // Stock and bond move in exact opposition here.
        assert_relative_eq!(corr.get(0, 1), -1.0, epsilon = 1e-9);
        // Inflation is constant: degenerate pairs report zero.
        assert_relative_eq!(corr.get(0, 2), 0.0);
        assert_eq!((corr.start_year, corr.end_year), (1950, 1969));
    }

    #[test]
    fn test_empty_series_is_none() {
        assert!(correlation_matrix(&[], &Field::CORRELATION_SET).is_none());
    }

    #[test]
    fn test_trailing_window_matrix() {
        let series: Vec<MergedRecord> = (0..50)
            .map(|i| record(1950 + i, 0.01 * f64::from(i), 0.02))
            .collect();
        let window = trailing(&series, 35);
        let corr = correlation_matrix(&window, &[Field::StockReturn, Field::BondReturn]).unwrap();
        assert_eq!(corr.count, 35);
        assert_eq!(corr.start_year, 1965);
    }
}
