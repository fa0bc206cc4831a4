//! Inner-join merging of independently sourced annual series.
//!
//! The join key is the year, and the join is strict: a year missing from
//! any input is absent from every derived statistic. There is no outer
//! join and no forward fill.
//!
//! Merging is also the decimal-to-float boundary. Decimal precision
//! matters while ratios are being chained within one source; once two
//! sources are joined for statistics, `f64` is sufficient and is what the
//! downstream engines consume.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use secular_core::types::{AnnualRecord, MergedRecord, YieldRecord};

/// Options for the merge step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Apply the real-to-nominal transform after the join.
    pub nominal: bool,
}

/// Sorted intersection of the year keys of two series.
pub fn intersect_years(a: impl IntoIterator<Item = i32>, b: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let a: BTreeSet<i32> = a.into_iter().collect();
    let b: BTreeSet<i32> = b.into_iter().collect();
    a.intersection(&b).copied().collect()
}

/// Inner-joins two annual series on year, ascending.
///
/// Used by the reconciliation path to pair records from two
/// independently produced series.
pub fn join_annual(a: &[AnnualRecord], b: &[AnnualRecord]) -> Vec<(AnnualRecord, AnnualRecord)> {
    let b_by_year: BTreeMap<i32, AnnualRecord> = b.iter().map(|r| (r.year, *r)).collect();
    let mut pairs: Vec<(AnnualRecord, AnnualRecord)> = a
        .iter()
        .filter_map(|ra| b_by_year.get(&ra.year).map(|rb| (*ra, *rb)))
        .collect();
    pairs.sort_by_key(|(ra, _)| ra.year);
    pairs
}

/// Inner-joins an annual return series with a yield series into the
/// transient merged series used by the statistics and correlation
/// engines.
pub fn merge_with_yields(
    annual: &[AnnualRecord],
    yields: &[YieldRecord],
    options: MergeOptions,
) -> Vec<MergedRecord> {
    let yields_by_year: BTreeMap<i32, YieldRecord> = yields.iter().map(|r| (r.year, *r)).collect();

    let mut merged: Vec<MergedRecord> = annual
        .iter()
        .filter_map(|annual_rec| {
            let yield_rec = yields_by_year.get(&annual_rec.year)?;
            let record = MergedRecord {
                year: annual_rec.year,
                stock_return: as_f64(annual_rec.stock_return),
                bond_return: as_f64(annual_rec.bond_return),
                cash_return: annual_rec.cash_return.map(as_f64),
                inflation_rate: as_f64(annual_rec.inflation_rate),
                stock_yield: as_f64(yield_rec.stock_yield),
                bond_yield: as_f64(yield_rec.bond_yield),
                stock_return_nominal: None,
                bond_return_nominal: None,
                cash_return_nominal: None,
            };
            Some(if options.nominal {
                record.with_nominal()
            } else {
                record
            })
        })
        .collect();
    merged.sort_by_key(|r| r.year);
    merged
}

/// Decimal to float at the statistics boundary.
fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn annual(year: i32) -> AnnualRecord {
        AnnualRecord::new(year, dec!(0.05), dec!(0.01), None, dec!(0.02))
    }

    fn yield_rec(year: i32) -> YieldRecord {
        YieldRecord::new(year, dec!(0.045), dec!(0.032))
    }

    #[test]
    fn test_intersect_years_is_set_intersection() {
        let a = 1928..=1980;
        let b = 1950..=2024;
        let common = intersect_years(a, b);
        assert_eq!(common.first(), Some(&1950));
        assert_eq!(common.last(), Some(&1980));
        assert_eq!(common.len(), 31);
    }

    #[test]
    fn test_merge_is_inner_join() {
        let annuals: Vec<AnnualRecord> = (1950..=1960).map(annual).collect();
        let yields: Vec<YieldRecord> = (1955..=1970).map(yield_rec).collect();
        let merged = merge_with_yields(&annuals, &yields, MergeOptions::default());
        let years: Vec<i32> = merged.iter().map(|r| r.year).collect();
        assert_eq!(years, (1955..=1960).collect::<Vec<_>>());
        assert!(merged[0].stock_return_nominal.is_none());
    }

    #[test]
    fn test_merge_with_nominal_transform() {
        let merged = merge_with_yields(
            &[annual(1950)],
            &[yield_rec(1950)],
            MergeOptions { nominal: true },
        );
        let nominal = merged[0].stock_return_nominal.unwrap();
        assert!((nominal - 0.071).abs() < 1e-9);
    }

    #[test]
    fn test_join_annual_pairs_by_year() {
        let a: Vec<AnnualRecord> = (1960..=1965).map(annual).collect();
        let b: Vec<AnnualRecord> = (1963..=1970).map(annual).collect();
        let pairs = join_annual(&a, &b);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0.year, 1963);
        assert_eq!(pairs[2].1.year, 1965);
    }
}
