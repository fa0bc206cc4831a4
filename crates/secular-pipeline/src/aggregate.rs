//! Annual aggregation of monthly records.
//!
//! The annual return for a series is the index ratio between the first
//! and last observation of the year: `(december / january) - 1`, computed
//! in decimal. A year participates only if all twelve months were parsed;
//! anything else is a completeness gap, excluded silently. A zero base
//! index is different: that is source corruption, and it propagates.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use secular_core::error::{SeriesError, SeriesResult};
use secular_core::types::{AnnualRecord, MonthlyRecord};

/// Result of one aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// Annual records for every complete year, ascending by year.
    pub records: Vec<AnnualRecord>,
    /// Years excluded by the twelve-month completeness gate.
    pub years_excluded: usize,
}

/// Aggregates monthly records into annual returns.
///
/// Groups by year, sorts each group by month, and for each group with
/// exactly twelve entries computes the stock, bond, and CPI-derived
/// returns independently. The CPI ratio becomes the inflation rate; the
/// monthly sources carry no cash series, so `cash_return` is `None`.
///
/// # Errors
///
/// Returns [`SeriesError::DegenerateComputation`] if any January index
/// level is zero.
pub fn aggregate_annual(monthly: &[MonthlyRecord]) -> SeriesResult<AggregateOutcome> {
    let mut by_year: BTreeMap<i32, Vec<MonthlyRecord>> = BTreeMap::new();
    for record in monthly {
        by_year.entry(record.year).or_default().push(*record);
    }

    let mut records = Vec::new();
    let mut years_excluded = 0;

    for (year, mut months) in by_year {
        months.sort_by_key(|m| m.month);
        if months.len() != 12 {
            years_excluded += 1;
            continue;
        }

        let first = &months[0];
        let last = &months[11];

        let stock_return = index_ratio(year, "stock index", first.stock_index, last.stock_index)?;
        let bond_return = index_ratio(year, "bond index", first.bond_index, last.bond_index)?;
        let inflation_rate = index_ratio(year, "cpi", first.cpi, last.cpi)?;

        records.push(AnnualRecord::new(
            year,
            stock_return,
            bond_return,
            None,
            inflation_rate,
        ));
    }

    Ok(AggregateOutcome {
        records,
        years_excluded,
    })
}

/// `(end / start) - 1` with the zero-base guard.
fn index_ratio(year: i32, series: &str, start: Decimal, end: Decimal) -> SeriesResult<Decimal> {
    if start.is_zero() {
        return Err(SeriesError::degenerate(year, series));
    }
    Ok(end / start - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_year(year: i32, start: Decimal, end: Decimal) -> Vec<MonthlyRecord> {
        (1..=12)
            .map(|month| {
                let level = if month == 12 { end } else { start };
                MonthlyRecord::new(year, month, level, dec!(100), dec!(17.1))
            })
            .collect()
    }

    #[test]
    fn test_index_ratio_exact() {
        // 100 -> 110 over a year is exactly 0.10.
        let months = full_year(1930, dec!(100), dec!(110));
        let outcome = aggregate_annual(&months).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].stock_return, dec!(0.10));
        assert_eq!(outcome.records[0].bond_return, dec!(0));
        assert_eq!(outcome.records[0].cash_return, None);
    }

    #[test]
    fn test_incomplete_year_excluded_silently() {
        // 1929 has months 1-11 only; 1930 is complete with 100 -> 105.
        let mut months: Vec<MonthlyRecord> = (1..=11)
            .map(|m| MonthlyRecord::new(1929, m, dec!(100), dec!(100), dec!(17)))
            .collect();
        months.extend(full_year(1930, dec!(100), dec!(105)));

        let outcome = aggregate_annual(&months).unwrap();
        let years: Vec<i32> = outcome.records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1930]);
        assert_eq!(outcome.years_excluded, 1);
        assert_eq!(outcome.records[0].stock_return, dec!(0.05));
    }

    #[test]
    fn test_months_sorted_before_ratio() {
        // Out-of-order input must still use January as the base.
        let mut months = full_year(1940, dec!(50), dec!(55));
        months.reverse();
        let outcome = aggregate_annual(&months).unwrap();
        assert_eq!(outcome.records[0].stock_return, dec!(0.10));
    }

    #[test]
    fn test_zero_base_propagates() {
        let months = full_year(1931, dec!(0), dec!(10));
        let err = aggregate_annual(&months).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::DegenerateComputation { year: 1931, .. }
        ));
    }

    #[test]
    fn test_thirteen_entries_excluded() {
        // A duplicated month is not a complete year either.
        let mut months = full_year(1950, dec!(100), dec!(101));
        months.push(MonthlyRecord::new(1950, 6, dec!(100), dec!(100), dec!(17)));
        let outcome = aggregate_annual(&months).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.years_excluded, 1);
    }
}
