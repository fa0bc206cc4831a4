//! Annual return record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One year of real annual returns plus the inflation rate.
///
/// Either parsed directly from an annual-granularity source (NYU Stern,
/// which also carries a cash return), or derived by the annual aggregator
/// from twelve same-year [`MonthlyRecord`](super::MonthlyRecord)s (Shiller,
/// which has no cash series, so `cash_return` is `None` there).
///
/// The year is the unique key within a series. A year appears in an
/// aggregated series only if all twelve months were present and parsed;
/// partial years are dropped entirely, never estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualRecord {
    /// Calendar year (unique key within a series).
    pub year: i32,
    /// Real annual stock return as a fraction (0.05 = 5%).
    pub stock_return: Decimal,
    /// Real annual bond return as a fraction.
    pub bond_return: Decimal,
    /// Real annual cash return, where the source provides one.
    pub cash_return: Option<Decimal>,
    /// Annual inflation rate (CPI-based) as a fraction.
    pub inflation_rate: Decimal,
}

impl AnnualRecord {
    /// Creates a new annual record.
    #[must_use]
    pub fn new(
        year: i32,
        stock_return: Decimal,
        bond_return: Decimal,
        cash_return: Option<Decimal>,
        inflation_rate: Decimal,
    ) -> Self {
        Self {
            year,
            stock_return,
            bond_return,
            cash_return,
            inflation_rate,
        }
    }

    /// Converts a real return to a nominal return using this record's
    /// inflation rate: `(1 + real) * (1 + inflation) - 1`.
    #[must_use]
    pub fn to_nominal(&self, real: Decimal) -> Decimal {
        (Decimal::ONE + real) * (Decimal::ONE + self.inflation_rate) - Decimal::ONE
    }

    /// Looks up one of this record's own fields by selector.
    ///
    /// Only the real-return and inflation selectors apply to an annual
    /// record; merged-series selectors (yields, nominals) return `None`.
    #[must_use]
    pub fn field(&self, field: super::Field) -> Option<Decimal> {
        match field {
            super::Field::StockReturn => Some(self.stock_return),
            super::Field::BondReturn => Some(self.bond_return),
            super::Field::CashReturn => self.cash_return,
            super::Field::InflationRate => Some(self.inflation_rate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nominal_transform() {
        let rec = AnnualRecord::new(1950, dec!(0.05), dec!(0.01), None, dec!(0.02));
        // (1.05)(1.02) - 1 = 0.071
        assert_eq!(rec.to_nominal(dec!(0.05)), dec!(0.0710));
    }

    #[test]
    fn test_cash_return_optional() {
        let rec = AnnualRecord::new(1928, dec!(0.4349), dec!(0.0101), Some(dec!(0.0311)), dec!(-0.0116));
        assert_eq!(rec.cash_return, Some(dec!(0.0311)));
    }
}
