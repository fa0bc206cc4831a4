//! Merged record and field selectors.
//!
//! The merged record is the inner-join product of an annual return series
//! and a yield series for one year. It exists only transiently, as input
//! to the statistics and correlation engines, and therefore lives at the
//! floating-point boundary: decimal precision has done its job by the time
//! two independently sourced series are joined.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One year of the inner join of an annual return series and a yield
/// series, with optional derived nominal returns.
///
/// A year is present only if it exists in every joined input. Nominal
/// fields stay `None` until [`MergedRecord::with_nominal`] is applied;
/// the real-to-nominal transform is an explicit opt-in step, not automatic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// Calendar year (the join key).
    pub year: i32,
    /// Real annual stock return.
    pub stock_return: f64,
    /// Real annual bond return.
    pub bond_return: f64,
    /// Real annual cash return, where the source had one.
    pub cash_return: Option<f64>,
    /// Annual inflation rate.
    pub inflation_rate: f64,
    /// December dividend yield.
    pub stock_yield: f64,
    /// December bond yield.
    pub bond_yield: f64,
    /// Nominal stock return, populated by the nominal transform.
    pub stock_return_nominal: Option<f64>,
    /// Nominal bond return, populated by the nominal transform.
    pub bond_return_nominal: Option<f64>,
    /// Nominal cash return, populated by the nominal transform.
    pub cash_return_nominal: Option<f64>,
}

impl MergedRecord {
    /// Derives nominal returns from the real returns and the inflation
    /// rate: `(1 + real) * (1 + inflation) - 1`.
    #[must_use]
    pub fn with_nominal(mut self) -> Self {
        let nominal = |r: f64| (1.0 + r) * (1.0 + self.inflation_rate) - 1.0;
        self.stock_return_nominal = Some(nominal(self.stock_return));
        self.bond_return_nominal = Some(nominal(self.bond_return));
        self.cash_return_nominal = self.cash_return.map(nominal);
        self
    }
}

/// Name-addressable numeric field of a [`MergedRecord`].
///
/// The statistics and correlation engines select fields through this enum
/// rather than closures, so reports can label their columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Real stock return.
    StockReturn,
    /// Real bond return.
    BondReturn,
    /// Real cash return.
    CashReturn,
    /// Inflation rate.
    InflationRate,
    /// Dividend yield.
    StockYield,
    /// Bond yield.
    BondYield,
    /// Nominal stock return.
    StockReturnNominal,
    /// Nominal bond return.
    BondReturnNominal,
    /// Nominal cash return.
    CashReturnNominal,
}

impl Field {
    /// The field set used for the correlation report, in its fixed order.
    pub const CORRELATION_SET: [Field; 6] = [
        Field::StockReturnNominal,
        Field::BondReturnNominal,
        Field::CashReturnNominal,
        Field::InflationRate,
        Field::BondYield,
        Field::StockYield,
    ];

    /// Extracts this field from a merged record.
    ///
    /// Returns `None` for optional fields the record does not carry
    /// (a missing cash series, or nominal fields before the transform).
    #[must_use]
    pub fn extract(&self, record: &MergedRecord) -> Option<f64> {
        match self {
            Field::StockReturn => Some(record.stock_return),
            Field::BondReturn => Some(record.bond_return),
            Field::CashReturn => record.cash_return,
            Field::InflationRate => Some(record.inflation_rate),
            Field::StockYield => Some(record.stock_yield),
            Field::BondYield => Some(record.bond_yield),
            Field::StockReturnNominal => record.stock_return_nominal,
            Field::BondReturnNominal => record.bond_return_nominal,
            Field::CashReturnNominal => record.cash_return_nominal,
        }
    }

    /// The camel-case label used in generated artifacts and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::StockReturn => "stockReturn",
            Field::BondReturn => "bondReturn",
            Field::CashReturn => "cashReturn",
            Field::InflationRate => "inflationRate",
            Field::StockYield => "stockYield",
            Field::BondYield => "bondYield",
            Field::StockReturnNominal => "stockReturn_nominal",
            Field::BondReturnNominal => "bondReturn_nominal",
            Field::CashReturnNominal => "cashReturn_nominal",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MergedRecord {
        MergedRecord {
            year: 1950,
            stock_return: 0.05,
            bond_return: 0.01,
            cash_return: Some(0.002),
            inflation_rate: 0.02,
            stock_yield: 0.068,
            bond_yield: 0.0232,
            stock_return_nominal: None,
            bond_return_nominal: None,
            cash_return_nominal: None,
        }
    }

    #[test]
    fn test_nominal_transform() {
        let rec = sample().with_nominal();
        let nominal = rec.stock_return_nominal.unwrap();
        // (1.05)(1.02) - 1 = 0.071
        assert!((nominal - 0.071).abs() < 1e-9);
    }

    #[test]
    fn test_nominal_is_opt_in() {
        let rec = sample();
        assert_eq!(Field::StockReturnNominal.extract(&rec), None);
        assert_eq!(Field::StockReturn.extract(&rec), Some(0.05));
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::StockYield.label(), "stockYield");
        assert_eq!(Field::CashReturnNominal.to_string(), "cashReturn_nominal");
    }
}
