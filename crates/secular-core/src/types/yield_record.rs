//! Annual yield record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// December dividend yield and bond yield for one year.
///
/// Derived from December-only observations of the Shiller price/dividend
/// table: `stock_yield = dividend / price`, `bond_yield = GS10 / 100`.
/// Both are fractions (0.045 = 4.5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldRecord {
    /// Calendar year (unique key within a series).
    pub year: i32,
    /// Dividend yield of the S&P Composite, December value.
    pub stock_yield: Decimal,
    /// 10-year Treasury (GS10) yield, December value.
    pub bond_yield: Decimal,
}

impl YieldRecord {
    /// Creates a new yield record.
    #[must_use]
    pub fn new(year: i32, stock_yield: Decimal, bond_yield: Decimal) -> Self {
        Self {
            year,
            stock_yield,
            bond_yield,
        }
    }
}
