//! Monthly observation record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of index levels parsed from a monthly-granularity source.
///
/// Index levels are kept in [`Decimal`] so that the annual aggregation
/// ratio `(december / january) - 1` is computed without binary rounding.
///
/// # Example
///
/// ```rust
/// use secular_core::types::MonthlyRecord;
/// use rust_decimal_macros::dec;
///
/// let jan = MonthlyRecord::new(1930, 1, dec!(21.71), dec!(100.0), dec!(17.1));
/// assert_eq!(jan.month, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar year of the observation.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Stock total-return index level (S&P Composite).
    pub stock_index: Decimal,
    /// Bond total-return index level.
    pub bond_index: Decimal,
    /// Consumer price index level.
    pub cpi: Decimal,
}

impl MonthlyRecord {
    /// Creates a new monthly record.
    #[must_use]
    pub fn new(year: i32, month: u32, stock_index: Decimal, bond_index: Decimal, cpi: Decimal) -> Self {
        Self {
            year,
            month,
            stock_index,
            bond_index,
            cpi,
        }
    }
}
