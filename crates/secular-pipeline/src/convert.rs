//! Field converters for raw table cells.
//!
//! Each converter returns the skip reason as the error value; the parser
//! attaches the row context. All conversions target
//! [`Decimal`](rust_decimal::Decimal) so no binary rounding enters the
//! pipeline before the statistics boundary.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a plain decimal cell, e.g. `"13.66"`.
pub fn parse_decimal(cell: &str) -> Result<Decimal, String> {
    let trimmed = cell.trim();
    Decimal::from_str(trimmed).map_err(|_| format!("not a number: {trimmed:?}"))
}

/// Parses a percentage cell into a fraction, e.g. `"45.49%"` to `0.4549`.
///
/// The trailing `%` is optional; the value is always divided by 100.
pub fn parse_percent(cell: &str) -> Result<Decimal, String> {
    let trimmed = cell.trim().trim_end_matches('%');
    let value =
        Decimal::from_str(trimmed).map_err(|_| format!("not a percentage: {:?}", cell.trim()))?;
    Ok(value / Decimal::ONE_HUNDRED)
}

/// Parses a price cell, stripping quoting and thousands separators,
/// e.g. `"\"1,234.56\""` to `1234.56`.
pub fn parse_price(cell: &str) -> Result<Decimal, String> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != '"' && *c != ',')
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| format!("not a price: {:?}", cell.trim()))
}

/// Parses a `YYYY.MM` period cell into `(year, month)`, e.g. `"1928.01"`
/// to `(1928, 1)`. December appears as `YYYY.12`.
pub fn parse_period(cell: &str) -> Result<(i32, u32), String> {
    let trimmed = cell.trim();
    let (year_str, month_str) = trimmed
        .split_once('.')
        .ok_or_else(|| format!("not a YYYY.MM period: {trimmed:?}"))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| format!("bad year in period: {trimmed:?}"))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| format!("bad month in period: {trimmed:?}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month out of range in period: {trimmed:?}"));
    }
    Ok((year, month))
}

/// Parses a year cell, e.g. `"1928"`.
pub fn parse_year(cell: &str) -> Result<i32, String> {
    let trimmed = cell.trim();
    trimmed
        .parse()
        .map_err(|_| format!("not a year: {trimmed:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_percent_exact() {
        // Exact decimal result, no floating rounding.
        assert_eq!(parse_percent("45.49%").unwrap(), dec!(0.4549));
        assert_eq!(parse_percent("-1.16%").unwrap(), dec!(-0.0116));
        assert_eq!(parse_percent(" 3.00% ").unwrap(), dec!(0.03));
    }

    #[test]
    fn test_parse_percent_without_sign() {
        assert_eq!(parse_percent("12.5").unwrap(), dec!(0.125));
    }

    #[test]
    fn test_parse_price_strips_separators() {
        assert_eq!(parse_price("\"1,234.56\"").unwrap(), dec!(1234.56));
        assert_eq!(parse_price("21.71").unwrap(), dec!(21.71));
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("1928.01").unwrap(), (1928, 1));
        assert_eq!(parse_period("1871.12").unwrap(), (1871, 12));
        assert!(parse_period("1928.13").is_err());
        assert!(parse_period("1928").is_err());
    }

    #[test]
    fn test_malformed_tokens_are_reasons() {
        let reason = parse_decimal("n/a").unwrap_err();
        assert!(reason.contains("n/a"));
        assert!(parse_percent("abc%").is_err());
    }

    proptest::proptest! {
        /// Any rendered percentage parses back to exactly value / 100.
        #[test]
        fn percent_parse_is_exact(mantissa in -1_000_000i64..1_000_000, scale in 0u32..4) {
            let value = Decimal::new(mantissa, scale);
            let parsed = parse_percent(&format!("{value}%")).unwrap();
            proptest::prop_assert_eq!(parsed, value / Decimal::ONE_HUNDRED);
        }
    }
}
