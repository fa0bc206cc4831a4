//! Year-window restriction helpers.

use secular_core::types::Dated;

/// Returns the records whose year falls in `start..=end`, preserving
/// input order.
pub fn restrict_years<T: Dated + Copy>(records: &[T], start: i32, end: i32) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.year() >= start && r.year() <= end)
        .copied()
        .collect()
}

/// Returns the trailing `n`-year window of a series.
///
/// The window is defined relative to the latest year present: a trailing
/// 35-year window over a series ending in 2024 keeps years 1990..=2024.
/// Gap years simply stay absent; the window never back-fills.
pub fn trailing<T: Dated + Copy>(records: &[T], n: usize) -> Vec<T> {
    let Some(max_year) = records.iter().map(Dated::year).max() else {
        return Vec::new();
    };
    let cutoff = max_year - (n as i32 - 1);
    records
        .iter()
        .filter(|r| r.year() >= cutoff)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use secular_core::types::YieldRecord;

    fn series(years: impl IntoIterator<Item = i32>) -> Vec<YieldRecord> {
        years
            .into_iter()
            .map(|y| YieldRecord::new(y, dec!(0.04), dec!(0.03)))
            .collect()
    }

    #[test]
    fn test_restrict_years() {
        let records = series(1928..=2024);
        let window = restrict_years(&records, 1950, 1980);
        assert_eq!(window.len(), 31);
        assert_eq!(window[0].year, 1950);
    }

    #[test]
    fn test_trailing_window() {
        let records = series(1928..=2024);
        let window = trailing(&records, 35);
        assert_eq!(window.len(), 35);
        assert_eq!(window[0].year, 1990);
        assert_eq!(window.last().unwrap().year, 2024);
    }

    #[test]
    fn test_trailing_with_gaps_does_not_backfill() {
        let records = series([2000, 2001, 2010, 2024]);
        let window = trailing(&records, 35);
        // Cutoff is 1990; all four survive, nothing is invented.
        assert_eq!(window.len(), 4);
    }

    #[test]
    fn test_trailing_empty() {
        let records: Vec<YieldRecord> = Vec::new();
        assert!(trailing(&records, 35).is_empty());
    }
}
