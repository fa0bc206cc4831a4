//! CLI command implementations.

pub mod compare;
pub mod correlate;
pub mod extract;
pub mod stats;

// Re-export argument structs for convenience
pub use compare::CompareArgs;
pub use correlate::CorrelateArgs;
pub use extract::ExtractArgs;
pub use stats::StatsArgs;

use std::path::{Path, PathBuf};

use secular_core::types::Field;

use crate::error::{CliError, CliResult};

/// Resolves a possibly-relative input path against an optional data
/// directory. Absolute paths pass through untouched.
pub fn resolve_path(data_dir: Option<&Path>, path: &Path) -> PathBuf {
    match data_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Parses a field name as it appears in generated artifacts.
pub fn parse_field(name: &str) -> CliResult<Field> {
    match name {
        "stockReturn" => Ok(Field::StockReturn),
        "bondReturn" => Ok(Field::BondReturn),
        "cashReturn" => Ok(Field::CashReturn),
        "inflationRate" => Ok(Field::InflationRate),
        other => Err(CliError::UnknownField(other.to_string())),
    }
}

/// Validates a year range.
pub fn validate_year_range(start: i32, end: i32) -> CliResult<()> {
    if start > end {
        return Err(CliError::InvalidYearRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let dir = Path::new("/data");
        assert_eq!(
            resolve_path(Some(dir), Path::new("ie-data.csv")),
            PathBuf::from("/data/ie-data.csv")
        );
        assert_eq!(
            resolve_path(Some(dir), Path::new("/tmp/x.csv")),
            PathBuf::from("/tmp/x.csv")
        );
        assert_eq!(
            resolve_path(None, Path::new("ie-data.csv")),
            PathBuf::from("ie-data.csv")
        );
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("stockReturn").unwrap(), Field::StockReturn);
        assert!(parse_field("dividendYield").is_err());
    }

    #[test]
    fn test_validate_year_range() {
        assert!(validate_year_range(1950, 1980).is_ok());
        assert!(validate_year_range(1980, 1950).is_err());
    }
}
