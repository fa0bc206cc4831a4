//! Record parser for raw delimited tables.
//!
//! Columns are addressed positionally after the header row, through small
//! layout structs with defaults matching the known source files. The
//! dividend table is the one exception: its layout is resolved from header
//! labels, since that file interleaves many columns between the ones we
//! need.
//!
//! Parsing is best-effort and partial-failure-tolerant: a short row, an
//! empty first column, or an unconvertible field skips that row with a
//! diagnostic and the pass continues.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use secular_core::error::{SeriesError, SeriesResult};
use secular_core::types::{AnnualRecord, MonthlyRecord, YieldRecord};

use crate::convert::{parse_decimal, parse_percent, parse_period, parse_price, parse_year};
use crate::report::ParseReport;

/// Records produced by one parse pass, with its diagnostics.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    /// Successfully converted records, in source row order.
    pub records: Vec<T>,
    /// Rows read and rows skipped.
    pub report: ParseReport,
}

/// Positional layout of a monthly index-level table (Shiller `ie-data`).
#[derive(Debug, Clone, Copy)]
pub struct MonthlyColumns {
    /// `YYYY.MM` period column.
    pub period: usize,
    /// Stock index level column (may carry quoting and thousands separators).
    pub stock_index: usize,
    /// Bond index level column.
    pub bond_index: usize,
    /// CPI column.
    pub cpi: usize,
    /// Minimum number of columns a row must have.
    pub min_columns: usize,
}

impl Default for MonthlyColumns {
    fn default() -> Self {
        Self {
            period: 0,
            stock_index: 1,
            bond_index: 2,
            cpi: 3,
            min_columns: 4,
        }
    }
}

impl MonthlyColumns {
    /// Width a row must have for every mapped index to be in bounds.
    fn required_width(&self) -> usize {
        let max_index = self.period.max(self.stock_index).max(self.bond_index).max(self.cpi);
        self.min_columns.max(max_index + 1)
    }
}

/// Positional layout of an annual percentage table (NYU Stern).
#[derive(Debug, Clone, Copy)]
pub struct AnnualColumns {
    /// Year column.
    pub year: usize,
    /// Inflation rate column (percentage strings).
    pub inflation: usize,
    /// Real stock return column.
    pub stock: usize,
    /// Real cash (3-month T.Bill) return column.
    pub cash: usize,
    /// Real bond (10-year T.Bond) return column.
    pub bond: usize,
    /// Minimum number of columns a row must have.
    pub min_columns: usize,
}

impl Default for AnnualColumns {
    fn default() -> Self {
        Self {
            year: 0,
            inflation: 1,
            stock: 2,
            cash: 4,
            bond: 5,
            min_columns: 6,
        }
    }
}

impl AnnualColumns {
    /// Width a row must have for every mapped index to be in bounds.
    fn required_width(&self) -> usize {
        let max_index = self
            .year
            .max(self.inflation)
            .max(self.stock)
            .max(self.cash)
            .max(self.bond);
        self.min_columns.max(max_index + 1)
    }
}

/// Header-labelled layout of the Shiller price/dividend table.
#[derive(Debug, Clone)]
pub struct YieldColumns {
    /// `YYYY.MM` period column index.
    pub period: usize,
    /// Header label of the price column.
    pub price_label: String,
    /// Header label of the dividend column.
    pub dividend_label: String,
    /// Header label of the 10-year Treasury yield column.
    pub gs10_label: String,
    /// Earliest year to keep.
    pub min_year: i32,
}

impl Default for YieldColumns {
    fn default() -> Self {
        Self {
            period: 0,
            price_label: "S&P Comp. P".into(),
            dividend_label: "Dividend D".into(),
            gs10_label: "Long Interest Rate GS10".into(),
            min_year: 1928,
        }
    }
}

impl YieldColumns {
    /// Resolves the labelled columns against a header row.
    fn resolve(&self, header: &StringRecord) -> SeriesResult<(usize, usize, usize)> {
        let find = |label: &str| {
            header
                .iter()
                .position(|cell| cell.trim() == label)
                .ok_or_else(|| SeriesError::missing_column(label))
        };
        Ok((
            find(&self.price_label)?,
            find(&self.dividend_label)?,
            find(&self.gs10_label)?,
        ))
    }
}

/// Parses a monthly index-level table into [`MonthlyRecord`]s.
///
/// # Errors
///
/// Returns [`SeriesError::SourceNotFound`] if `path` does not exist, or a
/// CSV-level error if the file cannot be read at all. Row-level failures
/// are absorbed into the [`ParseReport`].
pub fn parse_monthly_table(
    path: &Path,
    columns: &MonthlyColumns,
) -> SeriesResult<Parsed<MonthlyRecord>> {
    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for_each_data_row(path, &mut report, |line, row, report| {
        if let Err(reason) = check_shape(row, columns.required_width()) {
            report.skip(line, row_content(row), reason);
            return;
        }
        let converted = (|| -> Result<MonthlyRecord, String> {
            let (year, month) = parse_period(&row[columns.period])?;
            let stock_index = parse_price(&row[columns.stock_index])?;
            let bond_index = parse_decimal(&row[columns.bond_index])?;
            let cpi = parse_decimal(&row[columns.cpi])?;
            Ok(MonthlyRecord::new(year, month, stock_index, bond_index, cpi))
        })();
        match converted {
            Ok(record) => records.push(record),
            Err(reason) => report.skip(line, row_content(row), reason),
        }
    })?;

    Ok(Parsed { records, report })
}

/// Parses an annual percentage table into [`AnnualRecord`]s.
///
/// Percentage cells (`"45.49%"`) become exact decimal fractions
/// (`0.4549`). The cash column is parsed as `Some(...)` for every row;
/// this source always carries one.
pub fn parse_annual_table(
    path: &Path,
    columns: &AnnualColumns,
) -> SeriesResult<Parsed<AnnualRecord>> {
    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for_each_data_row(path, &mut report, |line, row, report| {
        if let Err(reason) = check_shape(row, columns.required_width()) {
            report.skip(line, row_content(row), reason);
            return;
        }
        let converted = (|| -> Result<AnnualRecord, String> {
            let year = parse_year(&row[columns.year])?;
            let inflation_rate = parse_percent(&row[columns.inflation])?;
            let stock_return = parse_percent(&row[columns.stock])?;
            let cash_return = parse_percent(&row[columns.cash])?;
            let bond_return = parse_percent(&row[columns.bond])?;
            Ok(AnnualRecord::new(
                year,
                stock_return,
                bond_return,
                Some(cash_return),
                inflation_rate,
            ))
        })();
        match converted {
            Ok(record) => records.push(record),
            Err(reason) => report.skip(line, row_content(row), reason),
        }
    })?;

    Ok(Parsed { records, report })
}

/// Parses the price/dividend table into December-only [`YieldRecord`]s.
///
/// Non-December rows and years before `min_year` are filtered, not
/// skipped: they carry no diagnostic. `stock_yield = dividend / price`,
/// `bond_yield = gs10 / 100`.
pub fn parse_yield_table(path: &Path, columns: &YieldColumns) -> SeriesResult<Parsed<YieldRecord>> {
    require_source(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = reader.records();
    let header = match rows.next() {
        Some(header) => header?,
        None => return Err(SeriesError::artifact_format("empty yield table")),
    };
    let (price_col, dividend_col, gs10_col) = columns.resolve(&header)?;

    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for (index, row) in rows.enumerate() {
        let row = row?;
        let line = index as u64 + 2; // 1-based, after the header
        report.rows_read += 1;

        let needed = price_col.max(dividend_col).max(gs10_col).max(columns.period) + 1;
        if let Err(reason) = check_shape(&row, needed) {
            report.skip(line, row_content(&row), reason);
            continue;
        }

        let converted = (|| -> Result<Option<YieldRecord>, String> {
            let (year, month) = parse_period(&row[columns.period])?;
            if month != 12 || year < columns.min_year {
                return Ok(None);
            }
            let price = parse_price(&row[price_col])?;
            let dividend = parse_decimal(&row[dividend_col])?;
            let gs10 = parse_decimal(&row[gs10_col])?;
            if price.is_zero() {
                return Err("zero price, dividend yield undefined".into());
            }
            let stock_yield = dividend / price;
            let bond_yield = gs10 / Decimal::ONE_HUNDRED;
            Ok(Some(YieldRecord::new(year, stock_yield, bond_yield)))
        })();
        match converted {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(reason) => report.skip(line, row_content(&row), reason),
        }
    }

    Ok(Parsed { records, report })
}

/// Verifies the source exists before opening it.
fn require_source(path: &Path) -> SeriesResult<()> {
    if !path.exists() {
        return Err(SeriesError::source_not_found(path.display().to_string()));
    }
    Ok(())
}

/// Row-shape gate: column count and a non-empty first column.
fn check_shape(row: &StringRecord, min_columns: usize) -> Result<(), String> {
    if row.len() < min_columns {
        return Err(format!(
            "short row: {} columns, expected at least {min_columns}",
            row.len()
        ));
    }
    if row[0].trim().is_empty() {
        return Err("empty first column".into());
    }
    Ok(())
}

fn row_content(row: &StringRecord) -> String {
    row.iter().collect::<Vec<_>>().join(",")
}

/// Iterates the data rows of a headered table, tracking line numbers.
fn for_each_data_row<F>(path: &Path, report: &mut ParseReport, mut visit: F) -> SeriesResult<()>
where
    F: FnMut(u64, &StringRecord, &mut ParseReport),
{
    require_source(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if index == 0 {
            continue; // header
        }
        report.rows_read += 1;
        visit(index as u64 + 1, &row, report);
    }
    Ok(())
}
