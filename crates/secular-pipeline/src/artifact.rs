//! Generated source artifact: writer and reverse reader.
//!
//! The downstream projection tool consumes a TypeScript source file
//! containing a documentation header, a named ordered array literal of
//! record objects, and accessor helpers. The textual shape of the literal
//! is load-bearing: one object per line, fields in declared order,
//! 6-decimal fixed-point for returns and 4-decimal for yields. The
//! templates here reproduce the consumed format byte for byte.
//!
//! The reverse reader re-parses a previously generated artifact back into
//! typed records, keyed by the collection's declared name. It exists for
//! cross-series reconciliation, where both inputs are generated files.

use std::path::Path;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use secular_core::error::{SeriesError, SeriesResult};
use secular_core::types::{AnnualRecord, YieldRecord};

/// Layout of one generated annual-series artifact.
#[derive(Debug, Clone, Copy)]
pub struct AnnualArtifactSpec {
    /// Declared name of the exported collection.
    pub collection_name: &'static str,
    /// Documentation header plus interface declaration, verbatim.
    pub preamble: &'static str,
    /// Accessor helper block appended after the literal, verbatim.
    pub accessors: &'static str,
    /// Whether records carry the cash-return field.
    pub include_cash: bool,
}

/// The Shiller annual-series artifact (no cash series).
pub const SHILLER_ARTIFACT: AnnualArtifactSpec = AnnualArtifactSpec {
    collection_name: "historicalData",
    preamble: r"/**
 * Historical financial market data (1871-present)
 *
 * Real annual returns for stocks and bonds, plus inflation rates.
 * Data source: Ibbotson-Shiller dataset via ie-data.csv
 *
 * Generated automatically - do not edit manually.
 */

export interface HistoricalYearData {
  year: number;
  stockReturn: number;    // Real annual stock return (S&P 500 total return)
  bondReturn: number;     // Real annual bond return
  inflationRate: number;  // Annual inflation rate (CPI-based)
}

export const historicalData: HistoricalYearData[] = [
",
    accessors: r"];

/**
 * Get historical data for a specific year range
 */
export function getHistoricalData(startYear: number, endYear: number): HistoricalYearData[] {
  return historicalData.filter(data => data.year >= startYear && data.year <= endYear);
}

/**
 * Get the full date range of available historical data
 */
export function getDataRange(): { startYear: number; endYear: number } {
  return {
    startYear: historicalData[0]?.year ?? 1871,
    endYear: historicalData[historicalData.length - 1]?.year ?? new Date().getFullYear()
  };
}

/**
 * Calculate statistics for historical returns
 */
export function calculateHistoricalStats(data: HistoricalYearData[]) {
  if (data.length === 0) return null;

  const stockReturns = data.map(d => d.stockReturn);
  const bondReturns = data.map(d => d.bondReturn);
  const inflationRates = data.map(d => d.inflationRate);

  const mean = (arr: number[]) => arr.reduce((a, b) => a + b, 0) / arr.length;
  const variance = (arr: number[]) => {
    const m = mean(arr);
    return arr.reduce((a, b) => a + (b - m) ** 2, 0) / arr.length;
  };
  const stdDev = (arr: number[]) => Math.sqrt(variance(arr));

  return {
    stocks: {
      mean: mean(stockReturns),
      stdDev: stdDev(stockReturns),
      min: Math.min(...stockReturns),
      max: Math.max(...stockReturns)
    },
    bonds: {
      mean: mean(bondReturns),
      stdDev: stdDev(bondReturns),
      min: Math.min(...bondReturns),
      max: Math.max(...bondReturns)
    },
    inflation: {
      mean: mean(inflationRates),
      stdDev: stdDev(inflationRates),
      min: Math.min(...inflationRates),
      max: Math.max(...inflationRates)
    }
  };
}
",
    include_cash: false,
};

/// The NYU Stern annual-series artifact (with cash series).
pub const NYU_ARTIFACT: AnnualArtifactSpec = AnnualArtifactSpec {
    collection_name: "nyuHistoricalData",
    preamble: r"/**
 * NYU Stern historical financial market data (1928-present)
 *
 * Real annual returns for stocks, bonds, cash, plus inflation rates.
 * Data source: NYU Stern School of Business historical dataset
 *
 * Generated automatically - do not edit manually.
 */

export interface NyuHistoricalYearData {
  year: number;
  stockReturn: number;    // Real annual stock return (S&P 500 with dividends)
  bondReturn: number;     // Real annual bond return (10-year T.Bonds)
  cashReturn: number;     // Real annual cash return (3-month T.Bills)
  inflationRate: number;  // Annual inflation rate
}

export const nyuHistoricalData: NyuHistoricalYearData[] = [
",
    accessors: r"];

/**
 * Get NYU historical data for a specific year range
 */
export function getNyuHistoricalData(startYear: number, endYear: number): NyuHistoricalYearData[] {
  return nyuHistoricalData.filter(data => data.year >= startYear && data.year <= endYear);
}

/**
 * Get the full date range of available NYU historical data
 */
export function getNyuDataRange(): { startYear: number; endYear: number } {
  return {
    startYear: nyuHistoricalData[0]?.year ?? 1928,
    endYear: nyuHistoricalData[nyuHistoricalData.length - 1]?.year ?? new Date().getFullYear()
  };
}

/**
 * Calculate statistics for NYU historical returns
 */
export function calculateNyuHistoricalStats(data: NyuHistoricalYearData[]) {
  if (data.length === 0) return null;

  const stockReturns = data.map(d => d.stockReturn);
  const bondReturns = data.map(d => d.bondReturn);
  const cashReturns = data.map(d => d.cashReturn);
  const inflationRates = data.map(d => d.inflationRate);

  const mean = (arr: number[]) => arr.reduce((a, b) => a + b, 0) / arr.length;
  const variance = (arr: number[]) => {
    const m = mean(arr);
    return arr.reduce((a, b) => a + (b - m) ** 2, 0) / arr.length;
  };
  const stdDev = (arr: number[]) => Math.sqrt(variance(arr));

  return {
    stocks: {
      mean: mean(stockReturns),
      stdDev: stdDev(stockReturns),
      min: Math.min(...stockReturns),
      max: Math.max(...stockReturns)
    },
    bonds: {
      mean: mean(bondReturns),
      stdDev: stdDev(bondReturns),
      min: Math.min(...bondReturns),
      max: Math.max(...bondReturns)
    },
    cash: {
      mean: mean(cashReturns),
      stdDev: stdDev(cashReturns),
      min: Math.min(...cashReturns),
      max: Math.max(...cashReturns)
    },
    inflation: {
      mean: mean(inflationRates),
      stdDev: stdDev(inflationRates),
      min: Math.min(...inflationRates),
      max: Math.max(...inflationRates)
    }
  };
}
",
    include_cash: true,
};

/// Declared collection name of the yield artifact.
pub const YIELD_COLLECTION: &str = "shillerHistoricalData";

const YIELD_PREAMBLE: &str = r"/**
 * Historical stock dividend yield and bond yield data (1928-present)
 *
 * Source: Robert Shiller's publicly available dataset
 * (http://www.econ.yale.edu/~shiller/data.htm)
 *
 * - stockYield: Dividend yield of the S&P Composite index,
 *   using December values.
 *
 * - bondYield: Yield of 10-year U.S. Treasury bonds (GS10), taken directly from Shiller.
 *   Values are given as fractions (e.g., 0.045 = 4.5%).
 *
 * Only December observations are included (one value per year).
 *
 * Generated automatically - do not edit manually.
 */

export interface ShillerHistoricalYearData {
  year: number;
  stockYield: number;
  bondYield: number;
}

export const shillerHistoricalData: ShillerHistoricalYearData[] = [
";

/// Renders an annual-series artifact.
///
/// Records are sorted ascending by year; return fields are written with
/// 6-decimal fixed-point formatting.
#[must_use]
pub fn render_annual_artifact(spec: &AnnualArtifactSpec, records: &[AnnualRecord]) -> String {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.year);

    let mut out = String::from(spec.preamble);
    for record in &sorted {
        if spec.include_cash {
            out.push_str(&format!(
                "  {{ year: {}, stockReturn: {:.6}, bondReturn: {:.6}, cashReturn: {:.6}, inflationRate: {:.6} }},\n",
                record.year,
                as_f64(record.stock_return),
                as_f64(record.bond_return),
                as_f64(record.cash_return.unwrap_or_default()),
                as_f64(record.inflation_rate),
            ));
        } else {
            out.push_str(&format!(
                "  {{ year: {}, stockReturn: {:.6}, bondReturn: {:.6}, inflationRate: {:.6} }},\n",
                record.year,
                as_f64(record.stock_return),
                as_f64(record.bond_return),
                as_f64(record.inflation_rate),
            ));
        }
    }
    out.push_str(spec.accessors);
    out
}

/// Renders the yield artifact with 4-decimal fixed-point formatting.
#[must_use]
pub fn render_yield_artifact(records: &[YieldRecord]) -> String {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.year);

    let mut out = String::from(YIELD_PREAMBLE);
    for record in &sorted {
        out.push_str(&format!(
            "  {{ year: {}, stockYield: {:.4}, bondYield: {:.4} }},\n",
            record.year,
            as_f64(record.stock_yield),
            as_f64(record.bond_yield),
        ));
    }
    out.push_str("];\n");
    out
}

/// Extracts the body of a named collection literal from artifact text.
fn collection_body<'a>(text: &'a str, collection_name: &str) -> SeriesResult<&'a str> {
    let pattern = format!(
        r"(?s)export const {}[^=]*=\s*\[(.*?)\];",
        regex::escape(collection_name)
    );
    let finder = Regex::new(&pattern)
        .map_err(|e| SeriesError::artifact_format(format!("bad collection pattern: {e}")))?;
    let captures = finder.captures(text).ok_or_else(|| {
        SeriesError::artifact_format(format!("collection {collection_name:?} not found"))
    })?;
    Ok(captures.get(1).map_or("", |m| m.as_str()))
}

/// Re-parses an annual-series artifact back into typed records.
///
/// The records come back at the artifact's formatting precision
/// (6 decimals for returns), exactly as written.
pub fn read_annual_artifact(text: &str, collection_name: &str) -> SeriesResult<Vec<AnnualRecord>> {
    let body = collection_body(text, collection_name)?;

    let record_pattern = Regex::new(
        r"\{\s*year:\s*(\d+),\s*stockReturn:\s*(-?[\d.]+),\s*bondReturn:\s*(-?[\d.]+),(?:\s*cashReturn:\s*(-?[\d.]+),)?\s*inflationRate:\s*(-?[\d.]+)\s*\}",
    )
    .map_err(|e| SeriesError::artifact_format(format!("bad record pattern: {e}")))?;

    let mut records = Vec::new();
    for captures in record_pattern.captures_iter(body) {
        let year: i32 = parse_capture(&captures[1])?;
        let stock_return = parse_decimal_capture(&captures[2])?;
        let bond_return = parse_decimal_capture(&captures[3])?;
        let cash_return = captures
            .get(4)
            .map(|m| parse_decimal_capture(m.as_str()))
            .transpose()?;
        let inflation_rate = parse_decimal_capture(&captures[5])?;
        records.push(AnnualRecord::new(
            year,
            stock_return,
            bond_return,
            cash_return,
            inflation_rate,
        ));
    }
    Ok(records)
}

/// Re-parses a yield artifact back into typed records.
pub fn read_yield_artifact(text: &str, collection_name: &str) -> SeriesResult<Vec<YieldRecord>> {
    let body = collection_body(text, collection_name)?;

    let record_pattern = Regex::new(
        r"\{\s*year:\s*(\d+),\s*stockYield:\s*(-?[\d.]+),\s*bondYield:\s*(-?[\d.]+)\s*\}",
    )
    .map_err(|e| SeriesError::artifact_format(format!("bad record pattern: {e}")))?;

    let mut records = Vec::new();
    for captures in record_pattern.captures_iter(body) {
        records.push(YieldRecord::new(
            parse_capture(&captures[1])?,
            parse_decimal_capture(&captures[2])?,
            parse_decimal_capture(&captures[3])?,
        ));
    }
    Ok(records)
}

/// Loads and reverse-reads an annual-series artifact from disk.
pub fn load_annual_artifact(path: &Path, collection_name: &str) -> SeriesResult<Vec<AnnualRecord>> {
    read_annual_artifact(&read_artifact_text(path)?, collection_name)
}

/// Loads and reverse-reads a yield artifact from disk.
pub fn load_yield_artifact(path: &Path, collection_name: &str) -> SeriesResult<Vec<YieldRecord>> {
    read_yield_artifact(&read_artifact_text(path)?, collection_name)
}

fn read_artifact_text(path: &Path) -> SeriesResult<String> {
    if !path.exists() {
        return Err(SeriesError::source_not_found(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn parse_capture(text: &str) -> SeriesResult<i32> {
    text.parse()
        .map_err(|_| SeriesError::artifact_format(format!("bad year literal: {text:?}")))
}

fn parse_decimal_capture(text: &str) -> SeriesResult<Decimal> {
    Decimal::from_str(text)
        .map_err(|_| SeriesError::artifact_format(format!("bad numeric literal: {text:?}")))
}

fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
