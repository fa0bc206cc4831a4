//! Record types for the Secular pipeline.
//!
//! This module provides the typed representations that flow between
//! pipeline stages:
//!
//! - [`MonthlyRecord`]: one month of index levels from a monthly source
//! - [`AnnualRecord`]: one year of annual returns (parsed or aggregated)
//! - [`YieldRecord`]: December stock dividend yield and bond yield
//! - [`MergedRecord`]: the transient inner-join product used for statistics
//! - [`ComparisonRecord`]: per-year reconciliation of two annual series
//! - [`Field`]: name-addressable numeric field selector

mod annual;
mod comparison;
mod merged;
mod monthly;
mod yield_record;

pub use annual::AnnualRecord;
pub use comparison::ComparisonRecord;
pub use merged::{Field, MergedRecord};
pub use monthly::MonthlyRecord;
pub use yield_record::YieldRecord;

/// A record keyed by calendar year.
///
/// The seam the windowing helpers in `secular-stats` operate through:
/// year-range restriction and trailing windows apply uniformly to every
/// record kind.
pub trait Dated {
    /// The record's calendar year.
    fn year(&self) -> i32;
}

impl Dated for MonthlyRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Dated for AnnualRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Dated for YieldRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Dated for MergedRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Dated for ComparisonRecord {
    fn year(&self) -> i32 {
        self.year
    }
}
