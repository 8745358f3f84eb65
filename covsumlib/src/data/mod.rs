//! Data collection: accumulate blocks into coverage summaries.
//!
//! This module handles the second stage of the pipeline - turning parsed
//! profiles into per-file and total coverage numbers. It provides:
//!
//! - **Accumulator**: Running block/statement counters for one name
//! - **Summary**: The immutable result for a file or the whole run
//! - **Aggregation**: Exclusion plus accumulation over every profile
//! - **Report**: Entry points that parse, aggregate and sort in one call
//!
//! ## Example
//!
//! ```rust,ignore
//! use covsumlib::data::{generate_report, ReportOptions};
//!
//! let report = generate_report("coverage.out", &ReportOptions::new())?;
//! println!("Statement coverage: {:.2}%", report.total.stmt_coverage);
//! ```

pub mod accumulator;
pub mod report;
pub mod summary;

pub use accumulator::Accumulator;
pub use report::{
    aggregate, generate_report, generate_report_with, Aggregation, Report, ReportOptions,
};
pub use summary::{percentage, Summary, TOTAL_NAME};
