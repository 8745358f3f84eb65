//! # covsumlib
//!
//! A library for summarizing Go statement coverage profiles per file and for
//! the whole run.
//!
//! ## Overview
//!
//! `go test -coverprofile` writes one line per basic block with its statement
//! count and how often it ran. This library turns that profile into a report:
//!
//! - **Total**: Block and statement coverage across every reported file
//! - **Files**: One summary per file, sorted by the requested column
//!
//! Each summary carries block and statement totals, how many of each were
//! never executed, and the covered percentage of each.
//!
//! ## Pipeline
//!
//! 1. **source**: Parse the profile and map file names (root stripping, exclusion)
//! 2. **data**: Accumulate blocks into per-file and total summaries
//! 3. **query**: Sort the file summaries
//! 4. **output**: Format the report as a table
//!
//! ## Example
//!
//! ```rust
//! use covsumlib::{aggregate, parse_profiles_str, Ordering, PathFilter};
//!
//! let profiles = parse_profiles_str(
//!     "mode: set\n\
//!      example.com/m/a.go:1.1,3.2 3 1\n\
//!      example.com/m/a.go:4.1,6.2 2 0\n\
//!      example.com/m/b.go:1.1,4.2 5 5\n",
//! )
//! .unwrap();
//!
//! let filter = PathFilter::new().root("example.com/m");
//! let report = aggregate(&profiles, &filter).into_report(Ordering::by_missing_stmts());
//!
//! assert_eq!(report.total.stmts, 10);
//! assert_eq!(report.total.missing_stmts, 2);
//! assert_eq!(report.files[0].name, "a.go");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    aggregate, generate_report, generate_report_with, percentage, Accumulator, Aggregation,
    Report, ReportOptions, Summary, TOTAL_NAME,
};
pub use error::CovsumError;
pub use output::{ReportTable, TableRow};
pub use query::{sort_summaries, Ordering, SortDirection, SortKey};
pub use source::{parse_profiles, parse_profiles_str, Mode, PathFilter, Profile, ProfileBlock};

/// Result type for covsumlib operations
pub type Result<T> = std::result::Result<T, CovsumError>;
