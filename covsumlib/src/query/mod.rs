//! Query processing: order file summaries.
//!
//! This module handles the third stage of the pipeline - putting the
//! aggregated file summaries in the order the caller asked for. It provides:
//!
//! - **Options**: Sort column and direction (`SortKey`, `SortDirection`, `Ordering`)
//! - **Sorter**: Stable in-place ordering of summaries
//!
//! ## Example
//!
//! ```rust,ignore
//! use covsumlib::query::{sort_summaries, Ordering};
//!
//! let ordering = Ordering::parse("missing-stmts", "desc")?;
//! sort_summaries(&mut summaries, ordering);
//! ```

pub mod options;
pub mod sorter;

pub use options::{Ordering, SortDirection, SortKey};
pub use sorter::sort_summaries;
