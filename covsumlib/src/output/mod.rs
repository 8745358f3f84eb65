//! Output formatting: present reports as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting a report for display. It provides:
//!
//! - **ReportTable**: Table-ready data with headers, rows, and footer
//! - **TableRow**: Individual row with label and formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use covsumlib::output::ReportTable;
//!
//! let table = ReportTable::from_report(&report);
//! // table.headers: ["File", "Blocks", "Missing", "Block Cover", ...]
//! // table.footer: TableRow { label: "Total", ... }
//! ```

pub mod table;

pub use table::{format_percentage, ReportTable, TableRow, HEADERS};
