//! Table-ready data structures for coverage output.
//!
//! This module provides `ReportTable`, a presentation-ready data structure
//! that can be rendered as text or serialized to JSON.
//!
//! The data flow is:
//! 1. Profiles (parsed blocks)
//! 2. Report (aggregated, sorted)
//! 3. ReportTable (formatted strings for display)
//!
//! ReportTable only formats data. All exclusion, accumulation and sorting
//! happens before it is built.

use serde::{Deserialize, Serialize};

use crate::data::report::Report;
use crate::data::summary::Summary;

/// Column headers, in display order.
pub const HEADERS: [&str; 7] = [
    "File",
    "Blocks",
    "Missing",
    "Block Cover",
    "Stmts",
    "Missing",
    "Stmt Cover",
];

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file name or "Total")
    pub label: String,
    /// Values for each numeric column (as strings, ready for display)
    pub values: Vec<String>,
}

impl TableRow {
    fn from_summary(summary: &Summary) -> Self {
        TableRow {
            label: summary.name.clone(),
            values: vec![
                summary.blocks.to_string(),
                summary.missing_blocks.to_string(),
                format_percentage(summary.block_coverage),
                summary.stmts.to_string(),
                summary.missing_stmts.to_string(),
                format_percentage(summary.stmt_coverage),
            ],
        }
    }
}

/// Table-ready coverage data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers: [label_header, Blocks, Missing, Block Cover, Stmts, Missing, Stmt Cover]
    pub headers: Vec<String>,
    /// One row per file, in report order
    pub rows: Vec<TableRow>,
    /// Total row
    pub footer: TableRow,
}

impl ReportTable {
    /// Create a ReportTable from a Report.
    pub fn from_report(report: &Report) -> Self {
        ReportTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: report.files.iter().map(TableRow::from_summary).collect(),
            footer: TableRow::from_summary(&report.total),
        }
    }

    /// Widest label among rows, footer and the label header.
    pub fn label_width(&self) -> usize {
        self.rows
            .iter()
            .chain(std::iter::once(&self.footer))
            .map(|row| row.label.chars().count())
            .chain(self.headers.first().map(|h| h.chars().count()))
            .max()
            .unwrap_or(0)
    }
}

/// Format a percentage with two decimals, e.g. `66.67%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::aggregate;
    use crate::query::options::Ordering;
    use crate::source::paths::PathFilter;
    use crate::source::profile::parse_profiles_str;

    fn sample_report() -> Report {
        let profiles = parse_profiles_str(
            "mode: set
a.go:1.1,3.2 3 1
a.go:4.1,6.2 2 0
cmd/server/main.go:1.1,4.2 5 5
",
        )
        .unwrap();
        aggregate(&profiles, &PathFilter::new()).into_report(Ordering::default())
    }

    #[test]
    fn test_table_from_report() {
        let table = ReportTable::from_report(&sample_report());

        assert_eq!(table.headers.len(), 7);
        assert_eq!(table.headers[0], "File");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].label, "a.go");
        assert_eq!(
            table.rows[0].values,
            vec!["2", "1", "50.00%", "5", "2", "60.00%"]
        );
        assert_eq!(table.rows[1].label, "cmd/server/main.go");
    }

    #[test]
    fn test_footer_is_total() {
        let table = ReportTable::from_report(&sample_report());

        assert_eq!(table.footer.label, "Total");
        assert_eq!(
            table.footer.values,
            vec!["3", "1", "66.67%", "10", "2", "80.00%"]
        );
    }

    #[test]
    fn test_label_width() {
        let table = ReportTable::from_report(&sample_report());
        assert_eq!(table.label_width(), "cmd/server/main.go".len());
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(100.0), "100.00%");
        assert_eq!(format_percentage(200.0 / 3.0), "66.67%");
    }

    #[test]
    fn test_table_serializes() {
        let table = ReportTable::from_report(&sample_report());
        let json = serde_json::to_value(&table).unwrap();

        assert!(json.get("headers").is_some());
        assert!(json.get("rows").is_some());
        assert_eq!(json["footer"]["label"], "Total");
    }
}
