//! Immutable coverage summaries.

use serde::{Deserialize, Serialize};

/// Name of the summary covering every retained file.
pub const TOTAL_NAME: &str = "Total";

/// Coverage summary for a file or for the whole run.
///
/// Built once from a finished [`Accumulator`](super::Accumulator) and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Display name of the file, or [`TOTAL_NAME`]
    pub name: String,
    /// Number of blocks
    pub blocks: u64,
    /// Number of statements
    pub stmts: u64,
    /// Blocks that never ran
    pub missing_blocks: u64,
    /// Statements in blocks that never ran
    pub missing_stmts: u64,
    /// Covered blocks as a percentage of all blocks
    pub block_coverage: f64,
    /// Covered statements as a percentage of all statements
    pub stmt_coverage: f64,
}

impl Summary {
    /// Blocks that ran at least once.
    pub fn covered_blocks(&self) -> u64 {
        self.blocks - self.missing_blocks
    }

    /// Statements in blocks that ran at least once.
    pub fn covered_stmts(&self) -> u64 {
        self.stmts - self.missing_stmts
    }

    /// True for the run-wide summary.
    pub fn is_total(&self) -> bool {
        self.name == TOTAL_NAME
    }
}

/// `covered / total * 100`, or `0.0` when `total` is zero.
pub fn percentage(covered: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    covered as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 2), 50.0);
        assert_eq!(percentage(8, 10), 80.0);
        assert_eq!(percentage(3, 3), 100.0);
        assert!((percentage(2, 3) - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_percentage_of_nothing_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert!(!percentage(0, 0).is_nan());
    }

    #[test]
    fn test_covered_counts() {
        let summary = Summary {
            name: "a.go".to_string(),
            blocks: 4,
            stmts: 10,
            missing_blocks: 1,
            missing_stmts: 3,
            block_coverage: 75.0,
            stmt_coverage: 70.0,
        };

        assert_eq!(summary.covered_blocks(), 3);
        assert_eq!(summary.covered_stmts(), 7);
        assert!(!summary.is_total());
    }
}
