//! Running block and statement counters.

use crate::source::profile::ProfileBlock;

use super::summary::{percentage, Summary};

/// Accumulates the coverage of one file (or of the whole run) block by block.
///
/// Consumed by [`Accumulator::finalize`], so a summary can only be read once
/// every block has been added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    name: String,
    blocks: u64,
    stmts: u64,
    covered_blocks: u64,
    covered_stmts: u64,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Count one block. Counters saturate at `u64::MAX`.
    pub fn add(&mut self, block: &ProfileBlock) {
        self.blocks = self.blocks.saturating_add(1);
        self.stmts = self.stmts.saturating_add(block.num_stmt);
        if block.is_covered() {
            self.covered_blocks = self.covered_blocks.saturating_add(1);
            self.covered_stmts = self.covered_stmts.saturating_add(block.num_stmt);
        }
    }

    /// Fold another accumulator's counters into this one, keeping this name.
    ///
    /// Commutative and associative, so partial accumulators built over
    /// disjoint block sets can be combined in any order.
    pub fn merge(&mut self, other: &Accumulator) {
        self.blocks = self.blocks.saturating_add(other.blocks);
        self.stmts = self.stmts.saturating_add(other.stmts);
        self.covered_blocks = self.covered_blocks.saturating_add(other.covered_blocks);
        self.covered_stmts = self.covered_stmts.saturating_add(other.covered_stmts);
    }

    /// Produce the immutable summary.
    pub fn finalize(self) -> Summary {
        Summary {
            block_coverage: percentage(self.covered_blocks, self.blocks),
            stmt_coverage: percentage(self.covered_stmts, self.stmts),
            missing_blocks: self.blocks - self.covered_blocks,
            missing_stmts: self.stmts - self.covered_stmts,
            blocks: self.blocks,
            stmts: self.stmts,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_covered_and_missing() {
        let mut acc = Accumulator::new("a.go");
        acc.add(&ProfileBlock::new(3, 1));
        acc.add(&ProfileBlock::new(2, 0));

        let summary = acc.finalize();
        assert_eq!(summary.name, "a.go");
        assert_eq!(summary.blocks, 2);
        assert_eq!(summary.stmts, 5);
        assert_eq!(summary.missing_blocks, 1);
        assert_eq!(summary.missing_stmts, 2);
        assert_eq!(summary.block_coverage, 50.0);
        assert_eq!(summary.stmt_coverage, 60.0);
    }

    #[test]
    fn test_large_statement_counts_saturate() {
        let block = ProfileBlock::new(i64::MAX as u64, 1);
        let mut acc = Accumulator::new("big.go");
        acc.add(&block);
        acc.add(&block);
        acc.add(&block);

        let mut total = Accumulator::new("Total");
        total.merge(&acc);
        total.merge(&acc);

        let summary = total.finalize();
        assert_eq!(summary.blocks, 6);
        assert_eq!(summary.stmts, u64::MAX);
        assert_eq!(summary.missing_stmts, 0);
    }

    #[test]
    fn test_execution_count_above_one_counts_once() {
        let mut acc = Accumulator::new("hot.go");
        acc.add(&ProfileBlock::new(4, 1000));

        let summary = acc.finalize();
        assert_eq!(summary.blocks, 1);
        assert_eq!(summary.stmts, 4);
        assert_eq!(summary.missing_stmts, 0);
        assert_eq!(summary.stmt_coverage, 100.0);
    }

    #[test]
    fn test_empty_accumulator_has_zero_coverage() {
        let summary = Accumulator::new("empty.go").finalize();

        assert_eq!(summary.blocks, 0);
        assert_eq!(summary.stmts, 0);
        assert_eq!(summary.block_coverage, 0.0);
        assert_eq!(summary.stmt_coverage, 0.0);
    }

    #[test]
    fn test_zero_statement_blocks() {
        let mut acc = Accumulator::new("decl.go");
        acc.add(&ProfileBlock::new(0, 1));
        acc.add(&ProfileBlock::new(0, 0));

        let summary = acc.finalize();
        assert_eq!(summary.blocks, 2);
        assert_eq!(summary.block_coverage, 50.0);
        // No statements at all: defined as zero rather than NaN
        assert_eq!(summary.stmt_coverage, 0.0);
    }

    #[test]
    fn test_merge_matches_sequential_add() {
        let blocks = [
            ProfileBlock::new(3, 1),
            ProfileBlock::new(2, 0),
            ProfileBlock::new(5, 7),
            ProfileBlock::new(1, 0),
        ];

        let mut sequential = Accumulator::new("Total");
        for block in &blocks {
            sequential.add(block);
        }

        let mut left = Accumulator::new("left");
        let mut right = Accumulator::new("right");
        for block in &blocks[..2] {
            left.add(block);
        }
        for block in &blocks[2..] {
            right.add(block);
        }

        let mut forward = Accumulator::new("Total");
        forward.merge(&left);
        forward.merge(&right);
        let mut backward = Accumulator::new("Total");
        backward.merge(&right);
        backward.merge(&left);

        assert_eq!(forward, sequential);
        assert_eq!(backward, sequential);
    }
}
