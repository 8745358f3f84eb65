//! Ordering of file summaries.

use tracing::trace;

use crate::data::summary::Summary;

use super::options::Ordering;

/// Sort summaries in place.
///
/// The sort is stable and descending order reverses each comparison rather
/// than the sorted output, so summaries that compare equal keep their input
/// order in both directions.
pub fn sort_summaries(summaries: &mut [Summary], ordering: Ordering) {
    trace!(
        by = %ordering.by,
        direction = %ordering.direction,
        count = summaries.len(),
        "sorting summaries"
    );
    summaries.sort_by(|a, b| ordering.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::accumulator::Accumulator;
    use crate::query::options::{SortDirection, SortKey};
    use crate::source::profile::ProfileBlock;

    /// Build a summary from `(num_stmt, count)` block pairs.
    fn summary(name: &str, blocks: &[(u64, u64)]) -> Summary {
        let mut acc = Accumulator::new(name);
        for &(num_stmt, count) in blocks {
            acc.add(&ProfileBlock::new(num_stmt, count));
        }
        acc.finalize()
    }

    fn sample() -> Vec<Summary> {
        vec![
            // 50% blocks, 40% stmts, 1 missing block, 3 missing stmts
            summary("c.go", &[(2, 1), (3, 0)]),
            // 100%, 100%, 0, 0
            summary("a.go", &[(4, 1)]),
            // 0%, 0%, 2, 2
            summary("b.go", &[(1, 0), (1, 0)]),
        ]
    }

    fn sorted_names(mut summaries: Vec<Summary>, ordering: Ordering) -> Vec<String> {
        sort_summaries(&mut summaries, ordering);
        summaries.into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_sort_by_filename() {
        assert_eq!(
            sorted_names(sample(), Ordering::by_filename()),
            vec!["a.go", "b.go", "c.go"]
        );
        assert_eq!(
            sorted_names(sample(), Ordering::by_filename().descending()),
            vec!["c.go", "b.go", "a.go"]
        );
    }

    #[test]
    fn test_sort_by_block_coverage() {
        assert_eq!(
            sorted_names(sample(), Ordering::by_block_coverage()),
            vec!["b.go", "c.go", "a.go"]
        );
    }

    #[test]
    fn test_sort_by_stmt_coverage() {
        assert_eq!(
            sorted_names(sample(), Ordering::by_stmt_coverage().descending()),
            vec!["a.go", "c.go", "b.go"]
        );
    }

    #[test]
    fn test_sort_by_missing_blocks() {
        assert_eq!(
            sorted_names(sample(), Ordering::by_missing_blocks()),
            vec!["b.go", "c.go", "a.go"]
        );
    }

    #[test]
    fn test_sort_by_missing_stmts() {
        assert_eq!(
            sorted_names(sample(), Ordering::by_missing_stmts()),
            vec!["c.go", "b.go", "a.go"]
        );
        assert_eq!(
            sorted_names(sample(), Ordering::by_missing_stmts().ascending()),
            vec!["a.go", "b.go", "c.go"]
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order_in_both_directions() {
        // Every summary has one missing block; only the input order tells them apart
        let input = vec![
            summary("m.go", &[(1, 0), (2, 1)]),
            summary("z.go", &[(5, 0)]),
            summary("a.go", &[(1, 0), (1, 1), (1, 1)]),
            summary("x.go", &[(3, 0)]),
        ];
        let expected = vec!["m.go", "z.go", "a.go", "x.go"];

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let ordering = Ordering::new(SortKey::MissingBlocks, direction);
            assert_eq!(sorted_names(input.clone(), ordering), expected);
        }
    }

    #[test]
    fn test_ties_stay_in_input_order_among_unequal_keys() {
        let input = vec![
            summary("first.go", &[(1, 0)]),
            summary("big.go", &[(1, 0), (1, 0), (1, 0)]),
            summary("second.go", &[(1, 0)]),
        ];

        let ordering = Ordering::new(SortKey::MissingBlocks, SortDirection::Descending);
        assert_eq!(
            sorted_names(input.clone(), ordering),
            vec!["big.go", "first.go", "second.go"]
        );
        assert_eq!(
            sorted_names(input, ordering.ascending()),
            vec!["first.go", "second.go", "big.go"]
        );
    }

    #[test]
    fn test_zero_statement_files_sort_as_zero_coverage() {
        let input = vec![
            summary("half.go", &[(1, 1), (1, 0)]),
            summary("empty.go", &[]),
        ];
        assert_eq!(
            sorted_names(input, Ordering::by_stmt_coverage()),
            vec!["empty.go", "half.go"]
        );
    }

    #[test]
    fn test_sort_empty_slice() {
        let mut summaries: Vec<Summary> = Vec::new();
        sort_summaries(&mut summaries, Ordering::by_missing_stmts());
        assert!(summaries.is_empty());
    }
}
