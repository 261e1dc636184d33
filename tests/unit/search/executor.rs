//! Tests for execution drivers and outcome aggregation

#[cfg(test)]
mod tests {
    use queenscount::search::counter::PlacementCounters;
    use queenscount::search::executor::{ExecutionMode, aggregate, count_solutions};
    use queenscount::search::partition::BranchOutcome;

    // Tests aggregation weighting: solutions double, placements never
    // Verified by doubling the middle branch as well
    #[test]
    fn test_aggregate_weights_mirrored_branches() {
        let outcomes = [
            BranchOutcome {
                start_row: 0,
                counters: PlacementCounters {
                    placements: 5,
                    solutions: 1,
                },
            },
            BranchOutcome {
                start_row: 2,
                counters: PlacementCounters {
                    placements: 3,
                    solutions: 2,
                },
            },
        ];

        let totals = aggregate(5, &outcomes);
        assert_eq!(totals.placements, 8);
        assert_eq!(totals.solutions, 4, "row 0 doubles, the middle row counts once");
    }

    // Tests the one-queen override the doubling arithmetic cannot express
    // Verified by removing the override
    #[test]
    fn test_aggregate_overrides_tiny_boards() {
        let outcome = BranchOutcome {
            start_row: 0,
            counters: PlacementCounters {
                placements: 1,
                solutions: 0,
            },
        };
        assert_eq!(
            aggregate(1, &[outcome]),
            PlacementCounters {
                placements: 1,
                solutions: 1
            }
        );
        assert_eq!(
            aggregate(0, &[]),
            PlacementCounters {
                placements: 0,
                solutions: 1
            }
        );
    }

    // Tests sequential totals against the known counting sequence
    // Verified by skipping the last branch task
    #[test]
    fn test_count_solutions_sequential() {
        assert_eq!(
            count_solutions(4, ExecutionMode::Sequential),
            PlacementCounters {
                placements: 8,
                solutions: 2
            }
        );
        assert_eq!(count_solutions(5, ExecutionMode::Sequential).solutions, 10);
        assert_eq!(count_solutions(6, ExecutionMode::Sequential).solutions, 4);
    }

    // Tests that pool scheduling changes nothing about the totals
    // Verified by folding outcomes with a non-commutative operation
    #[test]
    fn test_parallel_matches_sequential() {
        for size in [0, 1, 2, 5, 7] {
            assert_eq!(
                count_solutions(size, ExecutionMode::Parallel),
                count_solutions(size, ExecutionMode::Sequential),
                "modes disagree at size {size}"
            );
        }
    }
}
