//! Tests for per-branch tallies and weighted merging

#[cfg(test)]
mod tests {
    use queenscount::search::counter::PlacementCounters;

    // Tests that a fresh tally starts at zero
    // Verified by seeding the counters with nonzero values
    #[test]
    fn test_new_tally_is_zero() {
        let counters = PlacementCounters::new();
        assert_eq!(counters.placements, 0);
        assert_eq!(counters.solutions, 0);
        assert_eq!(counters, PlacementCounters::default());
    }

    // Tests independent recording of placements and solutions
    // Verified by incrementing the wrong field
    #[test]
    fn test_recording() {
        let mut counters = PlacementCounters::new();
        counters.record_placement();
        counters.record_placement();
        counters.record_solution();
        assert_eq!(counters.placements, 2);
        assert_eq!(counters.solutions, 1);
    }

    // Tests weighted merging: placements once, solutions times weight
    // Verified by doubling placements along with solutions
    #[test]
    fn test_absorb_weighted() {
        let mut totals = PlacementCounters::new();
        let branch = PlacementCounters {
            placements: 7,
            solutions: 3,
        };

        totals.absorb_weighted(branch, 2);
        assert_eq!(
            totals,
            PlacementCounters {
                placements: 7,
                solutions: 6
            }
        );

        totals.absorb_weighted(branch, 1);
        assert_eq!(
            totals,
            PlacementCounters {
                placements: 14,
                solutions: 9
            }
        );
    }

    // Tests that merge order never changes the combined totals
    // Verified by making the merge subtract instead of add
    #[test]
    fn test_merging_is_commutative() {
        let first = PlacementCounters {
            placements: 4,
            solutions: 1,
        };
        let second = PlacementCounters {
            placements: 9,
            solutions: 2,
        };

        let mut forward = PlacementCounters::new();
        forward.absorb_weighted(first, 2);
        forward.absorb_weighted(second, 1);

        let mut backward = PlacementCounters::new();
        backward.absorb_weighted(second, 1);
        backward.absorb_weighted(first, 2);

        assert_eq!(forward, backward);
    }
}
