use crate::board::symmetry::reduced_start_rows;
use crate::search::counter::PlacementCounters;
use crate::search::engine::BranchSearch;

/// One independent unit of search work, seeded on a single starting row
///
/// Tasks share nothing: each owns its board and tally, so any number of them
/// can run in any order, or concurrently, without coordination.
#[derive(Clone, Debug)]
pub struct BranchTask {
    start_row: usize,
    search: BranchSearch,
}

/// Finished tally of one branch, tagged with the row that seeded it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchOutcome {
    /// First-column row the branch was seeded on
    pub start_row: usize,
    /// Totals the branch accumulated
    pub counters: PlacementCounters,
}

impl BranchTask {
    /// Seed a task for one starting row
    pub fn new(size: usize, start_row: usize) -> Self {
        Self {
            start_row,
            search: BranchSearch::with_first_queen(size, start_row),
        }
    }

    /// Row this task's seed queen occupies
    pub const fn start_row(&self) -> usize {
        self.start_row
    }

    /// Run the branch to completion
    pub fn run(self) -> BranchOutcome {
        BranchOutcome {
            start_row: self.start_row,
            counters: self.search.run(),
        }
    }
}

/// Build one task per reduced starting row, in row order
///
/// The first half of the first-column rows (rounded up) covers the whole
/// board through mirror symmetry; the remaining rows are never searched.
/// A zero-sized board yields no tasks at all.
pub fn branch_tasks(size: usize) -> Vec<BranchTask> {
    reduced_start_rows(size)
        .map(|start_row| BranchTask::new(size, start_row))
        .collect()
}
