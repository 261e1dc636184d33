use crate::board::symmetry::solution_weight;
use crate::search::counter::PlacementCounters;
use crate::search::partition::{BranchOutcome, BranchTask, branch_tasks};
use rayon::prelude::*;

/// How branch tasks are scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Run every branch on the calling thread, in starting-row order
    Sequential,
    /// Spread branches across the worker pool
    Parallel,
}

/// Count all solutions and attempted placements for a board size
///
/// Runs one search branch per reduced starting row, then combines the
/// tallies: placements sum directly, while branch solutions are doubled
/// unless the branch is its own mirror image. Both modes produce identical
/// totals for every size; the parallel mode only changes which thread runs
/// which branch. A branch that panics propagates out of the pool and aborts
/// the whole count rather than returning an undercounted total.
///
/// No upper size cap is imposed. Running time grows super-exponentially, so
/// sizes much past twenty stop being practical long before the counters
/// overflow.
pub fn count_solutions(size: usize, mode: ExecutionMode) -> PlacementCounters {
    let tasks = branch_tasks(size);
    let outcomes: Vec<BranchOutcome> = match mode {
        ExecutionMode::Sequential => tasks.into_iter().map(BranchTask::run).collect(),
        ExecutionMode::Parallel => tasks.into_par_iter().map(BranchTask::run).collect(),
    };
    aggregate(size, &outcomes)
}

/// Merge branch outcomes into whole-board totals
///
/// Placements merge once per branch. Solutions are weighted by each branch's
/// mirror multiplicity, after which boards with at most one queen are
/// overridden to their single known solution, the one case the doubling
/// arithmetic cannot express.
pub fn aggregate(size: usize, outcomes: &[BranchOutcome]) -> PlacementCounters {
    let mut totals = PlacementCounters::new();
    for outcome in outcomes {
        totals.absorb_weighted(outcome.counters, solution_weight(size, outcome.start_row));
    }
    if size <= 1 {
        totals.solutions = 1;
    }
    totals
}
