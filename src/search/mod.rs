/// Per-branch placement and solution tallies
pub mod counter;
/// Recursive backtracking over a single board
pub mod engine;
/// Sequential and parallel drivers with result aggregation
pub mod executor;
/// Independent per-starting-row units of work
pub mod partition;
