//! Result formatting for completed counts

use crate::search::counter::PlacementCounters;

/// Render the canonical result line for a completed count
pub fn format_summary(size: usize, totals: PlacementCounters) -> String {
    let PlacementCounters {
        placements,
        solutions,
    } = totals;
    format!(
        "The {size}-Queens problem required {placements} queen placements to find all {solutions} solutions"
    )
}

/// Print the result line to stdout
// The result line is the program's output, not incidental logging
#[allow(clippy::print_stdout)]
pub fn print_summary(size: usize, totals: PlacementCounters) {
    println!("{}", format_summary(size, totals));
}
