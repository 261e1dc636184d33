use std::ops::Range;

/// First-column rows that seed independent search branches
///
/// Reflecting a board across its horizontal midline pairs every solution
/// whose first-column queen sits on row `r` with one on row `size - 1 - r`,
/// so only the first half of the rows (rounded up) is ever searched.
pub const fn reduced_start_rows(size: usize) -> Range<usize> {
    0..size.div_ceil(2)
}

/// Middle row of an odd-sized board, the one starting row that mirrors onto itself
pub const fn middle_row(size: usize) -> Option<usize> {
    match size % 2 {
        1 => Some(size / 2),
        _ => None,
    }
}

/// Number of whole-board solutions represented by one branch solution
///
/// A branch seeded on the odd middle row finds each of its solutions once;
/// every other branch also stands for its unsearched mirror image and counts
/// double. Placements are never doubled, only solutions.
pub const fn solution_weight(size: usize, start_row: usize) -> u64 {
    match middle_row(size) {
        Some(middle) if middle == start_row => 1,
        _ => 2,
    }
}
