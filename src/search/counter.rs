/// Running totals for one search branch
///
/// `placements` counts every queen set on the board, the branch seed
/// included, whether or not it later backtracks; `solutions` counts boards
/// that reached a queen in every column. Each branch owns its tally outright
/// and the totals only meet during aggregation, so no counter is ever shared
/// between branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementCounters {
    /// Queens placed, successful or later backtracked
    pub placements: u64,
    /// Fully occupied boards reached
    pub solutions: u64,
}

impl PlacementCounters {
    /// Start a fresh tally
    pub const fn new() -> Self {
        Self {
            placements: 0,
            solutions: 0,
        }
    }

    /// Count one queen placement
    pub const fn record_placement(&mut self) {
        self.placements += 1;
    }

    /// Count one completed board
    pub const fn record_solution(&mut self) {
        self.solutions += 1;
    }

    /// Fold another tally into this one, weighting its solutions
    ///
    /// Placements merge as they are; each of the other tally's solutions is
    /// counted `weight` times. The arithmetic is commutative, so the order
    /// branches arrive in never affects the combined totals.
    pub const fn absorb_weighted(&mut self, other: Self, weight: u64) {
        self.placements += other.placements;
        self.solutions += other.solutions * weight;
    }
}
