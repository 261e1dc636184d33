use crate::board::attack::AttackState;
use crate::search::counter::PlacementCounters;

/// Depth-first search over one board, counting placements and solutions
///
/// Each level tries the rows of the next column in increasing order. Every
/// unattacked candidate is placed and descended into, then removed again so
/// the board returns to its entry state. The search owns its board and tally
/// outright; [`run`](Self::run) consumes the search and yields the totals.
#[derive(Clone, Debug)]
pub struct BranchSearch {
    state: AttackState,
    counters: PlacementCounters,
}

impl BranchSearch {
    /// Search an empty board exhaustively
    pub fn new(size: usize) -> Self {
        Self {
            state: AttackState::new(size),
            counters: PlacementCounters::new(),
        }
    }

    /// Search a board seeded with one queen on `start_row` of column 0
    ///
    /// The seed is a real placement and counts like any other. A seed row
    /// outside the board leaves the board empty.
    pub fn with_first_queen(size: usize, start_row: usize) -> Self {
        let mut search = Self::new(size);
        if search.state.is_free(start_row) {
            search.place_queen(start_row);
        }
        search
    }

    /// Run the search to completion and return the final tally
    ///
    /// A board already full at entry holds exactly one solution, which makes
    /// the zero-sized board count (0 placements, 1 solution) and lets a
    /// seeded one-board resolve without descending.
    pub fn run(mut self) -> PlacementCounters {
        if self.state.is_full() {
            self.counters.record_solution();
        } else {
            self.descend();
        }
        self.counters
    }

    fn descend(&mut self) {
        for row in 0..self.state.size() {
            if self.state.is_free(row) {
                self.place_queen(row);
                if self.state.is_full() {
                    self.counters.record_solution();
                } else {
                    self.descend();
                }
                self.state.remove(row);
            }
        }
    }

    fn place_queen(&mut self, row: usize) {
        self.state.place(row);
        self.counters.record_placement();
    }
}
