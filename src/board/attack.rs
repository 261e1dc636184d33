use bitvec::prelude::*;
use std::fmt;

/// Incremental occupancy state for queens placed column by column
///
/// Three bit vectors record which rows and diagonals remain unattacked, so a
/// candidate square is tested in O(1) without scanning earlier columns. The
/// "/" diagonals are indexed by `size - 1 + column - row` and the "\"
/// diagonals by `column + row`, each family holding `2 * size - 1` lines.
/// `place` and `remove` are exact inverses; a full place/descend/remove cycle
/// leaves the state bit-for-bit as it found it.
#[derive(Clone, Debug)]
pub struct AttackState {
    size: usize,
    row_free: BitVec,
    diag_up_free: BitVec,
    diag_down_free: BitVec,
    positions: Vec<usize>,
    column: usize,
}

impl AttackState {
    /// Create an empty board of the given size with every line unattacked
    pub fn new(size: usize) -> Self {
        let diagonal_count = (2 * size).saturating_sub(1);
        Self {
            size,
            row_free: bitvec![1; size],
            diag_up_free: bitvec![1; diagonal_count],
            diag_down_free: bitvec![1; diagonal_count],
            positions: vec![0; size],
            column: 0,
        }
    }

    /// Test whether a queen in the next column may occupy `row`
    ///
    /// True iff the row and both diagonals through the candidate square are
    /// unattacked. Rows outside the board are never free.
    pub fn is_free(&self, row: usize) -> bool {
        row < self.size
            && Self::line_free(&self.row_free, row)
            && Self::line_free(&self.diag_up_free, self.diag_up_index(row))
            && Self::line_free(&self.diag_down_free, self.diag_down_index(row))
    }

    /// Place a queen at (`row`, current column), marking its attack lines
    ///
    /// Callers check [`is_free`](Self::is_free) first; requests outside the
    /// board or beyond the last column leave the state untouched.
    pub fn place(&mut self, row: usize) {
        if row >= self.size || self.column >= self.size {
            return;
        }
        let up = self.diag_up_index(row);
        let down = self.diag_down_index(row);
        self.row_free.set(row, false);
        self.diag_up_free.set(up, false);
        self.diag_down_free.set(down, false);
        if let Some(slot) = self.positions.get_mut(self.column) {
            *slot = row;
        }
        self.column += 1;
    }

    /// Remove the most recently placed queen, restoring its attack lines
    ///
    /// Exact inverse of [`place`](Self::place). The column steps back before
    /// the diagonal indices are recomputed, so the same three lines marked by
    /// the matching `place` are the ones released.
    pub fn remove(&mut self, row: usize) {
        if self.column == 0 || row >= self.size {
            return;
        }
        self.column -= 1;
        let up = self.diag_up_index(row);
        let down = self.diag_down_index(row);
        self.row_free.set(row, true);
        self.diag_up_free.set(up, true);
        self.diag_down_free.set(down, true);
    }

    /// Board dimension
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Next column to fill, equal to the number of queens on the board
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Test whether every column holds a queen
    pub const fn is_full(&self) -> bool {
        self.column == self.size
    }

    /// Row recorded for a previously filled column
    pub fn row_in_column(&self, column: usize) -> Option<usize> {
        if column < self.column {
            self.positions.get(column).copied()
        } else {
            None
        }
    }

    fn line_free(lines: &BitSlice, index: usize) -> bool {
        lines.get(index).as_deref() == Some(&true)
    }

    const fn diag_up_index(&self, row: usize) -> usize {
        self.size - 1 + self.column - row
    }

    const fn diag_down_index(&self, row: usize) -> usize {
        self.column + row
    }
}

impl fmt::Display for AttackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placed = self.positions.get(..self.column).unwrap_or(&[]);
        write!(
            f,
            "AttackState({}/{} queens: {placed:?})",
            self.column, self.size
        )
    }
}
