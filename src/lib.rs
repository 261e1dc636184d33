//! Backtracking solution counter for the N-Queens problem
//!
//! The search places queens column by column while tracking attacked rows and
//! diagonals incrementally, halves the first-column search space through
//! mirror symmetry, and runs the surviving branches either in sequence or
//! across a worker pool. Totals report both the solutions found and every
//! queen placement it took to find them.

#![forbid(unsafe_code)]

/// Board occupancy bookkeeping and first-column symmetry arithmetic
pub mod board;
/// Input/output operations and error handling
pub mod io;
/// Branch search, work partitioning, and execution drivers
pub mod search;

pub use io::error::{Result, SearchError};
