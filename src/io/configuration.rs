//! Runtime configuration defaults for the counting front end

// Default values for configurable parameters
/// Board size used when none is given or the given one is unusable
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest board size the command line accepts
pub const MIN_BOARD_SIZE: usize = 1;

// Progress display settings
/// Interval between spinner redraws in milliseconds
pub const PROGRESS_TICK_MILLIS: u64 = 100;
