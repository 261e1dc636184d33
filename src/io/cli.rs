//! Command-line interface for counting N-Queens solutions

use crate::io::configuration::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::io::error::{Result, SearchError, invalid_parameter};
use crate::io::progress::SearchProgress;
use crate::io::report::print_summary;
use crate::search::counter::PlacementCounters;
use crate::search::executor::{ExecutionMode, count_solutions};
use clap::Parser;

#[derive(Parser)]
#[command(name = "queenscount")]
#[command(
    author,
    version,
    about = "Count N-Queens solutions and the placements needed to find them"
)]
/// Command-line arguments for the solution counter
pub struct Cli {
    /// Board size; a missing, unreadable, or sub-1 value falls back to the default
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Run every branch on the calling thread instead of the worker pool
    #[arg(short, long)]
    pub sequential: bool,

    /// Worker threads for the parallel mode (defaults to the available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Board size after lenient normalization
    ///
    /// A missing argument, an unparsable one, and one below the minimum all
    /// fall back to the default size rather than erroring out.
    pub fn resolved_size(&self) -> usize {
        self.size
            .as_deref()
            .and_then(Self::parsed_size)
            .unwrap_or(DEFAULT_BOARD_SIZE)
    }

    /// Scheduling mode selected by the flags
    pub const fn execution_mode(&self) -> ExecutionMode {
        if self.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    fn parsed_size(raw: &str) -> Option<usize> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .filter(|&size| size >= MIN_BOARD_SIZE)
    }
}

/// Orchestrates one count: progress display, worker pool, result line
pub struct ProblemRunner {
    cli: Cli,
    progress: Option<SearchProgress>,
}

impl ProblemRunner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(SearchProgress::new);

        Self { cli, progress }
    }

    /// Run the count and print the result line
    ///
    /// # Errors
    ///
    /// Returns an error if the requested worker pool cannot be built or the
    /// thread count is invalid.
    // Allow print for user feedback about substituted sizes
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let size = self.cli.resolved_size();

        if !self.cli.quiet
            && let Some(raw) = self.cli.size.as_deref()
            && Cli::parsed_size(raw).is_none()
        {
            eprintln!("Unusable board size '{raw}', counting the {size}-queens board instead");
        }

        if let Some(ref mut progress) = self.progress {
            progress.start(size);
        }

        let counted = self.count(size);

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        let totals = counted?;
        print_summary(size, totals);
        Ok(())
    }

    fn count(&self, size: usize) -> Result<PlacementCounters> {
        let mode = self.cli.execution_mode();

        if let Some(threads) = self.cli.threads
            && mode == ExecutionMode::Parallel
        {
            if threads == 0 {
                return Err(invalid_parameter(
                    "threads",
                    &threads,
                    &"worker pools need at least one thread",
                ));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|source| SearchError::ThreadPool { threads, source })?;
            return Ok(pool.install(|| count_solutions(size, mode)));
        }

        Ok(count_solutions(size, mode))
    }
}
