//! Live progress display for long counting runs

use crate::io::configuration::PROGRESS_TICK_MILLIS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner shown while a count is running
///
/// The search reports nothing while it runs, so the display is a
/// steady-ticked spinner with elapsed time rather than a completion bar.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create an idle display, not yet shown
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the spinner for a count over the given board size
    pub fn start(&mut self, size: usize) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(format!("Counting solutions for the {size}-queens board"));
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MILLIS));
        self.bar = bar;
    }

    /// Stop the spinner and remove it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
