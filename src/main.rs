//! CLI entry point for the N-Queens solution counter

use clap::Parser;
use queenscount::io::cli::{Cli, ProblemRunner};

fn main() -> queenscount::Result<()> {
    let cli = Cli::parse();
    let mut runner = ProblemRunner::new(cli);
    runner.process()
}
