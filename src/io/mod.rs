//! Terminal input, output, and error plumbing for the counter

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types for the counting front end
pub mod error;
/// Live progress display for long counts
pub mod progress;
/// Result line formatting and printing
pub mod report;
