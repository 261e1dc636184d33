//! Error types for counter operations

use std::fmt;

/// Main error type for counter operations
///
/// The search itself is total over every board size; errors only arise at
/// the front end, from argument validation and worker-pool construction.
#[derive(Debug)]
pub enum SearchError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Worker pool construction failed
    ThreadPool {
        /// Requested pool size
        threads: usize,
        /// Underlying pool build error
        source: rayon::ThreadPoolBuildError,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ThreadPool { threads, source } => {
                write!(f, "Failed to build a {threads}-thread worker pool: {source}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for counter results
pub type Result<T> = std::result::Result<T, SearchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
