//! Error types for pdp-objective.

use thiserror::Error;

/// Errors raised while scoring runs or writing results.
#[derive(Debug, Error)]
pub enum ObjectiveError {
    /// `compute_cost` was called on stats that `is_valid_result` rejects.
    /// Callers must check validity first; this is a contract violation, not
    /// a recoverable condition.
    #[error("{objective}: cost requested for an invalid result")]
    InvalidResult { objective: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Alias for `Result<T, ObjectiveError>`.
pub type ObjectiveResult<T> = Result<T, ObjectiveError>;
