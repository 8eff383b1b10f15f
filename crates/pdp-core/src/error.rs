//! Core error type.
//!
//! Higher crates wrap `CoreError` as one variant of their own error enum
//! (see `pdp_scenario::ScenarioError::Core`).

use thiserror::Error;

/// Errors raised while constructing core value types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("negative time {0} cannot be represented as a tick")]
    NegativeTime(i64),

    #[error("time window begin {begin} is after end {end}")]
    InvertedTimeWindow { begin: u64, end: u64 },

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Shorthand result type for `pdp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
