//! Error taxonomy for repeat generation
//!
//! Failures are contained at single-line granularity: the engine catches
//! every `RepeatError` at the per-line boundary, logs it under its kind,
//! and the batch driver keeps going. The absence of a repeat or completion
//! annotation is not an error at all — those paths return `None` upstream.

use thiserror::Error;

/// Errors that can occur while generating the next occurrence of a line.
#[derive(Debug, Error)]
pub enum RepeatError {
    /// An interval token was present but cannot produce a meaningful date
    /// (zero count, or arithmetic past the calendar range).
    #[error("invalid repeat interval: {0}")]
    InvalidInterval(String),

    /// The target note could not be resolved or the insert/append failed.
    #[error("placement failed: {0}")]
    Placement(String),

    /// The note store rejected an operation (unknown note, bad index).
    #[error("note store failure: {0}")]
    Store(String),
}

impl RepeatError {
    /// Stable kind tag used in log lines so interval problems stay
    /// distinguishable from store/placement failures.
    pub fn kind(&self) -> &'static str {
        match self {
            RepeatError::InvalidInterval(_) => "invalid_interval",
            RepeatError::Placement(_) => "placement",
            RepeatError::Store(_) => "store",
        }
    }
}
