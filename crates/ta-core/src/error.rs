//! Advisory error type.
//!
//! The engine itself has no failure modes — every arithmetic path is total —
//! so the only errors are input-validation ones raised before the estimator
//! runs.  Sub-crates either reuse `AdvisorError` directly or define their own
//! enum and wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `ta-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The named location is not in the registry.
    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    /// Source and destination resolve to the same location.
    #[error("source and destination are both {0:?}")]
    SameLocation(String),

    /// A departure-time string could not be parsed into an hour 0–23.
    #[error("invalid time {0:?}: expected \"HH:MM\" or \"HH\" with hour 0-23")]
    InvalidTime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ta-*` crates.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
