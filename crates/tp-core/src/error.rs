//! Error types for tauprod

use thiserror::Error;

/// tauprod error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Calibration source could not be opened. A missing calibration makes
    /// the whole run meaningless, so callers abort on this.
    #[error("calibration source not found: {0}")]
    SourceNotFound(String),

    /// Named object absent from an opened calibration source. Fatal for the
    /// same reason as [`Error::SourceNotFound`].
    #[error("object '{key}' not found in {file}")]
    KeyNotFound {
        /// Path of the calibration source that was searched.
        file: String,
        /// Key path that failed to resolve.
        key: String,
    },

    /// Loaded calibration data violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Candidate selection was asked to pick from an empty set. Callers must
    /// filter to at least one candidate before selecting.
    #[error("empty candidate list")]
    EmptyCandidates,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
