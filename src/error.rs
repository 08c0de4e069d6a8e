//! Error types for the role tracker.
//!
//! Field validation failures live in [`crate::domain::InvalidFormatError`];
//! this module covers the surrounding plumbing, using `thiserror` for precise
//! error handling.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that abort a whole import.
///
/// A single malformed record is not an `ImportError`; it is reported in the
/// import's rejected list instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading the input failed
    #[error("Failed to read role records: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not an array of records
    #[error("Expected a JSON array of role records, got {0}")]
    NotAnArray(&'static str),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;
