//! Error types for the opportunity board
//!
//! This module provides error handling using thiserror for structured
//! error definitions and anyhow for error propagation. The only
//! user-visible failure in the system is a listing load failure; the
//! structured variants exist so the library can propagate causes
//! internally before they are folded into [`LOAD_FAILED_MESSAGE`] at the
//! store boundary.

use thiserror::Error;

/// Static user-facing message shown when a remote listing load fails
///
/// Load failures never escape the store as errors; they surface only as
/// this message alongside an empty collection.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load listings. Please try again later.";

/// Main error type for opportunity board operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Remote listing request failed (connection, non-2xx, or body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for opportunity board operations
pub type Result<T> = std::result::Result<T, BoardError>;

impl From<anyhow::Error> for BoardError {
    fn from(err: anyhow::Error) -> Self {
        BoardError::Other(err.to_string())
    }
}
