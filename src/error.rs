//! Error types for listfold

use thiserror::Error;

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in listfold
///
/// Selection-count and illegal-move violations are deliberately not
/// represented here: both are handled where they are detected (a
/// validation message on the controller, a rejected no-op on the
/// workspace) and never propagate as faults.
#[derive(Debug, Error)]
pub enum Error {
    /// Data source unreachable, returned a non-success status, or the
    /// payload could not be parsed. Surfaced as a retryable failed
    /// load, never fatal.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Config file could not be read, parsed, or written
    #[error("config error: {0}")]
    Config(String),

    /// Endpoint URL is not a valid URL
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Unexpected internal error (terminal I/O, prompt failures)
    #[error("internal error: {0}")]
    Internal(String),
}
