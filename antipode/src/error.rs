//! Error types for the antipode library.

use thiserror::Error;

/// Errors that can occur while talking to the knowledge source.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport-level failure (connection, timeout, non-text body).
    #[error("knowledge source request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("unexpected response from knowledge source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using [`LookupError`].
pub type Result<T> = std::result::Result<T, LookupError>;
