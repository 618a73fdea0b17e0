//! Error types for the transport layer.

use thiserror::Error;

/// Errors that can occur while talking to the expense API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-2xx response; `message` is the best-effort
    /// error body (empty when the body could not be read)
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Failed to parse the server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}
