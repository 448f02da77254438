//! Client error types.

use thiserror::Error;

/// Errors that can occur when calling the comparison service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status without an `error` body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, as text.
        message: String,
    },

    /// The response body is not a comparison object.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked callers to wait.
        retry_after_secs: u64,
    },
}
