//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file or environment value could not be read into [`crate::PeekConfig`].
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// `service.base_url` cannot prefix a `/compare/<query>` request.
    #[error("Invalid service.base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: &'static str },
}
