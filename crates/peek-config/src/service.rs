//! Remote comparison service configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Default comparison service endpoint.
fn default_base_url() -> String {
    String::from("https://price-peek-api.vercel.app")
}

/// Default client-side timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("pricepeek/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL; requests go to `{base_url}/compare/{query}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    /// Client timeout, or `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values no request could be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        let reason = if base.is_empty() {
            "must not be empty"
        } else if !(base.starts_with("http://") || base.starts_with("https://")) {
            "must start with http:// or https://"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        })
    }
}
