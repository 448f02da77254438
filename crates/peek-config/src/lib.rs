//! # peek-config
//!
//! Layered configuration loading for PricePeek using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PRICEPEEK_*` prefix, `__` as separator)
//! 2. Project-level `.pricepeek/config.toml`
//! 3. User-level `~/.config/pricepeek/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `PRICEPEEK_SERVICE__BASE_URL` -> `service.base_url`,
//! `PRICEPEEK_SERVICE__TIMEOUT_SECS` -> `service.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use peek_config::PeekConfig;
//!
//! let config = PeekConfig::load_with_dotenv().expect("config");
//! println!("comparing via {}", config.service.base_url());
//! ```

mod display;
mod error;
mod service;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PeekConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl PeekConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI overrides) on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".pricepeek/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PRICEPEEK_").split("__"))
    }

    /// Check every section for values no request could be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pricepeek").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PeekConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.timeout_secs, 15);
        assert_eq!(config.display.currency_symbol, "₹");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PeekConfig = PeekConfig::figment().extract()?;
            assert_eq!(config.service.base_url, "https://price-peek-api.vercel.app");
            Ok(())
        });
    }
}
