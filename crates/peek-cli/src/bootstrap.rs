use anyhow::Context;
use figment::providers::Serialized;
use peek_config::PeekConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PeekConfig> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            tracing::warn!(%error, "ignoring unreadable .env file");
        }
    }

    let mut figment = PeekConfig::figment();
    if let Some(base_url) = &flags.base_url {
        figment = figment.merge(Serialized::default("service.base_url", base_url));
    }

    let config: PeekConfig = figment
        .extract()
        .context("failed to load PricePeek configuration")?;
    config.validate()?;
    Ok(config)
}
