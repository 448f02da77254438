//! Terminal display configuration.

use serde::{Deserialize, Serialize};

/// Default currency symbol; the service quotes Indian Rupees.
fn default_currency_symbol() -> String {
    String::from("₹")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to every rendered price.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}
