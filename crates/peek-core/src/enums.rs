//! Platform identifiers and failure classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ContractError;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// A retail platform whose listing is compared.
///
/// Serialized with the display name the comparison service uses on the wire
/// (`"Amazon"`, `"Flipkart"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Self; 2] = [Self::Amazon, Self::Flipkart];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Flipkart => "Flipkart",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ContractError;

    /// Match a platform display name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ContractError::UnknownPlatform(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Why a request ended in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The call never produced a usable body (connection, timeout, bad JSON,
    /// unexpected status).
    Transport,
    /// The service answered with an `error` message.
    Domain,
    /// The service answered "successfully" with data that breaks the contract.
    Contract,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Domain => "domain",
            Self::Contract => "contract",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_display_names() {
        assert_eq!("Amazon".parse::<Platform>().unwrap(), Platform::Amazon);
        assert_eq!("Flipkart".parse::<Platform>().unwrap(), Platform::Flipkart);
    }

    #[test]
    fn platform_parse_ignores_case_and_padding() {
        assert_eq!(" flipkart ".parse::<Platform>().unwrap(), Platform::Flipkart);
        assert_eq!("AMAZON".parse::<Platform>().unwrap(), Platform::Amazon);
    }

    #[test]
    fn platform_parse_rejects_unknown() {
        let err = "Myntra".parse::<Platform>().unwrap_err();
        assert!(matches!(err, ContractError::UnknownPlatform(ref name) if name == "Myntra"));
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_serializes_as_display_name() {
        let json = serde_json::to_string(&Platform::Flipkart).unwrap();
        assert_eq!(json, "\"Flipkart\"");
    }

    #[test]
    fn failure_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::Transport).unwrap();
        assert_eq!(json, "\"transport\"");
        assert_eq!(FailureKind::Contract.to_string(), "contract");
    }
}
