//! Search query text.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Trimmed, non-empty product description a comparison is requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from raw user input.
    ///
    /// Returns `None` when the input is empty or whitespace only. No other
    /// normalization is applied.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query percent-encoded as a single URL path segment.
    #[must_use]
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
