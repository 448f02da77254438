//! Error types shared across PricePeek crates.
//!
//! Transport-level errors of a concrete client (e.g. `ClientError` in
//! `peek-client`) are defined in that crate and collapse into [`FetchError`]
//! at the [`ComparisonSource`](crate::ComparisonSource) seam.

use thiserror::Error;

/// A "successful" service response that cannot be shown without guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A required price field is absent.
    #[error("missing {field} in comparison response")]
    MissingPrice { field: &'static str },

    /// A price is negative, NaN, or infinite.
    #[error("invalid {field} in comparison response: {value}")]
    InvalidPrice { field: &'static str, value: String },

    /// `cheaper_platform` is absent.
    #[error("missing cheaper_platform in comparison response")]
    MissingPlatform,

    /// `cheaper_platform` names a platform outside the compared set.
    #[error("unrecognized cheaper_platform: {0:?}")]
    UnknownPlatform(String),
}

/// The remote call did not produce a usable response body.
///
/// The detail is kept for logs only; callers surface a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("comparison fetch failed: {detail}")]
pub struct FetchError {
    detail: String,
}

impl FetchError {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}
