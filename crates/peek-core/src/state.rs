//! Lifecycle of one comparison request.
//!
//! ```text
//! idle → loading → succeeded
//!                → failed
//! ```
//!
//! A new submission replaces whatever state is current with a fresh `loading`
//! state under a new [`RequestId`].

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

use crate::enums::FailureKind;
use crate::query::SearchQuery;
use crate::response::Comparison;

/// Reason shown for every transport failure. The underlying error is never
/// surfaced.
pub const TRANSPORT_FAILURE_REASON: &str = "Network error. Please try again.";

/// Reason shown when the service breaks its response contract.
pub const CONTRACT_FAILURE_REASON: &str = "Unexpected response from the comparison service.";

/// Identity of one submission. Strictly increasing per controller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identity issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Where the current comparison request stands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestState {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// A request for `query` is in flight.
    Loading { query: SearchQuery },
    /// The service returned a valid comparison.
    Succeeded(Comparison),
    /// The request ended without a comparison to show.
    Failed { kind: FailureKind, reason: String },
}

impl RequestState {
    /// Transport failure with the fixed user-facing reason.
    #[must_use]
    pub fn transport_failure() -> Self {
        Self::Failed {
            kind: FailureKind::Transport,
            reason: TRANSPORT_FAILURE_REASON.to_string(),
        }
    }

    /// Failure reported by the service, carried verbatim.
    #[must_use]
    pub fn domain_failure(reason: impl Into<String>) -> Self {
        Self::Failed {
            kind: FailureKind::Domain,
            reason: reason.into(),
        }
    }

    /// Response contract violation.
    #[must_use]
    pub fn contract_failure() -> Self {
        Self::Failed {
            kind: FailureKind::Contract,
            reason: CONTRACT_FAILURE_REASON.to_string(),
        }
    }

    /// `Succeeded` or `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    #[must_use]
    pub const fn comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Succeeded(comparison) => Some(comparison),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}
