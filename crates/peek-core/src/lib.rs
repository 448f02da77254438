//! # peek-core
//!
//! Core types and comparison logic for PricePeek.
//!
//! This crate provides the pieces shared by every other PricePeek crate:
//! - The wire contract of the remote comparison service ([`ComparisonResponse`])
//!   and its validated form ([`Comparison`])
//! - The closed [`Platform`] set and per-platform [`Listing`]s
//! - [`SearchQuery`], the trimmed non-empty text a request is made for
//! - [`RequestState`], the lifecycle of one comparison request
//! - Pure price evaluation in [`evaluator`]
//! - The [`ComparisonSource`] seam a controller fetches through
//!
//! Nothing here performs I/O.

pub mod enums;
pub mod errors;
pub mod evaluator;
pub mod query;
pub mod response;
pub mod source;
pub mod state;

pub use enums::{FailureKind, Platform};
pub use errors::{ContractError, FetchError};
pub use evaluator::ComparisonFacts;
pub use query::SearchQuery;
pub use response::{Comparison, ComparisonResponse, Listing};
pub use source::ComparisonSource;
pub use state::{CONTRACT_FAILURE_REASON, RequestId, RequestState, TRANSPORT_FAILURE_REASON};
