//! Mapping a finished fetch onto a terminal [`RequestState`].

use peek_core::{Comparison, ComparisonResponse, FetchError, RequestState};

/// Decide the terminal state for a completed fetch.
///
/// - no usable body: transport failure with the fixed reason
/// - body with a non-empty `error`: domain failure, message verbatim
/// - body that fails validation: contract failure, logged at `error`
/// - otherwise: `Succeeded`
#[must_use]
pub fn classify(outcome: Result<ComparisonResponse, FetchError>) -> RequestState {
    let body = match outcome {
        Ok(body) => body,
        Err(error) => {
            tracing::debug!(detail = error.detail(), "no usable comparison body");
            return RequestState::transport_failure();
        }
    };

    if let Some(reason) = body.failure() {
        return RequestState::domain_failure(reason);
    }

    match Comparison::try_from(body) {
        Ok(comparison) => RequestState::Succeeded(comparison),
        Err(violation) => {
            tracing::error!(%violation, "comparison service broke its response contract");
            RequestState::contract_failure()
        }
    }
}
