//! The seam a request controller fetches comparisons through.

use std::future::Future;

use crate::errors::FetchError;
use crate::query::SearchQuery;
use crate::response::ComparisonResponse;

/// Anything that can answer a [`SearchQuery`] with a service body.
///
/// `Ok` means a body was received and parsed, whether or not it carries an
/// `error`. `Err` means no usable body arrived.
pub trait ComparisonSource: Send + Sync + 'static {
    fn fetch(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<ComparisonResponse, FetchError>> + Send;
}
