//! # peek-client
//!
//! HTTP client for the PricePeek comparison service.
//!
//! Issues `GET {base_url}/compare/{query}` with the query percent-encoded as a
//! single path segment and hands back the parsed [`ComparisonResponse`]. The
//! client never retries and never inspects prices; interpreting the body is
//! the request controller's job.

mod error;
mod http;

pub use error::ClientError;

use peek_config::ServiceConfig;
use peek_core::{ComparisonResponse, ComparisonSource, FetchError, SearchQuery};

/// Client for the remote comparison endpoint.
#[derive(Debug, Clone)]
pub struct ComparisonClient {
    http: reqwest::Client,
    base_url: String,
}

impl ComparisonClient {
    /// Build a client from the service section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization fails).
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    /// Base URL requests are issued against, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `query`.
    #[must_use]
    pub fn compare_url(&self, query: &SearchQuery) -> String {
        format!("{}/compare/{}", self.base_url, query.encoded())
    }

    /// Ask the service to compare prices for `query`.
    ///
    /// A body carrying a non-empty `error` is returned as `Ok`, whatever the
    /// status code.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status without an `error` body, or the body is not a
    /// comparison object.
    pub async fn compare(&self, query: &SearchQuery) -> Result<ComparisonResponse, ClientError> {
        let url = self.compare_url(query);
        tracing::debug!(%url, "requesting comparison");

        let resp = self.http.get(&url).send().await?;
        http::read_comparison(resp).await
    }
}

impl ComparisonSource for ComparisonClient {
    async fn fetch(&self, query: &SearchQuery) -> Result<ComparisonResponse, FetchError> {
        self.compare(query).await.map_err(|e| {
            tracing::warn!(query = %query, error = %e, "comparison request failed");
            FetchError::new(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ComparisonClient {
        ComparisonClient::new(&ServiceConfig {
            base_url: base_url.to_string(),
            ..ServiceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn compare_url_encodes_query_as_one_segment() {
        let client = client("https://price-peek-api.vercel.app");
        let query = SearchQuery::parse(" iPhone 15 Pro/Max ").unwrap();
        assert_eq!(
            client.compare_url(&query),
            "https://price-peek-api.vercel.app/compare/iPhone%2015%20Pro%2FMax"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_dropped() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        let query = SearchQuery::parse("tv").unwrap();
        assert_eq!(client.compare_url(&query), "http://localhost:8000/compare/tv");
    }

    #[test]
    fn builds_without_timeout() {
        let config = ServiceConfig {
            timeout_secs: 0,
            ..ServiceConfig::default()
        };
        assert!(ComparisonClient::new(&config).is_ok());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_compare() {
        let client = ComparisonClient::new(&ServiceConfig::default()).unwrap();
        let query = SearchQuery::parse("iPhone 15").unwrap();
        match client.compare(&query).await {
            Ok(body) => println!("{body:#?}"),
            Err(e) => println!("ERROR: {e}"),
        }
    }
}
