//! Response interpretation for the comparison endpoint.
//!
//! A parsed body with a non-empty `error` wins over the status code, so a
//! `404 {"error": "No matching product found"}` reaches the caller as a body
//! rather than as [`ClientError::Api`]. Everything else is checked in the
//! usual order: 429, other non-success statuses, then JSON shape.

use peek_core::ComparisonResponse;

use crate::error::ClientError;

/// Turn an HTTP response into a comparison body or a transport error.
pub async fn read_comparison(resp: reqwest::Response) -> Result<ComparisonResponse, ClientError> {
    let status = resp.status();
    let retry_after = parse_retry_after(&resp);
    let bytes = resp.bytes().await?;
    let parsed = serde_json::from_slice::<ComparisonResponse>(&bytes)
        .map_err(|e| ClientError::Parse(e.to_string()));

    if parsed.as_ref().is_ok_and(|body| body.failure().is_some()) {
        return parsed;
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
    parsed
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
