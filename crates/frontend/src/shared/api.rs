//! Shared fetch plumbing.
//!
//! Every loader goes through [`fetch_json`], which classifies failures
//! into transport, non-2xx and malformed-payload errors so each page
//! section can surface its own recoverable banner.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// GET `url` and decode the JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_class() {
        assert_eq!(
            ApiError::Status(502).to_string(),
            "server returned HTTP 502"
        );
        assert!(ApiError::Network("timed out".into())
            .to_string()
            .starts_with("network error"));
        assert!(ApiError::Decode("expected value".into())
            .to_string()
            .starts_with("malformed response"));
    }
}
