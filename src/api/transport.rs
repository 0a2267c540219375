//! HTTP transport used by [`OapApiClient`](crate::api::OapApiClient).
//!
//! The client only needs two verbs: GET a URL, and POST an optional JSON body
//! to a URL. Anything implementing [`Transport`] can stand in for the default
//! reqwest-backed [`ReqwestTransport`], which is how the tests drive the
//! client without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::api::error::{ApiError, ApiResult};

/// Status and fully-read body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface consumed by the API client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &Url) -> ApiResult<TransportResponse>;

    /// Issue a POST request, with `body` as the JSON payload when present.
    async fn post(&self, url: &Url, body: Option<Vec<u8>>) -> ApiResult<TransportResponse>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with JSON default headers plus `extra_headers`.
    pub fn new(timeout: Duration, extra_headers: &[(String, String)]) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in extra_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn read(response: reqwest::Response) -> ApiResult<TransportResponse> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> ApiResult<TransportResponse> {
        let response = self.client.get(url.clone()).send().await?;
        Self::read(response).await
    }

    async fn post(&self, url: &Url, body: Option<Vec<u8>>) -> ApiResult<TransportResponse> {
        let mut request = self.client.post(url.clone());
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(201, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_invalid_header_rejected() {
        let result = ReqwestTransport::new(
            Duration::from_secs(5),
            &[("bad header".to_string(), "v".to_string())],
        );
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }
}
