//! OAP REST API client implementation.
//!
//! The [`OapApiClient`] provides a type-safe interface to the Open Asset
//! Protocol endpoints of the BlockCypher API.
//!
//! # Example
//!
//! ```rust,ignore
//! use oap_sdk::api::{OapApiClient, OapIssue};
//! use oap_sdk::network::Network;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OapApiClient::builder("https://api.blockcypher.com/v1")
//!         .network(Network::BlockCypherTest)
//!         .token("your-token")
//!         .build()?;
//!
//!     let keychain = client.gen_asset_keychain().await?;
//!     let issue = OapIssue::new(funded_private_key, &keychain.oap_address, 100);
//!     let tx = client.issue_asset(&issue).await?;
//!     println!("Issued asset {}", tx.asset_id);
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::endpoint::{redacted, UrlBuilder};
use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::api::transport::{ReqwestTransport, Transport, TransportResponse};
use crate::api::types::*;
use crate::network::{Network, DEFAULT_API_URL};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the base URL in [`OapApiClientBuilder::from_env`].
pub const ENV_API_URL: &str = "OAP_API_URL";
/// Environment variable selecting the `coin/chain` pair.
pub const ENV_NETWORK: &str = "OAP_NETWORK";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "OAP_API_TOKEN";

/// Builder for configuring [`OapApiClient`].
#[derive(Clone)]
pub struct OapApiClientBuilder {
    base_url: String,
    network: Network,
    token: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl OapApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            network: Network::default(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Create a builder from `OAP_API_URL`, `OAP_NETWORK` and `OAP_API_TOKEN`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut builder = Self::new(base_url);

        if let Ok(network) = std::env::var(ENV_NETWORK) {
            let network = network
                .parse::<Network>()
                .map_err(|e| ApiError::InvalidParameter(format!("{}: {}", ENV_NETWORK, e)))?;
            builder = builder.network(network);
        }
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            builder = builder.token(token);
        }

        Ok(builder)
    }

    /// Select the coin/chain the endpoints run against.
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the API token appended to every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client on top of reqwest.
    pub fn build(self) -> ApiResult<OapApiClient> {
        let transport = ReqwestTransport::new(self.timeout, &self.default_headers)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build the client on top of a caller-supplied transport.
    ///
    /// Timeout and headers are transport concerns and are ignored here.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> OapApiClient<T> {
        OapApiClient {
            transport: Arc::new(transport),
            urls: UrlBuilder::new(self.base_url, self.network, self.token),
        }
    }
}

impl std::fmt::Debug for OapApiClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OapApiClientBuilder")
            .field("base_url", &self.base_url)
            .field("network", &self.network)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// OAP REST API client.
///
/// Holds only immutable configuration; clones share the transport and can
/// be used from any number of tasks.
pub struct OapApiClient<T: Transport = ReqwestTransport> {
    transport: Arc<T>,
    urls: UrlBuilder,
}

impl OapApiClient {
    /// Create a new client with the given base URL.
    ///
    /// Uses default settings (Bitcoin main chain, no token, 30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        OapApiClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> OapApiClientBuilder {
        OapApiClientBuilder::new(base_url)
    }
}

impl<T: Transport> OapApiClient<T> {
    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.urls.base_url()
    }

    /// Get the configured network.
    pub fn network(&self) -> &Network {
        self.urls.network()
    }

    /// Check whether an API token is set.
    pub fn has_token(&self) -> bool {
        self.urls.has_token()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Execute a GET request and decode the body.
    async fn get<R: DeserializeOwned>(&self, url: &Url) -> ApiResult<R> {
        let response = self.transport.get(url).await?;
        Self::handle_response("GET", url, response)
    }

    /// Execute a POST request with a JSON body and decode the response.
    async fn post<R: DeserializeOwned, B: Serialize>(&self, url: &Url, body: &B) -> ApiResult<R> {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        let response = self.transport.post(url, Some(body)).await?;
        Self::handle_response("POST", url, response)
    }

    /// Execute a POST request without a body and decode the response.
    async fn post_empty<R: DeserializeOwned>(&self, url: &Url) -> ApiResult<R> {
        let response = self.transport.post(url, None).await?;
        Self::handle_response("POST", url, response)
    }

    fn handle_response<R: DeserializeOwned>(
        method: &str,
        url: &Url,
        response: TransportResponse,
    ) -> ApiResult<R> {
        tracing::debug!(
            method,
            url = %redacted(url),
            status = response.status,
            "OAP request completed"
        );

        if response.is_success() {
            return serde_json::from_slice(&response.body).map_err(|e| {
                ApiError::Decode(format!("Failed to deserialize response: {}", e))
            });
        }

        Err(Self::parse_error_response(response))
    }

    /// Parse an error response into an ApiError.
    fn parse_error_response(response: TransportResponse) -> ApiError {
        let error_response = match serde_json::from_slice::<ErrorResponse>(&response.body) {
            Ok(parsed) => parsed,
            Err(e) => {
                let text = String::from_utf8_lossy(&response.body).trim().to_string();
                tracing::warn!(status = response.status, error = %e, "Unparsable error body");
                if text.is_empty() {
                    ErrorResponse::from_text(format!("HTTP {}", response.status))
                } else {
                    ErrorResponse::from_text(text)
                }
            }
        };

        Self::map_status_error(response.status, error_response)
    }

    /// Map HTTP status code to ApiError.
    fn map_status_error(status: u16, response: ErrorResponse) -> ApiError {
        match status {
            401 => ApiError::Unauthorized(response),
            404 => ApiError::NotFound(response),
            400 => ApiError::BadRequest(response),
            403 => ApiError::Forbidden(response),
            429 => ApiError::RateLimited(response),
            500..=599 => ApiError::ServerError(status, response),
            _ => ApiError::UnexpectedStatus(status, response),
        }
    }

    // =========================================================================
    // Asset endpoints
    // =========================================================================

    /// Generate a public/private key pair with an associated OAP address.
    pub async fn gen_asset_keychain(&self) -> ApiResult<AddrKeychain> {
        let url = self.urls.build("/oap/addrs")?;
        self.post_empty(&url).await
    }

    /// Issue new assets onto an OAP address, funded by the private key in
    /// `issue`.
    pub async fn issue_asset(&self, issue: &OapIssue) -> ApiResult<OapTx> {
        let url = self.urls.build("/oap/issue")?;
        self.post(&url, issue).await
    }

    /// Transfer previously issued assets of `asset_id` to a new OAP address.
    pub async fn transfer_asset(&self, issue: &OapIssue, asset_id: &str) -> ApiResult<OapTx> {
        let url = self
            .urls
            .build(&format!("/oap/{}/transfer", urlencoding::encode(asset_id)))?;
        self.post(&url, issue).await
    }

    /// List the transaction hashes associated with `asset_id`.
    ///
    /// An asset with no transactions yields an empty list.
    pub async fn list_asset_txs(&self, asset_id: &str) -> ApiResult<Vec<String>> {
        let url = self
            .urls
            .build(&format!("/oap/{}/txs", urlencoding::encode(asset_id)))?;
        self.get(&url).await
    }

    /// Get the asset transaction with the given hash.
    pub async fn get_asset_tx(&self, asset_id: &str, hash: &str) -> ApiResult<OapTx> {
        let url = self.urls.build(&format!(
            "/oap/{}/txs/{}",
            urlencoding::encode(asset_id),
            urlencoding::encode(hash)
        ))?;
        self.get(&url).await
    }

    /// Get an OAP address with its balance of `asset_id`.
    ///
    /// Balance fields on the returned [`Addr`] count asset units, not
    /// satoshis.
    pub async fn get_asset_addr(&self, asset_id: &str, oap_addr: &str) -> ApiResult<Addr> {
        let url = self.urls.build(&format!(
            "/oap/{}/addrs/{}",
            urlencoding::encode(asset_id),
            urlencoding::encode(oap_addr)
        ))?;
        self.get(&url).await
    }
}

impl<T: Transport> Clone for OapApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            urls: self.urls.clone(),
        }
    }
}

impl<T: Transport> std::fmt::Debug for OapApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OapApiClient")
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}
