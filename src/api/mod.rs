//! REST API client module for the Open Asset Protocol endpoints.
//!
//! This module provides a type-safe HTTP client for generating OAP
//! keychains, issuing and transferring assets, and querying asset
//! transactions and addresses.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use oap_sdk::api::OapApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings (btc/main, no token)
//!     let client = OapApiClient::new("https://api.blockcypher.com/v1")?;
//!
//!     // Walk every transaction of an asset
//!     for hash in client.list_asset_txs("asset_id").await? {
//!         let tx = client.get_asset_tx("asset_id", &hash).await?;
//!         println!("{} confirmed={}", tx.hash, tx.is_confirmed());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use oap_sdk::api::ApiError;
//!
//! match client.get_asset_tx("asset_id", "hash").await {
//!     Ok(tx) => println!("Found {}", tx.hash),
//!     Err(ApiError::NotFound(msg)) => println!("No such transaction: {}", msg),
//!     Err(ApiError::Decode(msg)) => println!("Unexpected response: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Custom Transports
//!
//! The client is generic over [`Transport`]. Pass any implementation to
//! [`OapApiClientBuilder::build_with_transport`] to route requests
//! through something other than reqwest.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{OapApiClient, OapApiClientBuilder};
pub use endpoint::UrlBuilder;
pub use error::{ApiError, ApiResult, ErrorDetail, ErrorResponse};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use types::*;
