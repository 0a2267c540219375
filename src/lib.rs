//! # OAP Rust SDK
//!
//! A Rust SDK for the Open Asset Protocol (OAP) endpoints of the BlockCypher
//! API: generating asset keychains, issuing and transferring assets, and
//! querying asset transactions and addresses.
//!
//! ## Modules
//!
//! - [`api`]: REST API client and wire types
//! - [`network`]: Default host and coin/chain selection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oap_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OapApiClient::builder(DEFAULT_API_URL)
//!         .network(Network::BlockCypherTest)
//!         .token("your-token")
//!         .build()?;
//!
//!     // Fresh keychain to receive the asset
//!     let keychain = client.gen_asset_keychain().await?;
//!
//!     // Issue 1000 units from a funded address
//!     let issue = OapIssue::new("funded_private_key", &keychain.oap_address, 1000)
//!         .with_metadata("my first asset");
//!     let tx = client.issue_asset(&issue).await?;
//!
//!     let holder = client.get_asset_addr(&tx.asset_id, &keychain.oap_address).await?;
//!     println!("Balance: {} units", holder.final_balance);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants and coin/chain selection.
pub mod network;

/// REST API client module for the asset endpoints.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use oap_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        OapApiClient, OapApiClientBuilder, ApiError, ApiResult, ErrorResponse,
        Transport, TransportResponse, ReqwestTransport,
        // Wire types
        AddrKeychain, OapIssue, OapTx, OapInput, OapOutput, Addr, TxRef,
    };

    // Network
    pub use crate::network::{Network, DEFAULT_API_URL};
}
