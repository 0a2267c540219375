//! Issuance/transfer request type for the OAP REST API.

use serde::{Deserialize, Serialize};

/// Request body for POST /oap/issue and POST /oap/{asset_id}/transfer.
///
/// `from_private` must control a funded address on the underlying chain;
/// the service validates it, the SDK does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OapIssue {
    /// Private key of the funding (issue) or holding (transfer) address
    #[serde(rename = "from_private")]
    pub priv_key: String,
    /// Destination OAP address
    #[serde(rename = "to_address")]
    pub to_addr: String,
    /// Number of asset units
    pub amount: u64,
    /// Optional metadata embedded in the marker output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl OapIssue {
    /// Create a request with the required fields.
    pub fn new(priv_key: impl Into<String>, to_addr: impl Into<String>, amount: u64) -> Self {
        Self {
            priv_key: priv_key.into(),
            to_addr: to_addr.into(),
            amount,
            metadata: None,
        }
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}
