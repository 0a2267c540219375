//! Asset transaction types for the OAP REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input of an asset transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OapInput {
    /// Hash of the transaction holding the spent output
    #[serde(default)]
    pub prev_hash: String,
    /// Index of the spent output
    #[serde(default)]
    pub output_index: u32,
    /// OAP address that owned the spent output, empty for plain base-chain inputs
    #[serde(default)]
    pub address: String,
    /// Asset units carried by the spent output
    #[serde(rename = "output_value", default)]
    pub value: u64,
}

/// Output of an asset transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OapOutput {
    /// Receiving OAP address
    #[serde(default)]
    pub address: String,
    /// Asset units carried
    #[serde(default)]
    pub value: u64,
    /// Index of this output in the underlying transaction
    #[serde(default)]
    pub original_output_index: u32,
}

/// Asset transaction, as returned by the issue, transfer and tx endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OapTx {
    /// OAP version
    pub ver: u32,
    /// Asset identifier
    #[serde(rename = "assetid")]
    pub asset_id: String,
    /// Transaction hash on the underlying chain
    pub hash: String,
    /// Time the transaction was included in a block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<DateTime<Utc>>,
    /// Time the service first saw the transaction
    pub received: DateTime<Utc>,
    /// Metadata carried in the marker output
    #[serde(rename = "oap_meta", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Whether the transaction is a double spend
    pub double_spend: bool,
    pub inputs: Vec<OapInput>,
    pub outputs: Vec<OapOutput>,
}

impl OapTx {
    /// Whether the transaction has been mined.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Total asset units moved by the outputs, saturating at `u64::MAX`.
    pub fn total_output_value(&self) -> u64 {
        self.outputs
            .iter()
            .fold(0u64, |total, o| total.saturating_add(o.value))
    }
}
