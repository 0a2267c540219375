//! Address types for the OAP REST API.
//!
//! The asset endpoints reuse the generic address shape: every field that
//! normally counts satoshis counts asset units instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a transaction touching an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Block height, -1 while unconfirmed
    pub block_height: i64,
    pub tx_hash: String,
    /// Input index, -1 if this reference is an output
    pub tx_input_n: i32,
    /// Output index, -1 if this reference is an input
    pub tx_output_n: i32,
    /// Asset units transferred
    pub value: u64,
    /// Address balance after this transaction
    #[serde(default)]
    pub ref_balance: i64,
    #[serde(default)]
    pub spent: bool,
    #[serde(default)]
    pub confirmations: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub double_spend: bool,
}

/// Address with its asset balance, as returned by
/// GET /oap/{asset_id}/addrs/{oap_addr}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addr {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    pub total_received: i64,
    pub total_sent: i64,
    /// Confirmed asset units
    pub balance: i64,
    pub unconfirmed_balance: i64,
    /// Confirmed plus unconfirmed asset units
    pub final_balance: i64,
    #[serde(rename = "n_tx")]
    pub num_tx: u64,
    #[serde(rename = "unconfirmed_n_tx")]
    pub unconfirmed_num_tx: u64,
    #[serde(rename = "final_n_tx")]
    pub final_num_tx: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub txrefs: Vec<TxRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unconfirmed_txrefs: Vec<TxRef>,
    /// More transaction references exist than were returned
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
}
