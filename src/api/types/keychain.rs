//! Keychain types for the OAP REST API.

use serde::{Deserialize, Serialize};

/// Keypair plus derived addresses, as returned by POST /oap/addrs.
///
/// Fields the service leaves empty are omitted on the wire and decode as
/// empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddrKeychain {
    /// Underlying blockchain address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Hex-encoded private key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private: String,
    /// Hex-encoded public key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public: String,
    /// Wallet import format of the private key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wif: String,
    /// Public keys of a multisig address
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pubkeys: Vec<String>,
    /// Script type of a multisig address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script_type: String,
    /// Address on the base chain backing an OAP address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_address: String,
    /// Open Asset Protocol address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oap_address: String,
}
