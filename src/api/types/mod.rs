//! Request and response types for the OAP REST API.
//!
//! Field names follow the service's JSON exactly; records are decoded
//! as-is with no local validation.

pub mod address;
pub mod issue;
pub mod keychain;
pub mod transaction;

// Re-export all types for convenience
pub use address::*;
pub use issue::*;
pub use keychain::*;
pub use transaction::*;
