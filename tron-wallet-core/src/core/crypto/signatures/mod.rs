//! Digital signature functionality for the wallet core
//!
//! Recoverable secp256k1 signatures over Tron transaction ids.

pub mod signature_manager;
pub mod transaction_signature;

// Re-export all public items from submodules
pub use signature_manager::*;
pub use transaction_signature::*;
