//! Key management for the wallet core
//!
//! Mnemonic generation, BIP-44 derivation and in-memory key handling.

pub mod secure_private_key;
pub mod key_manager;
pub mod secure_seed_phrase;
pub mod mnemonic;

// Re-export all public items from submodules
pub use secure_private_key::*;
pub use key_manager::*;
pub use secure_seed_phrase::*;
pub use mnemonic::*;
