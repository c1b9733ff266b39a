//! Encryption functionality for the wallet core
//!
//! AES-256-GCM and ChaCha20-Poly1305 primitives, and the password-keyed
//! envelope used to store the mnemonic.

pub mod encryption_manager;
pub mod encryption_algorithm;
pub mod encrypted_data;
pub mod mnemonic_cipher;

// Re-export all public items from submodules
pub use encryption_manager::*;
pub use encryption_algorithm::*;
pub use encrypted_data::*;
pub use mnemonic_cipher::*;
