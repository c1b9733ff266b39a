//! Hashing functionality for the wallet core
//!
//! SHA-256 for transaction ids and address checksums, Keccak-256 for
//! deriving addresses from public keys.

pub mod hash_manager;

pub use hash_manager::*;
