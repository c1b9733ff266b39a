//! Cryptographic functionality for the wallet core
//!
//! Mnemonics and key derivation, Tron addresses, transaction signing, and
//! password-based encryption of the mnemonic.
//!
//! Secret material (private keys, seed phrases, derived encryption keys) is
//! held in zeroizing buffers and never implements `Debug` or `Clone`.

pub mod address;
pub mod keys;
pub mod signatures;
pub mod encryption;
pub mod hashing;
pub mod password;

// Re-export all public items from submodules
pub use address::*;
pub use keys::*;
pub use signatures::*;
pub use encryption::*;
pub use hashing::*;
pub use password::*;
