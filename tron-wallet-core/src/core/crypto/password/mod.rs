//! Password handling for the wallet core
//!
//! Strength rules for new passwords and key derivation for mnemonic encryption.

pub mod key_derivation;
pub mod password_config;
pub mod password_algorithm;
pub mod password_strength;

// Re-export all public items from submodules
pub use key_derivation::*;
pub use password_config::*;
pub use password_algorithm::*;
pub use password_strength::*;
