//! Wallet setup flow
//!
//! [`SetupWizard`] drives mnemonic generation, the recording quiz, password
//! encryption and wallet derivation, ending in a [`crate::core::wallet::WalletSession`].

pub mod verifier;
pub mod wizard;

pub use verifier::*;
pub use wizard::*;
