//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.
//! Variants that reach the user carry the exact message to display; see
//! [`WalletError::user_message`].

use thiserror::Error;

use crate::shared::constants::messages;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Mnemonic encryption or decryption failure. Decryption always carries
    /// the same generic message regardless of cause.
    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Verification error: {0}")]
    Verification(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Wallet already exists: {0}")]
    WalletAlreadyExists(String),

    #[error("Wallet not initialized: {0}")]
    WalletNotInitialized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create an encryption error
    pub fn encryption(message: impl Into<String>) -> Self {
        Self::Encryption(message.into())
    }

    /// The single error every failed mnemonic decryption maps to
    pub fn decryption_failed() -> Self {
        Self::Encryption(messages::DECRYPTION_FAILED.to_string())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a mnemonic verification error
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an error reported by the Tron node
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc(message.into())
    }

    /// Create a transaction error
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::Transaction(message.into())
    }

    /// Create a wallet already exists error
    pub fn wallet_already_exists(message: impl Into<String>) -> Self {
        Self::WalletAlreadyExists(message.into())
    }

    /// Create a wallet not initialized error
    pub fn wallet_not_initialized(message: impl Into<String>) -> Self {
        Self::WalletNotInitialized(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for errors the user can fix by changing their input
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Verification(_))
    }

    /// Text suitable for display next to the form field or action that failed.
    ///
    /// Validation, verification, encryption and transaction errors already
    /// carry their display text. Infrastructure failures collapse to a
    /// generic line so node internals do not leak into the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::Verification(msg)
            | Self::Encryption(msg)
            | Self::Transaction(msg)
            | Self::WalletAlreadyExists(msg)
            | Self::WalletNotInitialized(msg) => msg.clone(),
            Self::Crypto(msg)
                if msg == messages::MNEMONIC_GENERATION_FAILED || msg == messages::WALLET_CREATION_FAILED =>
            {
                msg.clone()
            }
            Self::Network(msg) if msg == messages::CLIENT_INIT_FAILED => msg.clone(),
            Self::Network(_) | Self::Rpc(_) => messages::NETWORK_FAILURE.to_string(),
            Self::Config(_) | Self::Crypto(_) | Self::Internal(_) => {
                messages::UNEXPECTED_FAILURE.to_string()
            }
        }
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::rpc(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

// Cryptographic error conversions
impl From<secp256k1::Error> for WalletError {
    fn from(err: secp256k1::Error) -> Self {
        Self::crypto(format!("Secp256k1 error: {}", err))
    }
}

impl From<argon2::Error> for WalletError {
    fn from(err: argon2::Error) -> Self {
        Self::crypto(format!("Argon2 error: {}", err))
    }
}

impl From<bip32::Error> for WalletError {
    fn from(err: bip32::Error) -> Self {
        Self::crypto(format!("BIP32 derivation error: {}", err))
    }
}

impl From<bip39::Error> for WalletError {
    fn from(err: bip39::Error) -> Self {
        Self::validation(format!("Invalid BIP39 mnemonic: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let config_error = WalletError::config("Invalid configuration");
        let crypto_error = WalletError::crypto("Derivation failed");
        let validation_error = WalletError::validation("Invalid address");

        assert!(matches!(config_error, WalletError::Config(_)));
        assert!(matches!(crypto_error, WalletError::Crypto(_)));
        assert!(matches!(validation_error, WalletError::Validation(_)));
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::crypto("Test error");
        let display = format!("{}", error);

        assert!(display.contains("Cryptographic error"));
        assert!(display.contains("Test error"));
    }

    #[test]
    fn test_user_message_passes_validation_text_through() {
        let error = WalletError::validation(messages::SEND_TO_SELF);
        assert_eq!(error.user_message(), "You cannot send to self");
        assert!(error.is_user_correctable());
    }

    #[test]
    fn test_user_message_hides_node_details() {
        let error = WalletError::rpc("CONTRACT_VALIDATE_ERROR: balance is not sufficient");
        assert_eq!(error.user_message(), messages::NETWORK_FAILURE);
        assert!(!error.is_user_correctable());
    }

    #[test]
    fn test_user_message_keeps_setup_failures() {
        let error = WalletError::crypto(messages::MNEMONIC_GENERATION_FAILED);
        assert_eq!(error.user_message(), "Failed to generate mnemonic. Please try again.");
        let error = WalletError::network(messages::CLIENT_INIT_FAILED);
        assert_eq!(error.user_message(), "Failed to initialize Tron client");
        let error = WalletError::crypto("secp256k1: malformed public key");
        assert_eq!(error.user_message(), messages::UNEXPECTED_FAILURE);
    }

    #[test]
    fn test_decryption_failed_is_generic() {
        assert_eq!(
            WalletError::decryption_failed().user_message(),
            "Failed to decrypt mnemonic"
        );
    }

    #[test]
    fn test_error_conversions() {
        let hex_error = hex::decode("zz").unwrap_err();
        let wallet_error: WalletError = hex_error.into();
        assert!(matches!(wallet_error, WalletError::Validation(_)));
    }
}
