use std::fmt;
use std::str::FromStr;

use crate::shared::error::WalletError;

/// Encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    AES256GCM,
    ChaCha20Poly1305,
}

impl EncryptionAlgorithm {
    /// Identifier stored in the encryption envelope
    pub fn id(&self) -> u8 {
        match self {
            Self::AES256GCM => 1,
            Self::ChaCha20Poly1305 => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::AES256GCM),
            2 => Some(Self::ChaCha20Poly1305),
            _ => None,
        }
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AES256GCM => write!(f, "aes-gcm"),
            Self::ChaCha20Poly1305 => write!(f, "chacha20"),
        }
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes-gcm" | "aes256gcm" | "aes-256-gcm" => Ok(Self::AES256GCM),
            "chacha20" | "chacha20poly1305" | "chacha20-poly1305" => Ok(Self::ChaCha20Poly1305),
            other => Err(WalletError::config(format!("Unknown cipher: {}", other))),
        }
    }
}
