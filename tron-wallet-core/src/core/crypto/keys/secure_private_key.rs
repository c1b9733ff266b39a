use rand_core::{OsRng, RngCore};
use secp256k1::SecretKey;
use zeroize::Zeroizing;

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Secure private key wrapper.
///
/// Key bytes live in zeroizing memory and are validated as a secp256k1
/// scalar on construction.
pub struct SecurePrivateKey {
    bytes: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
}

impl SecurePrivateKey {
    /// Create a SecurePrivateKey from existing key bytes
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(WalletError::crypto("Invalid private key length"));
        }
        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key.copy_from_slice(bytes);

        // Ensure the key is valid for secp256k1
        SecretKey::from_byte_array(*key).map_err(|_| WalletError::crypto("Invalid private key"))?;
        Ok(Self { bytes: key })
    }

    /// Parse a 64-character hex key, optionally `0x`-prefixed
    pub fn from_hex(key: &str) -> WalletResult<Self> {
        let key = key.trim().trim_start_matches("0x");
        if key.len() != PRIVATE_KEY_SIZE * 2 {
            return Err(WalletError::validation("Private key must be 64 hex characters"));
        }
        let bytes = Zeroizing::new(
            hex::decode(key).map_err(|_| WalletError::validation("Private key contains invalid hex characters"))?,
        );
        Self::from_bytes(&bytes)
    }

    /// Generate a new private key.
    /// Uses cryptographically secure random number generation
    pub fn generate() -> WalletResult<Self> {
        let mut rng = OsRng;
        loop {
            let mut key_bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
            rng.try_fill_bytes(&mut *key_bytes)
                .map_err(|e| WalletError::crypto(format!("OS entropy source failed: {}", e)))?;

            // Out-of-range scalars are astronomically rare; draw again
            if SecretKey::from_byte_array(*key_bytes).is_ok() {
                return Ok(Self { bytes: key_bytes });
            }
        }
    }

    /// Perform an operation with the secp256k1 key. The converted key is
    /// dropped as soon as the closure returns.
    pub fn with_key<F, T>(&self, f: F) -> WalletResult<T>
    where
        F: FnOnce(&SecretKey) -> WalletResult<T>,
    {
        let secret_key = SecretKey::from_byte_array(*self.bytes)
            .map_err(|_| WalletError::crypto("Invalid private key"))?;
        f(&secret_key)
    }

    /// Hex rendering for export. The returned string is zeroized on drop.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(*self.bytes))
    }
}

// No Debug implementation to prevent key exposure in logs
// No Clone implementation to prevent accidental key duplication
