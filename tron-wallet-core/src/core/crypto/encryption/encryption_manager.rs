use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use chacha20poly1305::{ChaCha20Poly1305, Key as ChaChaKey, Nonce as ChaChaNonce};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use super::{EncryptedData, EncryptionAlgorithm};
use crate::shared::constants::{KEY_SIZE, NONCE_SIZE};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// Authenticated symmetric encryption
pub struct EncryptionManager {
    algorithm: EncryptionAlgorithm,
}

impl EncryptionManager {
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn new_default() -> Self {
        Self::new(EncryptionAlgorithm::AES256GCM)
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    /// Encrypt data with a key under a fresh random nonce
    pub fn encrypt(&self, data: &[u8], key: &[u8; KEY_SIZE]) -> WalletResult<EncryptedData> {
        let nonce = Self::generate_nonce()?;
        let sealed = match self.algorithm {
            EncryptionAlgorithm::AES256GCM => Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))
                .encrypt(Nonce::from_slice(&nonce), data)
                .map_err(|e| WalletError::encryption(format!("AES-GCM encryption failed: {}", e)))?,
            EncryptionAlgorithm::ChaCha20Poly1305 => ChaCha20Poly1305::new(ChaChaKey::from_slice(key))
                .encrypt(ChaChaNonce::from_slice(&nonce), data)
                .map_err(|e| WalletError::encryption(format!("ChaCha20-Poly1305 encryption failed: {}", e)))?,
        };

        EncryptedData::from_sealed(self.algorithm, nonce, &sealed)
            .ok_or_else(|| WalletError::encryption("Cipher output shorter than its tag"))
    }

    /// Decrypt data with a key. Authentication failure yields the generic
    /// decryption error so callers cannot tell a wrong key from tampering.
    pub fn decrypt(&self, encrypted_data: &EncryptedData, key: &[u8; KEY_SIZE]) -> WalletResult<Zeroizing<Vec<u8>>> {
        let sealed = encrypted_data.sealed();
        let plaintext = match encrypted_data.algorithm {
            EncryptionAlgorithm::AES256GCM => Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))
                .decrypt(Nonce::from_slice(&encrypted_data.nonce), sealed.as_slice()),
            EncryptionAlgorithm::ChaCha20Poly1305 => ChaCha20Poly1305::new(ChaChaKey::from_slice(key))
                .decrypt(ChaChaNonce::from_slice(&encrypted_data.nonce), sealed.as_slice()),
        }
        .map_err(|_| WalletError::decryption_failed())?;

        Ok(Zeroizing::new(plaintext))
    }

    /// Generate a secure random nonce
    fn generate_nonce() -> WalletResult<[u8; NONCE_SIZE]> {
        let mut nonce = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| WalletError::crypto(format!("OS entropy source failed: {}", e)))?;
        Ok(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
        0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20,
    ];

    fn both() -> [EncryptionManager; 2] {
        [
            EncryptionManager::new(EncryptionAlgorithm::AES256GCM),
            EncryptionManager::new(EncryptionAlgorithm::ChaCha20Poly1305),
        ]
    }

    #[test]
    fn test_encrypt_decrypt_data() {
        for manager in both() {
            let data = b"Hello, World!";
            let encrypted = manager.encrypt(data, &KEY).expect("Failed to encrypt data");
            assert_ne!(data, encrypted.ciphertext.as_slice());
            assert_eq!(encrypted.ciphertext.len(), data.len());

            let decrypted = manager.decrypt(&encrypted, &KEY).expect("Failed to decrypt data");
            assert_eq!(data, decrypted.as_slice());
        }
    }

    #[test]
    fn test_encrypt_decrypt_with_wrong_key() {
        for manager in both() {
            let mut wrong_key = KEY;
            wrong_key[0] ^= 0xff;

            let encrypted = manager.encrypt(b"Hello, World!", &KEY).expect("Failed to encrypt data");
            assert_eq!(
                manager.decrypt(&encrypted, &wrong_key).unwrap_err(),
                WalletError::decryption_failed()
            );
        }
    }

    #[test]
    fn test_tampered_ciphertext_is_rejected() {
        let manager = EncryptionManager::new_default();
        let mut encrypted = manager.encrypt(b"Hello, World!", &KEY).expect("Failed to encrypt data");
        encrypted.ciphertext[0] ^= 0x01;
        assert!(manager.decrypt(&encrypted, &KEY).is_err());
    }

    #[test]
    fn test_nonces_are_unique() {
        let manager = EncryptionManager::new_default();
        let first = manager.encrypt(b"same", &KEY).unwrap();
        let second = manager.encrypt(b"same", &KEY).unwrap();
        assert_ne!(first.nonce, second.nonce);
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_encrypt_empty_data() {
        let manager = EncryptionManager::new_default();
        let encrypted = manager.encrypt(b"", &KEY).expect("Failed to encrypt empty data");
        let decrypted = manager.decrypt(&encrypted, &KEY).expect("Failed to decrypt empty data");
        assert!(decrypted.is_empty());
    }
}
