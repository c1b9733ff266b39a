//! Password-based mnemonic encryption.
//!
//! The mnemonic is sealed under a key derived from the user's password and
//! stored as a base64 envelope that records everything needed to decrypt it:
//!
//! ```text
//! version(1) | kdf(1) | cipher(1) | kdf params (3 x u32 BE) | salt(16) | nonce(12) | ciphertext || tag
//! ```
//!
//! Every decryption failure, whatever the cause, surfaces as the same
//! `"Failed to decrypt mnemonic"` error.

use std::fmt;

use base64::Engine;

use super::{EncryptedData, EncryptionAlgorithm, EncryptionManager};
use crate::core::crypto::keys::SecureSeedPhrase;
use crate::core::crypto::password::{PasswordAlgorithm, PasswordConfig, PasswordKeyDeriver};
use crate::shared::constants::{messages, ENVELOPE_VERSION, NONCE_SIZE, SALT_SIZE, TAG_SIZE};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

const HEADER_SIZE: usize = 3 + 3 * 4 + SALT_SIZE + NONCE_SIZE;

// Upper bounds on envelope KDF parameters, so a crafted envelope cannot make
// decryption allocate or spin without limit.
const MAX_ITERATIONS: u32 = 10_000_000;
const MAX_MEMORY_COST_KIB: u32 = 4 * 1024 * 1024;
const MAX_PARALLELISM: u32 = 64;

/// Base64 envelope holding an encrypted mnemonic
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedMnemonic(String);

impl EncryptedMnemonic {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncryptedMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EncryptedMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptedMnemonic({} chars)", self.0.len())
    }
}

/// Fields of a decoded envelope
struct Envelope {
    password: PasswordConfig,
    salt: Vec<u8>,
    data: EncryptedData,
}

impl Envelope {
    fn encode(&self) -> EncryptedMnemonic {
        let sealed = self.data.sealed();
        let mut bytes = Vec::with_capacity(HEADER_SIZE + sealed.len());
        bytes.push(ENVELOPE_VERSION);
        bytes.push(self.password.algorithm.id());
        bytes.push(self.data.algorithm.id());
        for param in self.password.params() {
            bytes.extend_from_slice(&param.to_be_bytes());
        }
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.data.nonce);
        bytes.extend_from_slice(&sealed);
        EncryptedMnemonic(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    /// Parse an envelope. `None` on any structural problem.
    fn decode(encrypted: &EncryptedMnemonic) -> Option<Self> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encrypted.as_str().trim())
            .ok()?;
        if bytes.len() < HEADER_SIZE + TAG_SIZE || bytes[0] != ENVELOPE_VERSION {
            return None;
        }

        let kdf = PasswordAlgorithm::from_id(bytes[1])?;
        let cipher = EncryptionAlgorithm::from_id(bytes[2])?;

        let mut params = [0u32; 3];
        for (i, param) in params.iter_mut().enumerate() {
            let start = 3 + i * 4;
            *param = u32::from_be_bytes(bytes[start..start + 4].try_into().ok()?);
        }
        let [iterations, memory_cost, parallelism] = params;
        if iterations > MAX_ITERATIONS || memory_cost > MAX_MEMORY_COST_KIB || parallelism > MAX_PARALLELISM {
            return None;
        }

        let salt_start = 3 + 12;
        let nonce_start = salt_start + SALT_SIZE;
        let salt = bytes[salt_start..nonce_start].to_vec();
        let nonce: [u8; NONCE_SIZE] = bytes[nonce_start..HEADER_SIZE].try_into().ok()?;
        let data = EncryptedData::from_sealed(cipher, nonce, &bytes[HEADER_SIZE..])?;

        Some(Self {
            password: PasswordConfig::from_params(kdf, params),
            salt,
            data,
        })
    }
}

/// Encrypts and decrypts mnemonics under a user password
pub struct MnemonicCipher {
    password: PasswordConfig,
    algorithm: EncryptionAlgorithm,
}

impl Default for MnemonicCipher {
    fn default() -> Self {
        Self::new(PasswordConfig::default(), EncryptionAlgorithm::AES256GCM)
    }
}

impl MnemonicCipher {
    pub fn new(password: PasswordConfig, algorithm: EncryptionAlgorithm) -> Self {
        Self { password, algorithm }
    }

    pub fn encrypt(&self, mnemonic: &SecureSeedPhrase, password: &str) -> WalletResult<EncryptedMnemonic> {
        let deriver = PasswordKeyDeriver::new(self.password.clone());
        let seal = || -> WalletResult<EncryptedMnemonic> {
            let salt = deriver.generate_salt()?;
            let key = deriver.derive_key(password, &salt)?;
            let data = EncryptionManager::new(self.algorithm).encrypt(mnemonic.as_str().as_bytes(), &key)?;
            Ok(Envelope {
                password: self.password.clone(),
                salt,
                data,
            }
            .encode())
        };

        seal().map_err(|e| {
            log::error!("Mnemonic encryption failed: {}", e);
            WalletError::encryption(messages::ENCRYPTION_FAILED)
        })
    }

    /// Decrypt with the parameters recorded in the envelope, which may
    /// differ from this cipher's own configuration.
    pub fn decrypt(&self, encrypted: &EncryptedMnemonic, password: &str) -> WalletResult<SecureSeedPhrase> {
        let envelope = Envelope::decode(encrypted).ok_or_else(WalletError::decryption_failed)?;

        let key = PasswordKeyDeriver::new(envelope.password)
            .derive_key(password, &envelope.salt)
            .map_err(|_| WalletError::decryption_failed())?;
        let plaintext = EncryptionManager::new(envelope.data.algorithm)
            .decrypt(&envelope.data, &key)
            .map_err(|_| WalletError::decryption_failed())?;

        let phrase = std::str::from_utf8(&plaintext).map_err(|_| WalletError::decryption_failed())?;
        Ok(SecureSeedPhrase::new(phrase.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn fast_cipher(algorithm: EncryptionAlgorithm) -> MnemonicCipher {
        MnemonicCipher::new(PasswordConfig::insecure_fast(), algorithm)
    }

    #[test]
    fn test_round_trip_both_ciphers() {
        for algorithm in [EncryptionAlgorithm::AES256GCM, EncryptionAlgorithm::ChaCha20Poly1305] {
            let cipher = fast_cipher(algorithm);
            let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
            let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");
            assert!(!encrypted.as_str().contains("abandon"));

            let decrypted = cipher.decrypt(&encrypted, "Abc123!@").expect("decrypt");
            assert!(decrypted == mnemonic);
        }
    }

    #[test]
    fn test_pbkdf2_envelope() {
        let cipher = MnemonicCipher::new(
            PasswordConfig {
                iterations: 1_000,
                ..PasswordConfig::pbkdf2()
            },
            EncryptionAlgorithm::AES256GCM,
        );
        let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
        let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");
        // A default-configured cipher still reads it from the envelope
        let decrypted = fast_cipher(EncryptionAlgorithm::ChaCha20Poly1305)
            .decrypt(&encrypted, "Abc123!@")
            .expect("decrypt");
        assert!(decrypted == mnemonic);
    }

    #[test]
    fn test_custom_kdf_params_round_trip() {
        let password = PasswordConfig {
            iterations: 3,
            memory_cost: 128,
            parallelism: 2,
            ..PasswordConfig::insecure_fast()
        };
        let cipher = MnemonicCipher::new(password.clone(), EncryptionAlgorithm::AES256GCM);
        let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
        let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");

        let envelope = Envelope::decode(&encrypted).expect("envelope parses");
        assert_eq!(envelope.salt.len(), SALT_SIZE);
        assert_eq!(envelope.password, password);

        let decrypted = fast_cipher(EncryptionAlgorithm::AES256GCM)
            .decrypt(&encrypted, "Abc123!@")
            .expect("decrypt");
        assert!(decrypted == mnemonic);
    }

    #[test]
    fn test_wrong_password_fails_generically() {
        let cipher = fast_cipher(EncryptionAlgorithm::AES256GCM);
        let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
        let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");

        let err = cipher.decrypt(&encrypted, "Abc123!#").err().expect("wrong password rejected");
        assert_eq!(err, WalletError::Encryption("Failed to decrypt mnemonic".to_string()));
    }

    #[test]
    fn test_malformed_envelopes_fail_generically() {
        let cipher = fast_cipher(EncryptionAlgorithm::AES256GCM);
        let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
        let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");

        let mut bytes = base64::engine::general_purpose::STANDARD
            .decode(encrypted.as_str())
            .unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = EncryptedMnemonic::new(base64::engine::general_purpose::STANDARD.encode(&bytes));
        let truncated = EncryptedMnemonic::new(&encrypted.as_str()[..20]);

        for bad in [
            tampered,
            truncated,
            EncryptedMnemonic::new("not base64 at all!"),
            EncryptedMnemonic::new(""),
        ] {
            assert_eq!(
                cipher.decrypt(&bad, "Abc123!@").err().expect("bad envelope rejected"),
                WalletError::decryption_failed()
            );
        }
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let cipher = fast_cipher(EncryptionAlgorithm::AES256GCM);
        let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
        let encrypted = cipher.encrypt(&mnemonic, "Abc123!@").expect("encrypt");

        let mut bytes = base64::engine::general_purpose::STANDARD
            .decode(encrypted.as_str())
            .unwrap();
        bytes[0] = 2;
        let bumped = EncryptedMnemonic::new(base64::engine::general_purpose::STANDARD.encode(&bytes));
        assert!(cipher.decrypt(&bumped, "Abc123!@").is_err());
    }

    #[test]
    fn test_debug_hides_content() {
        let encrypted = EncryptedMnemonic::new("QUJD");
        assert_eq!(format!("{:?}", encrypted), "EncryptedMnemonic(4 chars)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn round_trip_any_password(password in "\\PC{0,24}") {
            let cipher = fast_cipher(EncryptionAlgorithm::AES256GCM);
            let mnemonic = SecureSeedPhrase::new(MNEMONIC.to_string());
            let encrypted = cipher.encrypt(&mnemonic, &password).unwrap();
            let decrypted = cipher.decrypt(&encrypted, &password).unwrap();
            prop_assert!(decrypted == mnemonic);
        }
    }
}
