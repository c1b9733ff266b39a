use argon2::{Algorithm, Argon2, Params, Version};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand_core::{OsRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{PasswordAlgorithm, PasswordConfig};
use crate::shared::constants::{KEY_SIZE, SALT_SIZE};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// Derives symmetric encryption keys from user passwords
pub struct PasswordKeyDeriver {
    config: PasswordConfig,
}

impl PasswordKeyDeriver {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(PasswordConfig::default())
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Generate a secure random salt
    pub fn generate_salt(&self) -> WalletResult<Vec<u8>> {
        let mut salt = vec![0u8; SALT_SIZE];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| WalletError::crypto(format!("OS entropy source failed: {}", e)))?;
        Ok(salt)
    }

    /// Derive a 256-bit key from `password` and `salt`
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> WalletResult<Zeroizing<[u8; KEY_SIZE]>> {
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        match self.config.algorithm {
            PasswordAlgorithm::Argon2 => self.derive_argon2(password, salt, &mut key)?,
            PasswordAlgorithm::PBKDF2 => self.derive_pbkdf2(password, salt, &mut key)?,
        }
        Ok(key)
    }

    fn derive_argon2(&self, password: &str, salt: &[u8], out: &mut [u8; KEY_SIZE]) -> WalletResult<()> {
        let params = Params::new(
            self.config.memory_cost,
            self.config.iterations,
            self.config.parallelism,
            Some(KEY_SIZE),
        )?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params).hash_password_into(
            password.as_bytes(),
            salt,
            out,
        )?;
        Ok(())
    }

    fn derive_pbkdf2(&self, password: &str, salt: &[u8], out: &mut [u8; KEY_SIZE]) -> WalletResult<()> {
        if self.config.iterations == 0 {
            return Err(WalletError::crypto("PBKDF2 requires at least one iteration"));
        }
        pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, self.config.iterations, out)
            .map_err(|e| WalletError::crypto(format!("PBKDF2 error: {:?}", e)))
    }
}
