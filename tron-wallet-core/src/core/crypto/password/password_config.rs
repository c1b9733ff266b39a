use super::PasswordAlgorithm;
use crate::shared::constants::*;

/// Key derivation configuration.
///
/// For Argon2 `iterations` is the time cost and `memory_cost` is in KiB.
/// PBKDF2 only reads `iterations`. Salts are always `SALT_SIZE` bytes, the
/// width the mnemonic envelope stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub algorithm: PasswordAlgorithm,
    pub iterations: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2,
            iterations: ARGON2_ITERATIONS,
            memory_cost: ARGON2_MEMORY_COST_KIB,
            parallelism: ARGON2_PARALLELISM,
        }
    }
}

impl PasswordConfig {
    /// PBKDF2-HMAC-SHA256 with 600k rounds
    pub fn pbkdf2() -> Self {
        Self {
            algorithm: PasswordAlgorithm::PBKDF2,
            iterations: PBKDF2_ITERATIONS,
            memory_cost: 0,
            parallelism: 0,
        }
    }

    /// Cheap parameters so tests do not spend seconds in the KDF
    #[cfg(any(test, feature = "test-utils"))]
    pub fn insecure_fast() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2,
            iterations: 1,
            memory_cost: 64,
            parallelism: 1,
        }
    }

    /// The three parameters serialized into the envelope
    pub fn params(&self) -> [u32; 3] {
        [self.iterations, self.memory_cost, self.parallelism]
    }

    /// Rebuild a config from envelope fields
    pub fn from_params(algorithm: PasswordAlgorithm, params: [u32; 3]) -> Self {
        let [iterations, memory_cost, parallelism] = params;
        Self {
            algorithm,
            iterations,
            memory_cost,
            parallelism,
        }
    }
}
