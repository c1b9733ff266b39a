use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::shared::constants::HASH_SIZE;

/// Hash functions used by Tron addresses and transactions
pub struct HashManager;

impl HashManager {
    /// Hash data with SHA256
    pub fn sha256(data: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let mut digest = [0u8; HASH_SIZE];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Double SHA256, as used by base58check
    pub fn double_sha256(data: &[u8]) -> [u8; HASH_SIZE] {
        Self::sha256(&Self::sha256(data))
    }

    /// Hash data with Keccak256 (the pre-standard SHA-3 padding)
    pub fn keccak256(data: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        let mut digest = [0u8; HASH_SIZE];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Tron transaction id: SHA256 over the serialized `raw_data` bytes
    pub fn transaction_id(raw_data: &[u8]) -> [u8; HASH_SIZE] {
        Self::sha256(raw_data)
    }
}
