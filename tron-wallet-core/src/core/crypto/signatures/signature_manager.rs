use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1};

use super::TransactionSignature;
use crate::core::crypto::keys::SecurePrivateKey;
use crate::shared::constants::HASH_SIZE;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// Digital signature manager
pub struct SignatureManager {
    secp: Secp256k1<secp256k1::All>,
}

impl Default for SignatureManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureManager {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Sign a 32-byte digest. Tron signs the transaction id directly, with
    /// no further hashing.
    pub fn sign_digest(&self, digest: &[u8; HASH_SIZE], private_key: &SecurePrivateKey) -> WalletResult<TransactionSignature> {
        private_key.with_key(|secret_key| {
            let message = Message::from_digest(*digest);
            let signature = self.secp.sign_ecdsa_recoverable(message, secret_key);
            let (recovery_id, compact) = signature.serialize_compact();

            let mut r = [0u8; 32];
            let mut s = [0u8; 32];
            r.copy_from_slice(&compact[..32]);
            s.copy_from_slice(&compact[32..]);
            Ok(TransactionSignature {
                r,
                s,
                v: i32::from(recovery_id) as u8 + 27,
            })
        })
    }

    /// Sign a hex transaction id as returned by the node
    pub fn sign_transaction_id(&self, tx_id: &str, private_key: &SecurePrivateKey) -> WalletResult<TransactionSignature> {
        self.sign_digest(&Self::digest_from_hex(tx_id)?, private_key)
    }

    /// Recover the signer's public key
    pub fn recover_public_key(&self, digest: &[u8; HASH_SIZE], signature: &TransactionSignature) -> WalletResult<PublicKey> {
        let recovery_id = RecoveryId::try_from(signature.recovery_id())
            .map_err(|e| WalletError::crypto(format!("Invalid recovery id: {}", e)))?;
        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(&signature.r);
        compact[32..].copy_from_slice(&signature.s);

        let recoverable = RecoverableSignature::from_compact(&compact, recovery_id)?;
        Ok(self.secp.recover_ecdsa(Message::from_digest(*digest), &recoverable)?)
    }

    /// True when `signature` over `digest` was made by `public_key`
    pub fn verify(&self, digest: &[u8; HASH_SIZE], signature: &TransactionSignature, public_key: &PublicKey) -> bool {
        self.recover_public_key(digest, signature)
            .map(|recovered| &recovered == public_key)
            .unwrap_or(false)
    }

    fn digest_from_hex(tx_id: &str) -> WalletResult<[u8; HASH_SIZE]> {
        let bytes = hex::decode(tx_id.trim_start_matches("0x"))?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| WalletError::crypto("Transaction id must be 32 bytes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::hashing::HashManager;
    use crate::core::crypto::keys::KeyManager;

    const KEY_HEX: &str = "b5a4cea271ff424d7c31dc12a3e43e401df7a40d7412a15750f3f0b6b5449a28";

    #[test]
    fn test_signature_recovers_signer() {
        let manager = SignatureManager::new();
        let key = SecurePrivateKey::from_hex(KEY_HEX).unwrap();
        let public_key = KeyManager::new().public_key(&key).unwrap();

        let digest = HashManager::sha256(b"raw transaction bytes");
        let signature = manager.sign_digest(&digest, &key).unwrap();
        assert!(signature.v == 27 || signature.v == 28);
        assert_eq!(manager.recover_public_key(&digest, &signature).unwrap(), public_key);
        assert!(manager.verify(&digest, &signature, &public_key));
    }

    #[test]
    fn test_signing_is_deterministic() {
        // RFC 6979 nonces
        let manager = SignatureManager::new();
        let key = SecurePrivateKey::from_hex(KEY_HEX).unwrap();
        let tx_id = hex::encode(HashManager::sha256(b"payload"));
        let first = manager.sign_transaction_id(&tx_id, &key).unwrap();
        let second = manager.sign_transaction_id(&tx_id, &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_rejects_other_digest_and_key() {
        let manager = SignatureManager::new();
        let key = SecurePrivateKey::from_hex(KEY_HEX).unwrap();
        let other = SecurePrivateKey::generate().unwrap();
        let keys = KeyManager::new();

        let digest = HashManager::sha256(b"one");
        let signature = manager.sign_digest(&digest, &key).unwrap();
        assert!(!manager.verify(&HashManager::sha256(b"two"), &signature, &keys.public_key(&key).unwrap()));
        assert!(!manager.verify(&digest, &signature, &keys.public_key(&other).unwrap()));
    }

    #[test]
    fn test_bad_transaction_id() {
        let manager = SignatureManager::new();
        let key = SecurePrivateKey::from_hex(KEY_HEX).unwrap();
        assert!(manager.sign_transaction_id("abcd", &key).is_err());
        assert!(manager.sign_transaction_id("not hex", &key).is_err());
    }
}
