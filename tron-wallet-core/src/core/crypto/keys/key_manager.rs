//! Key generation and derivation
//!
//! Keys are derived along the BIP-44 Tron path `m/44'/195'/0'/0/0`, so the
//! same mnemonic always yields the same account.

use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};
use secp256k1::{PublicKey, Secp256k1};
use std::str::FromStr;

use super::{SecurePrivateKey, SecureSeedPhrase};
use crate::core::crypto::address::TronAddress;
use crate::shared::constants::TRON_DERIVATION_PATH;
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Key manager for cryptographic key operations
pub struct KeyManager {
    secp256k1: Secp256k1<secp256k1::All>,
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyManager {
    pub fn new() -> Self {
        Self {
            secp256k1: Secp256k1::new(),
        }
    }

    /// Generate a new random private key
    pub fn generate_keypair(&self) -> WalletResult<SecurePrivateKey> {
        SecurePrivateKey::generate()
    }

    /// Derive the account key at the default Tron path
    pub fn derive_from_mnemonic(&self, seed_phrase: &SecureSeedPhrase) -> WalletResult<SecurePrivateKey> {
        self.derive_at_path(seed_phrase, TRON_DERIVATION_PATH)
    }

    /// Derive a private key at `path`. The BIP-39 passphrase is empty.
    pub fn derive_at_path(&self, seed_phrase: &SecureSeedPhrase, path: &str) -> WalletResult<SecurePrivateKey> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, seed_phrase.as_str())?;
        let seed = bip32::Seed::new(mnemonic.to_seed_normalized(""));

        // Derive the BIP32 root key
        let xprv = XPrv::new(seed.as_bytes())
            .map_err(|e| WalletError::crypto(format!("Failed to create XPrv: {}", e)))?;

        let derivation_path = DerivationPath::from_str(path)
            .map_err(|e| WalletError::crypto(format!("Invalid derivation path: {}", e)))?;

        let mut child_xprv = xprv;
        for child_number in derivation_path.into_iter() {
            child_xprv = child_xprv
                .derive_child(child_number)
                .map_err(|e| WalletError::crypto(format!("Failed to derive child XPrv: {}", e)))?;
        }

        SecurePrivateKey::from_bytes(&child_xprv.private_key().to_bytes())
    }

    pub fn public_key(&self, private_key: &SecurePrivateKey) -> WalletResult<PublicKey> {
        private_key.with_key(|secret_key| Ok(PublicKey::from_secret_key(&self.secp256k1, secret_key)))
    }

    /// Uncompressed public key (65 bytes) as hex
    pub fn public_key_hex(&self, private_key: &SecurePrivateKey) -> WalletResult<String> {
        Ok(hex::encode(self.public_key(private_key)?.serialize_uncompressed()))
    }

    pub fn address(&self, private_key: &SecurePrivateKey) -> WalletResult<TronAddress> {
        Ok(TronAddress::from_public_key(&self.public_key(private_key)?))
    }

    /// Validate a Tron address in either encoding
    pub fn validate_address(&self, address: &str) -> bool {
        TronAddress::is_valid(address)
    }
}
