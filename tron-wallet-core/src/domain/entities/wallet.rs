//! Wallet entity
//!
//! The derived account: its address in both encodings, the private key and
//! the uncompressed public key.

use std::fmt;
use zeroize::Zeroizing;

use crate::core::crypto::address::TronAddress;
use crate::core::crypto::keys::{KeyManager, SecurePrivateKey, SecureSeedPhrase};
use crate::shared::WalletResult;

/// Derived wallet. Does not implement Clone, Serialize or Deserialize to
/// prevent key exposure; `Debug` prints only the address.
pub struct WalletInfo {
    address: TronAddress,
    private_key: SecurePrivateKey,
    public_key: String,
}

impl WalletInfo {
    /// Derive the account at `m/44'/195'/0'/0/0`
    pub fn from_mnemonic(mnemonic: &SecureSeedPhrase) -> WalletResult<Self> {
        let keys = KeyManager::new();
        let private_key = keys.derive_from_mnemonic(mnemonic)?;
        Self::from_secure_key(&keys, private_key)
    }

    /// Import a 64-hex-character key, optionally `0x`-prefixed
    pub fn from_private_key(private_key: &str) -> WalletResult<Self> {
        let keys = KeyManager::new();
        let private_key = SecurePrivateKey::from_hex(private_key)?;
        Self::from_secure_key(&keys, private_key)
    }

    /// Fresh random account, unrelated to any mnemonic
    pub fn generate() -> WalletResult<Self> {
        let keys = KeyManager::new();
        let private_key = keys.generate_keypair()?;
        Self::from_secure_key(&keys, private_key)
    }

    fn from_secure_key(keys: &KeyManager, private_key: SecurePrivateKey) -> WalletResult<Self> {
        let public_key = keys.public_key_hex(&private_key)?;
        let address = keys.address(&private_key)?;
        log::debug!("Wallet ready: {}", address);
        Ok(Self {
            address,
            private_key,
            public_key,
        })
    }

    pub fn address(&self) -> &TronAddress {
        &self.address
    }

    /// Base58check form, starting with `T`
    pub fn address_base58(&self) -> String {
        self.address.to_base58()
    }

    /// Hex form, starting with `41`
    pub fn address_hex(&self) -> String {
        self.address.to_hex()
    }

    /// Uncompressed secp256k1 public key as hex
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &SecurePrivateKey {
        &self.private_key
    }

    pub fn private_key_hex(&self) -> Zeroizing<String> {
        self.private_key.to_hex()
    }

    /// True if `address` is this wallet's address in either encoding
    pub fn owns(&self, address: &str) -> bool {
        self.address.matches(address)
    }
}

impl fmt::Debug for WalletInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletInfo")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
