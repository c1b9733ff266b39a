//! Tron account addresses
//!
//! An address is `0x41 || keccak256(uncompressed_pubkey[1..])[12..]`. It is
//! shown either as base58check (starts with `T`) or as 42 hex characters
//! starting with `41`.

use secp256k1::PublicKey;
use std::fmt;
use std::str::FromStr;

use crate::core::crypto::hashing::HashManager;
use crate::shared::constants::{messages, ADDRESS_CHECKSUM_SIZE, ADDRESS_PREFIX, ADDRESS_SIZE};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TronAddress([u8; ADDRESS_SIZE]);

impl TronAddress {
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.serialize_uncompressed();
        // Skip the 0x04 tag byte
        let hash = HashManager::keccak256(&uncompressed[1..]);

        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[0] = ADDRESS_PREFIX;
        bytes[1..].copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// 21 raw bytes including the `0x41` prefix
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        if bytes.len() != ADDRESS_SIZE || bytes[0] != ADDRESS_PREFIX {
            return Err(WalletError::validation(messages::INVALID_ADDRESS));
        }
        let mut out = [0u8; ADDRESS_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn from_base58(address: &str) -> WalletResult<Self> {
        let decoded = bs58::decode(address.trim())
            .into_vec()
            .map_err(|_| WalletError::validation(messages::INVALID_ADDRESS))?;
        if decoded.len() != ADDRESS_SIZE + ADDRESS_CHECKSUM_SIZE {
            return Err(WalletError::validation(messages::INVALID_ADDRESS));
        }

        let (payload, checksum) = decoded.split_at(ADDRESS_SIZE);
        let expected = HashManager::double_sha256(payload);
        if checksum != &expected[..ADDRESS_CHECKSUM_SIZE] {
            return Err(WalletError::validation(messages::INVALID_ADDRESS));
        }
        Self::from_bytes(payload)
    }

    /// `41` followed by 40 hex characters, optionally `0x`-prefixed
    pub fn from_hex(address: &str) -> WalletResult<Self> {
        let trimmed = address.trim().trim_start_matches("0x");
        let bytes = hex::decode(trimmed).map_err(|_| WalletError::validation(messages::INVALID_ADDRESS))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_base58(&self) -> String {
        let checksum = HashManager::double_sha256(&self.0);
        let mut payload = Vec::with_capacity(ADDRESS_SIZE + ADDRESS_CHECKSUM_SIZE);
        payload.extend_from_slice(&self.0);
        payload.extend_from_slice(&checksum[..ADDRESS_CHECKSUM_SIZE]);
        bs58::encode(payload).into_string()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// The 20-byte account id without the network prefix, as ABI-encoded
    /// in TRC20 calls
    pub fn account_id(&self) -> &[u8] {
        &self.0[1..]
    }

    /// True if `address` parses in either encoding
    pub fn is_valid(address: &str) -> bool {
        address.parse::<TronAddress>().is_ok()
    }

    /// Matches either the base58 or the hex rendering, ignoring hex case
    pub fn matches(&self, address: &str) -> bool {
        let address = address.trim();
        address == self.to_base58() || address.trim_start_matches("0x").eq_ignore_ascii_case(&self.to_hex())
    }
}

impl FromStr for TronAddress {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('T') {
            Self::from_base58(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TronAddress({})", self.to_base58())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::{Secp256k1, SecretKey};

    const USDT_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
    const USDT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

    #[test]
    fn test_base58_and_hex_agree() {
        let from_base58 = TronAddress::from_base58(USDT_BASE58).expect("valid base58");
        let from_hex = TronAddress::from_hex(USDT_HEX).expect("valid hex");

        assert_eq!(from_base58, from_hex);
        assert_eq!(from_base58.to_hex(), USDT_HEX);
        assert_eq!(from_hex.to_base58(), USDT_BASE58);
    }

    #[test]
    fn test_address_from_public_key() {
        // Private key 1 maps to the generator point
        let mut key = [0u8; 32];
        key[31] = 1;
        let secp = Secp256k1::new();
        let secret = SecretKey::from_byte_array(key).expect("valid scalar");
        let public = PublicKey::from_secret_key(&secp, &secret);

        let address = TronAddress::from_public_key(&public);
        assert_eq!(address.to_base58(), "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC");
        assert_eq!(address.to_hex(), "417e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        // Last character altered
        assert!(TronAddress::from_base58("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6u").is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(!TronAddress::is_valid(""));
        assert!(!TronAddress::is_valid("not-an-address"));
        assert!(!TronAddress::is_valid("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6"));
        assert!(!TronAddress::is_valid("42a614f803b6fd780986a42c78ec9c7f77e6ded13c"));
        assert!(TronAddress::is_valid(USDT_BASE58));
        assert!(TronAddress::is_valid(USDT_HEX));
        assert!(TronAddress::is_valid(&format!("0x{}", USDT_HEX)));
    }

    #[test]
    fn test_matches_either_encoding() {
        let address: TronAddress = USDT_BASE58.parse().expect("valid");
        assert!(address.matches(USDT_BASE58));
        assert!(address.matches(&USDT_HEX.to_uppercase()));
        assert!(!address.matches("TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC"));
    }

    #[test]
    fn test_account_id_drops_prefix() {
        let address: TronAddress = USDT_HEX.parse().expect("valid");
        assert_eq!(hex::encode(address.account_id()), &USDT_HEX[2..]);
    }
}
