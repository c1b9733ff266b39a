//! The slice of Solidity ABI encoding that TRC20 calls need.
//!
//! Tron addresses are encoded as their 20-byte account id, left-padded to a
//! 32-byte word, exactly like EVM addresses.

use crate::core::crypto::address::TronAddress;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

const WORD_SIZE: usize = 32;

pub fn encode_address(address: &TronAddress) -> String {
    let mut word = [0u8; WORD_SIZE];
    let id = address.account_id();
    word[WORD_SIZE - id.len()..].copy_from_slice(id);
    hex::encode(word)
}

pub fn encode_uint256(value: u128) -> String {
    let mut word = [0u8; WORD_SIZE];
    word[16..].copy_from_slice(&value.to_be_bytes());
    hex::encode(word)
}

/// Arguments of `transfer(address,uint256)`
pub fn encode_transfer_params(to: &TronAddress, amount: u128) -> String {
    format!("{}{}", encode_address(to), encode_uint256(amount))
}

/// First return word as an unsigned integer. Values above `u128::MAX` are
/// rejected rather than truncated.
pub fn decode_uint256(data: &[u8]) -> WalletResult<u128> {
    if data.len() < WORD_SIZE {
        return Err(WalletError::rpc(format!(
            "Contract returned {} bytes, expected at least {}",
            data.len(),
            WORD_SIZE
        )));
    }
    let (high, low) = data[..WORD_SIZE].split_at(16);
    if high.iter().any(|&b| b != 0) {
        return Err(WalletError::rpc("Contract returned a value larger than 128 bits"));
    }
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(low);
    Ok(u128::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_address() {
        let address = TronAddress::from_base58("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t").unwrap();
        assert_eq!(
            encode_address(&address),
            "000000000000000000000000a614f803b6fd780986a42c78ec9c7f77e6ded13c"
        );
    }

    #[test]
    fn test_encode_transfer_params() {
        let to = TronAddress::from_hex("41c8599111f29c1e1e061265b4af93ea1f274ad78a").unwrap();
        let params = encode_transfer_params(&to, 1_000_000);
        assert_eq!(params.len(), 128);
        assert!(params.starts_with("000000000000000000000000c8599111"));
        assert!(params.ends_with("00000000000f4240"));
    }

    #[test]
    fn test_decode_uint256() {
        let word = hex::decode(encode_uint256(6)).unwrap();
        assert_eq!(decode_uint256(&word).unwrap(), 6);

        let mut huge = [0u8; 32];
        huge[0] = 1;
        assert!(decode_uint256(&huge).is_err());
        assert!(decode_uint256(&[0u8; 4]).is_err());
    }
}
