//! Token entity for the wallet core

use serde::{Deserialize, Serialize};

use crate::core::crypto::address::TronAddress;
use crate::shared::constants::{TRX_DECIMALS, TRX_SYMBOL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
    /// Base58 contract address; `None` for TRX
    pub contract: Option<String>,
}

impl TokenInfo {
    pub fn trx() -> Self {
        Self {
            symbol: TRX_SYMBOL.to_string(),
            decimals: TRX_DECIMALS,
            contract: None,
        }
    }

    pub fn trc20(contract: &TronAddress, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            contract: Some(contract.to_base58()),
        }
    }

    pub fn is_native(&self) -> bool {
        self.contract.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        let trx = TokenInfo::trx();
        assert!(trx.is_native());
        assert_eq!(trx.decimals, 6);

        let contract = TronAddress::from_base58("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t").unwrap();
        let usdt = TokenInfo::trc20(&contract, "USDT", 6);
        assert!(!usdt.is_native());
        assert_eq!(usdt.contract.as_deref(), Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"));
    }
}
