use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::utils::format_amount;

// Basic types for wallet operations
pub type TransactionId = String;
pub type Timestamp = i64; // milliseconds since epoch

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

// Network types - Nile testnet, Shasta testnet, Mainnet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Nile,
    Shasta,
    Mainnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Nile => "Nile Testnet",
            Network::Shasta => "Shasta Testnet",
            Network::Mainnet => "Tron Mainnet",
        }
    }

    pub fn full_host(&self) -> &'static str {
        match self {
            Network::Nile => NILE_FULL_HOST,
            Network::Shasta => SHASTA_FULL_HOST,
            Network::Mainnet => MAINNET_FULL_HOST,
        }
    }

    pub fn block_explorer(&self) -> &'static str {
        match self {
            Network::Nile => NILE_EXPLORER,
            Network::Shasta => SHASTA_EXPLORER,
            Network::Mainnet => MAINNET_EXPLORER,
        }
    }

    pub fn faucet_url(&self) -> Option<&'static str> {
        match self {
            Network::Nile => Some(NILE_FAUCET),
            Network::Shasta => Some(SHASTA_FAUCET),
            Network::Mainnet => None,
        }
    }

    /// The USDT-style token the wallet shows by default on this network
    pub fn default_token_contract(&self) -> Option<&'static str> {
        match self {
            Network::Nile => Some(NILE_USDT_CONTRACT),
            Network::Shasta => None,
            Network::Mainnet => Some(MAINNET_USDT_CONTRACT),
        }
    }

    pub fn is_testnet(&self) -> bool {
        !matches!(self, Network::Mainnet)
    }

    pub fn address_url(&self, address: &str) -> String {
        format!("{}/#/address/{}", self.block_explorer(), address)
    }

    pub fn transaction_url(&self, tx_id: &str) -> String {
        format!("{}/#/transaction/{}", self.block_explorer(), tx_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Network::Nile => "nile",
            Network::Shasta => "shasta",
            Network::Mainnet => "mainnet",
        };
        f.write_str(id)
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nile" => Ok(Network::Nile),
            "shasta" => Ok(Network::Shasta),
            "mainnet" | "main" => Ok(Network::Mainnet),
            other => Err(WalletError::config(format!("Unsupported network: {}", other))),
        }
    }
}

/// A non-negative decimal as typed by the user, not yet scaled to a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalAmount {
    whole: String,
    fraction: String,
}

impl DecimalAmount {
    pub(crate) fn new(whole: &str, fraction: &str) -> Self {
        Self {
            whole: whole.to_string(),
            fraction: fraction.to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.whole.chars().chain(self.fraction.chars()).all(|c| c == '0')
    }

    /// Scale to smallest units. Fails when the value has more fraction
    /// digits than the token supports or does not fit in `u128`.
    pub fn to_raw(&self, decimals: u8) -> WalletResult<u128> {
        if self.fraction.len() > decimals as usize {
            return Err(WalletError::validation(messages::TOO_MANY_DECIMALS));
        }
        let invalid = || WalletError::validation(messages::INVALID_AMOUNT);

        let scale = 10u128.checked_pow(decimals as u32).ok_or_else(invalid)?;
        let whole: u128 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().map_err(|_| invalid())?
        };
        let fraction: u128 = if self.fraction.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", self.fraction, width = decimals as usize);
            padded.parse().map_err(|_| invalid())?
        };

        whole
            .checked_mul(scale)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = if self.whole.is_empty() { "0" } else { &self.whole };
        if self.fraction.is_empty() {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.{}", whole, self.fraction)
        }
    }
}

/// Fixed-point token amount: `raw / 10^decimals`. No floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenAmount {
    raw: u128,
    decimals: u8,
}

impl TokenAmount {
    pub const fn new(raw: u128, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub const fn zero(decimals: u8) -> Self {
        Self::new(0, decimals)
    }

    /// TRX amount from sun
    pub const fn from_sun(sun: u64) -> Self {
        Self::new(sun as u128, TRX_DECIMALS)
    }

    /// Parse a display-unit string such as `"1.5"`
    pub fn parse(amount: &str, decimals: u8) -> WalletResult<Self> {
        Ok(Self::new(crate::shared::utils::parse_amount(amount, decimals)?, decimals))
    }

    pub fn raw(&self) -> u128 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// True when `self` can pay for `other`. Amounts with different
    /// precision are compared after rescaling.
    pub fn covers(&self, other: &TokenAmount) -> bool {
        if self.decimals == other.decimals {
            return self.raw >= other.raw;
        }
        let target = self.decimals.max(other.decimals);
        match (self.rescaled_raw(target), other.rescaled_raw(target)) {
            (Some(mine), Some(theirs)) => mine >= theirs,
            // Only the larger side can overflow when scaled up
            (None, _) => true,
            (_, None) => false,
        }
    }

    fn rescaled_raw(&self, decimals: u8) -> Option<u128> {
        let factor = 10u128.checked_pow((decimals - self.decimals) as u32)?;
        self.raw.checked_mul(factor)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.raw, self.decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert_eq!("nile".parse::<Network>().expect("nile"), Network::Nile);
        assert_eq!("SHASTA".parse::<Network>().expect("shasta"), Network::Shasta);
        assert_eq!("mainnet".parse::<Network>().expect("mainnet"), Network::Mainnet);
        assert!("ropsten".parse::<Network>().is_err());
        assert_eq!(Network::default(), Network::Nile);
    }

    #[test]
    fn test_explorer_urls() {
        let network = Network::Nile;
        assert_eq!(
            network.transaction_url("abc123"),
            "https://nile.tronscan.org/#/transaction/abc123"
        );
        assert_eq!(
            network.address_url("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
            "https://nile.tronscan.org/#/address/TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"
        );
        assert!(Network::Mainnet.faucet_url().is_none());
    }

    #[test]
    fn test_token_amount_display() {
        assert_eq!(TokenAmount::new(1_000_000, 6).to_string(), "1.000000");
        assert_eq!(TokenAmount::from_sun(2_500_000).to_string(), "2.500000");
        assert_eq!(TokenAmount::zero(18).to_string(), "0.000000000000000000");
    }

    #[test]
    fn test_token_amount_covers() {
        let balance = TokenAmount::new(5_000_000, 6);
        assert!(balance.covers(&TokenAmount::new(5_000_000, 6)));
        assert!(!balance.covers(&TokenAmount::new(5_000_001, 6)));
        assert!(balance.covers(&TokenAmount::new(49, 1)));
        assert!(!balance.covers(&TokenAmount::new(6, 0)));
    }

    #[test]
    fn test_decimal_amount_display() {
        let amount = crate::shared::utils::parse_decimal("007.500").expect("valid");
        assert_eq!(amount.to_string(), "7.5");
        assert_eq!(crate::shared::utils::parse_decimal(".5").expect("valid").to_string(), "0.5");
    }
}
