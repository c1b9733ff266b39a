//! Wallet core configuration
//!
//! Values come from the environment (optionally seeded from a `.env` file)
//! with safe defaults for the Nile testnet.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::core::crypto::address::TronAddress;
use crate::core::crypto::encryption::EncryptionAlgorithm;
use crate::core::crypto::password::{PasswordAlgorithm, PasswordConfig};
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::{Network, WalletResult};

/// Token the wallet displays next to TRX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    pub contract: TronAddress,
    pub symbol: String,
}

#[derive(Debug, Clone)]
pub struct WalletConfig {
    pub network: Network,
    pub full_host: String,
    pub api_key: Option<String>,
    pub token: Option<TokenSettings>,
    pub history_limit: usize,
    pub request_timeout: Option<Duration>,
    pub password: PasswordConfig,
    pub cipher: EncryptionAlgorithm,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}

impl WalletConfig {
    /// Defaults for `network` with its public TronGrid host and default token
    pub fn for_network(network: Network) -> Self {
        let token = network.default_token_contract().and_then(|contract| {
            TronAddress::from_base58(contract).ok().map(|contract| TokenSettings {
                contract,
                symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            })
        });

        Self {
            network,
            full_host: network.full_host().to_string(),
            api_key: None,
            token,
            history_limit: DEFAULT_HISTORY_LIMIT,
            request_timeout: None,
            password: PasswordConfig::default(),
            cipher: EncryptionAlgorithm::AES256GCM,
        }
    }

    /// Load from `.env` and the process environment.
    ///
    /// Keys: TRON_WALLET_NETWORK, TRON_WALLET_FULL_HOST, TRON_PRO_API_KEY,
    ///       TRON_WALLET_TOKEN_CONTRACT, TRON_WALLET_TOKEN_SYMBOL,
    ///       TRON_WALLET_HISTORY_LIMIT, TRON_WALLET_REQUEST_TIMEOUT_SECS,
    ///       TRON_WALLET_KDF, TRON_WALLET_CIPHER
    pub fn from_env() -> WalletResult<Self> {
        dotenv::dotenv().ok(); // Load .env if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an explicit key/value map
    pub fn from_map(values: &HashMap<String, String>) -> WalletResult<Self> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> WalletResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let network = match get("TRON_WALLET_NETWORK") {
            Some(name) => name.parse()?,
            None => Network::default(),
        };
        let mut config = Self::for_network(network);

        if let Some(host) = get("TRON_WALLET_FULL_HOST") {
            config.full_host = host.trim_end_matches('/').to_string();
        }
        config.api_key = get("TRON_PRO_API_KEY");

        if let Some(contract) = get("TRON_WALLET_TOKEN_CONTRACT") {
            let contract = TronAddress::from_base58(&contract).map_err(|_| {
                WalletError::config(format!("Invalid TRON_WALLET_TOKEN_CONTRACT: {}", contract))
            })?;
            config.token = Some(TokenSettings {
                contract,
                symbol: get("TRON_WALLET_TOKEN_SYMBOL")
                    .unwrap_or_else(|| DEFAULT_TOKEN_SYMBOL.to_string()),
            });
        } else if let (Some(token), Some(symbol)) = (config.token.as_mut(), get("TRON_WALLET_TOKEN_SYMBOL")) {
            token.symbol = symbol;
        }

        if let Some(limit) = get("TRON_WALLET_HISTORY_LIMIT") {
            config.history_limit = limit
                .parse()
                .map_err(|_| WalletError::config(format!("Invalid TRON_WALLET_HISTORY_LIMIT: {}", limit)))?;
        }

        if let Some(secs) = get("TRON_WALLET_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                WalletError::config(format!("Invalid TRON_WALLET_REQUEST_TIMEOUT_SECS: {}", secs))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(kdf) = get("TRON_WALLET_KDF") {
            config.password = match kdf.parse::<PasswordAlgorithm>()? {
                PasswordAlgorithm::Argon2 => PasswordConfig::default(),
                PasswordAlgorithm::PBKDF2 => PasswordConfig::pbkdf2(),
            };
        }

        if let Some(cipher) = get("TRON_WALLET_CIPHER") {
            config.cipher = cipher.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WalletResult<()> {
        if self.full_host.is_empty() {
            return Err(WalletError::config("Full host URL is required and cannot be empty"));
        }
        if !self.full_host.starts_with("http://") && !self.full_host.starts_with("https://") {
            return Err(WalletError::config(format!(
                "Full host must be an http(s) URL: '{}'",
                self.full_host
            )));
        }
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(WalletError::config(format!(
                "History limit must be between 1 and {}",
                MAX_HISTORY_LIMIT
            )));
        }
        if let Some(token) = &self.token {
            if token.symbol.is_empty() {
                return Err(WalletError::config("Token symbol cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_target_nile() {
        let config = WalletConfig::from_map(&HashMap::new()).expect("defaults are valid");
        assert_eq!(config.network, Network::Nile);
        assert_eq!(config.full_host, "https://nile.trongrid.io");
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        let token = config.token.expect("Nile has a default token");
        assert_eq!(token.contract.to_base58(), NILE_USDT_CONTRACT);
        assert_eq!(token.symbol, "USDT");
    }

    #[test]
    fn test_overrides() {
        let config = WalletConfig::from_map(&map(&[
            ("TRON_WALLET_NETWORK", "shasta"),
            ("TRON_WALLET_FULL_HOST", "http://localhost:8090/"),
            ("TRON_PRO_API_KEY", "key-123"),
            ("TRON_WALLET_TOKEN_CONTRACT", "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
            ("TRON_WALLET_TOKEN_SYMBOL", "USDT"),
            ("TRON_WALLET_HISTORY_LIMIT", "50"),
            ("TRON_WALLET_REQUEST_TIMEOUT_SECS", "15"),
            ("TRON_WALLET_KDF", "pbkdf2"),
            ("TRON_WALLET_CIPHER", "chacha20"),
        ]))
        .expect("overrides are valid");

        assert_eq!(config.network, Network::Shasta);
        assert_eq!(config.full_host, "http://localhost:8090");
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert!(matches!(config.password.algorithm, PasswordAlgorithm::PBKDF2));
        assert!(matches!(config.cipher, EncryptionAlgorithm::ChaCha20Poly1305));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(WalletConfig::from_map(&map(&[("TRON_WALLET_NETWORK", "ropsten")])).is_err());
        assert!(WalletConfig::from_map(&map(&[("TRON_WALLET_HISTORY_LIMIT", "0")])).is_err());
        assert!(WalletConfig::from_map(&map(&[("TRON_WALLET_TOKEN_CONTRACT", "0xdead")])).is_err());
        assert!(WalletConfig::from_map(&map(&[("TRON_WALLET_FULL_HOST", "nile.trongrid.io")])).is_err());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = WalletConfig::from_map(&map(&[("TRON_PRO_API_KEY", "  ")])).expect("valid");
        assert!(config.api_key.is_none());
    }
}
