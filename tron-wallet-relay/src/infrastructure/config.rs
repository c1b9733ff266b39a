use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::env;

use tron_wallet_core::WalletConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub log_level: String,
    /// Daily-rolling log files are written here when set
    pub log_dir: Option<String>,
    /// `*` allows any origin
    pub cors_origins: Vec<String>,
    pub wallet: WalletConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 4000,
            log_level: "info".to_string(),
            log_dir: None,
            cors_origins: vec!["*".to_string()],
            wallet: WalletConfig::default(),
        }
    }
}

impl Config {
    /// Load from `.env` and the process environment.
    ///
    /// Keys: RUST_ENV, PORT, LOG_LEVEL, LOG_DIR, CORS_ORIGINS, plus the
    /// TRON_WALLET_* keys read by the wallet core.
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_map(&values)
    }

    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            values
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| anyhow!("Invalid PORT: {}", port))?,
            None => defaults.port,
        };

        let cors_origins = match get("CORS_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let wallet = WalletConfig::from_map(values).map_err(|e| anyhow!("Invalid wallet configuration: {}", e))?;

        let config = Self {
            environment: get("RUST_ENV").unwrap_or(defaults.environment),
            port,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: get("LOG_DIR"),
            cors_origins,
            wallet,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("PORT must be non-zero"));
        }
        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(anyhow!("Invalid LOG_LEVEL: {}", self.log_level));
        }
        if self.cors_origins.is_empty() {
            return Err(anyhow!("CORS_ORIGINS cannot be empty"));
        }
        if self.environment == "production" && self.allows_any_origin() {
            tracing::warn!("CORS allows any origin in production");
        }
        Ok(())
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tron_wallet_core::Network;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_map(&HashMap::new()).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.environment, "development");
        assert!(config.allows_any_origin());
        assert!(config.log_dir.is_none());
        assert_eq!(config.wallet.network, Network::Nile);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_map(&map(&[
            ("PORT", "8080"),
            ("RUST_ENV", "production"),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/var/log/relay"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("TRON_WALLET_NETWORK", "shasta"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.is_production());
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/relay"));
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert!(!config.allows_any_origin());
        assert_eq!(config.wallet.network, Network::Shasta);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_map(&map(&[("PORT", "not-a-port")])).is_err());
        assert!(Config::from_map(&map(&[("LOG_LEVEL", "loud")])).is_err());
        assert!(Config::from_map(&map(&[("TRON_WALLET_NETWORK", "ropsten")])).is_err());
    }
}
