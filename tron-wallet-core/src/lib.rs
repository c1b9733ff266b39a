//! Tron Wallet Core
//!
//! Setup and day-to-day operations for a single Tron wallet.
//!
//! ## Architecture
//!
//! - **Core**: mnemonic, verification quiz, password encryption, key
//!   derivation, balances, transfers, setup wizard
//! - **Domain**: wallet, token and transaction entities; history cache
//! - **Infrastructure**: TronGrid HTTP client
//! - **Shared**: error type, constants, network and amount types, config
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tron_wallet_core::{init_wallet_core, SetupWizard};
//!
//! # async fn run() -> Result<(), tron_wallet_core::WalletError> {
//! let core = init_wallet_core()?;
//! let mut wizard = SetupWizard::from_config(&core.config);
//!
//! wizard.generate()?;
//! let _quiz = wizard.confirm_recorded()?;
//! // ... user picks the words back in order ...
//! wizard.verify()?;
//! wizard.set_password("Abc123!@", "Abc123!@")?;
//!
//! let mut session = wizard.create_session("Abc123!@", core.client.clone(), &core.config)?;
//! session.refresh_balances().await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use crate::core::rpc::TronRpc;
use crate::infrastructure::TronGridClient;
use crate::shared::constants::messages;

pub use crate::core::balance::{BalanceState, TokenBalance, TransactionState};
pub use crate::core::crypto::address::TronAddress;
pub use crate::core::crypto::encryption::{EncryptedMnemonic, MnemonicCipher};
pub use crate::core::crypto::keys::SecureSeedPhrase;
pub use crate::core::setup::{MnemonicQuiz, SetupStep, SetupWizard};
pub use crate::core::transactions::{TokenKind, TransactionManager, TransferReceipt, TransferRequest};
pub use crate::core::wallet::WalletSession;
pub use crate::domain::{TokenInfo, Transaction, WalletInfo};
pub use crate::shared::config::{TokenSettings, WalletConfig};
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{Network, TokenAmount, WalletResult};

/// Install the `env_logger` backend for the `log` macros.
///
/// Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Resolved configuration plus the shared Tron client handle
pub struct WalletCore {
    pub config: WalletConfig,
    pub client: Arc<dyn TronRpc>,
}

impl WalletCore {
    /// Build a core for an explicit configuration
    pub fn new(config: WalletConfig) -> WalletResult<Self> {
        config.validate()?;
        let client = TronGridClient::new(&config).map_err(|e| {
            log::error!("{}: {}", messages::CLIENT_INIT_FAILED, e);
            WalletError::network(messages::CLIENT_INIT_FAILED)
        })?;
        log::info!("Tron client ready for {} at {}", config.network, config.full_host);
        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    pub fn wizard(&self) -> SetupWizard {
        SetupWizard::from_config(&self.config)
    }
}

/// Initialize the wallet core with configuration from .env or safe defaults
pub fn init_wallet_core() -> WalletResult<WalletCore> {
    WalletCore::new(WalletConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_core_initialization() {
        let core = WalletCore::new(WalletConfig::default()).expect("default config is valid");
        assert_eq!(core.config.network, Network::Nile);
        assert_eq!(core.wizard().step(), SetupStep::Generate);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = WalletConfig::default();
        config.full_host.clear();
        assert!(WalletCore::new(config).is_err());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
