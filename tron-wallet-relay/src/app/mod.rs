pub mod transfer_service;

use std::sync::Arc;

use tron_wallet_core::core::rpc::TronRpc;

use crate::infrastructure::config::Config;
use transfer_service::TransferService;

/// Shared handler state. The Tron client is created once at startup and
/// passed in explicitly.
pub struct AppState {
    pub config: Config,
    pub transfers: TransferService,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn TronRpc>) -> Self {
        Self {
            transfers: TransferService::new(client, config.wallet.clone()),
            config,
        }
    }
}
