use std::sync::Arc;

use chrono::Utc;
use tron_wallet_core::core::rpc::TronRpc;
use tron_wallet_core::shared::constants::{DEFAULT_TOKEN_SYMBOL, TRX_SYMBOL};
use tron_wallet_core::{
    TransactionManager, TransferRequest, TronAddress, WalletConfig, WalletError, WalletInfo,
};

use crate::domain::error::*;
use crate::domain::transfer::{SimulatedTransfer, SubmittedTransfer, TransferCommand};

/// Executes validated transfer commands against the Tron client
pub struct TransferService {
    client: Arc<dyn TronRpc>,
    config: WalletConfig,
}

impl TransferService {
    pub fn new(client: Arc<dyn TronRpc>, config: WalletConfig) -> Self {
        Self { client, config }
    }

    /// Symbol for a transfer: TRX, the configured token's symbol, or the
    /// generic default for any other contract
    pub fn token_symbol(&self, contract: Option<&TronAddress>) -> String {
        match (contract, &self.config.token) {
            (None, _) => TRX_SYMBOL.to_string(),
            (Some(contract), Some(token)) if *contract == token.contract => token.symbol.clone(),
            (Some(_), _) => DEFAULT_TOKEN_SYMBOL.to_string(),
        }
    }

    /// Echo the request back with a fake transaction id. Nothing is signed
    /// or sent.
    pub fn simulate(&self, command: &TransferCommand) -> Result<SimulatedTransfer, RelayError> {
        let from_address = match (&command.from_address, &command.from_private_key) {
            (Some(address), _) => address.clone(),
            (None, Some(key)) => WalletInfo::from_private_key(key)
                .map_err(|_| RelayError::validation(INVALID_PRIVATE_KEY))?
                .address_base58(),
            (None, None) => return Err(RelayError::validation(MISSING_PARAMETERS)),
        };

        let now = Utc::now();
        tracing::info!(to = %command.to_address, amount = %command.amount, "Simulated transfer");
        Ok(SimulatedTransfer {
            success: true,
            from_address,
            to_address: command.to_address.clone(),
            amount: command.amount.clone(),
            token_symbol: self.token_symbol(command.token_contract.as_ref()),
            transaction_id: format!("simulated_{:x}", now.timestamp_millis()),
            timestamp: now.to_rfc3339(),
        })
    }

    /// Sign and broadcast a real transfer
    pub async fn submit(&self, command: &TransferCommand) -> Result<SubmittedTransfer, RelayError> {
        let key = command
            .from_private_key
            .as_deref()
            .ok_or_else(|| RelayError::validation(PRIVATE_KEY_REQUIRED))?;
        let wallet = WalletInfo::from_private_key(key).map_err(|_| RelayError::validation(INVALID_PRIVATE_KEY))?;

        let request = match &command.token_contract {
            Some(contract) => TransferRequest::trc20(
                command.to_address.clone(),
                command.amount.clone(),
                *contract,
                self.token_symbol(Some(contract)),
            ),
            None => TransferRequest::trx(command.to_address.clone(), command.amount.clone()),
        };

        let manager = TransactionManager::new(self.client.clone(), self.config.network);
        match manager.transfer(&wallet, &request).await {
            Ok(receipt) => {
                tracing::info!(tx_id = %receipt.tx_id, from = %wallet.address(), "Transfer broadcast");
                Ok(SubmittedTransfer {
                    success: true,
                    transaction_id: receipt.tx_id,
                    explorer_url: receipt.explorer_url,
                })
            }
            Err(WalletError::Validation(message)) => Err(RelayError::Validation(message)),
            Err(e) => {
                tracing::error!(from = %wallet.address(), "Transfer failed: {}", e);
                Err(RelayError::internal(TRANSFER_FAILED))
            }
        }
    }
}
