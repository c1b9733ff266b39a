//! Wallet session
//!
//! A [`WalletSession`] owns the derived wallet, the Tron client handle and
//! the in-memory history. All balance, history and transfer operations go
//! through it.

use std::sync::Arc;

use crate::core::balance::{BalanceReader, BalanceState, TokenBalance, TransactionState};
use crate::core::rpc::TronRpc;
use crate::core::transactions::{TransactionManager, TransferReceipt, TransferRequest};
use crate::domain::entities::{TokenInfo, Transaction, WalletInfo};
use crate::domain::repositories::{InMemoryTransactionRepository, TransactionRepository};
use crate::shared::config::{TokenSettings, WalletConfig};
use crate::shared::constants::messages;
use crate::shared::error::WalletError;
use crate::shared::types::Network;
use crate::shared::WalletResult;

pub struct WalletSession {
    wallet: WalletInfo,
    network: Network,
    token: Option<TokenSettings>,
    reader: BalanceReader,
    transactions: TransactionManager,
    history: Box<dyn TransactionRepository>,
    balance_state: BalanceState,
    history_error: Option<String>,
}

impl WalletSession {
    pub fn new(wallet: WalletInfo, client: Arc<dyn TronRpc>, config: &WalletConfig) -> Self {
        log::info!("Wallet session opened for {} on {}", wallet.address(), config.network);
        Self {
            reader: BalanceReader::new(client.clone(), config.history_limit),
            transactions: TransactionManager::new(client, config.network),
            wallet,
            network: config.network,
            token: config.token.clone(),
            history: Box::new(InMemoryTransactionRepository::new()),
            balance_state: BalanceState::default(),
            history_error: None,
        }
    }

    pub fn wallet(&self) -> &WalletInfo {
        &self.wallet
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn token(&self) -> Option<&TokenSettings> {
        self.token.as_ref()
    }

    /// Explorer page of this wallet's address
    pub fn explorer_url(&self) -> String {
        self.network.address_url(&self.wallet.address_base58())
    }

    pub fn faucet_url(&self) -> Option<&'static str> {
        self.network.faucet_url()
    }

    pub fn balance_state(&self) -> &BalanceState {
        &self.balance_state
    }

    pub fn transaction_state(&self) -> TransactionState {
        TransactionState {
            is_loading: false,
            error: self.history_error.clone(),
            transactions: self.history.list().to_vec(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.history.list()
    }

    /// Fetch the TRX balance and, if a token is configured, its balance.
    ///
    /// A failed TRX query sets the state error. A failed token query only
    /// marks the token as unavailable.
    pub async fn refresh_balances(&mut self) -> &BalanceState {
        let address = *self.wallet.address();
        let mut state = BalanceState::loading();

        match self.reader.get_native_balance(&address).await {
            Ok(native) => state.native = Some(native),
            Err(e) => {
                log::error!("Native balance query failed: {}", e);
                state.error = Some(messages::BALANCE_FETCH_FAILED.to_string());
            }
        }

        if state.error.is_none() {
            if let Some(token) = &self.token {
                match self.reader.get_token_balance(&address, &token.contract).await {
                    Ok(amount) => {
                        state.token = Some(TokenBalance {
                            token: TokenInfo::trc20(&token.contract, token.symbol.clone(), amount.decimals()),
                            amount,
                        })
                    }
                    Err(e) => log::warn!("{} balance unavailable: {}", token.symbol, e),
                }
            }
        }

        state.is_loading = false;
        self.balance_state = state;
        &self.balance_state
    }

    /// Reload history. On failure the previous list is kept and the error
    /// recorded so the user can retry.
    pub async fn refresh_history(&mut self) -> TransactionState {
        match self.reader.get_transaction_history(self.wallet.address()).await {
            Ok(transactions) => {
                self.history.replace_all(transactions);
                self.history_error = None;
            }
            Err(e) => {
                log::error!("History query failed: {}", e);
                self.history_error = Some(messages::HISTORY_FETCH_FAILED.to_string());
            }
        }
        self.transaction_state()
    }

    /// Submit a transfer. Only a successful broadcast adds a history entry.
    pub async fn transfer(&mut self, request: &TransferRequest) -> WalletResult<TransferReceipt> {
        let receipt = self.transactions.transfer(&self.wallet, request).await?;
        self.history.prepend(receipt.record.clone());
        Ok(receipt)
    }

    pub async fn send_trx(&mut self, to: &str, amount: &str) -> WalletResult<TransferReceipt> {
        self.transfer(&TransferRequest::trx(to, amount)).await
    }

    /// Send the configured TRC20 token
    pub async fn send_token(&mut self, to: &str, amount: &str) -> WalletResult<TransferReceipt> {
        let token = self
            .token
            .clone()
            .ok_or_else(|| WalletError::config("No token contract configured for this network"))?;
        self.transfer(&TransferRequest::trc20(to, amount, token.contract, token.symbol))
            .await
    }
}
