//! Transfer processing
//!
//! A transfer runs validate → build → check id → sign → broadcast. Each
//! stage aborts the transfer on failure; nothing is retried. Address and
//! amount syntax checks run before any network call.

use std::sync::Arc;

use crate::core::balance::BalanceReader;
use crate::core::crypto::address::TronAddress;
use crate::core::crypto::hashing::HashManager;
use crate::core::crypto::signatures::SignatureManager;
use crate::core::rpc::{abi, ContractCall, TronRpc, TronTransaction};
use crate::domain::entities::{Transaction, WalletInfo};
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::{DecimalAmount, Network, TokenAmount, TransactionId};
use crate::shared::utils::{current_timestamp_millis, parse_decimal};
use crate::shared::WalletResult;

/// What is being sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Trx,
    Trc20 { contract: TronAddress, symbol: String },
}

impl TokenKind {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Trx => TRX_SYMBOL,
            Self::Trc20 { symbol, .. } => symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient in base58 or hex
    pub to: String,
    /// Display units, e.g. `"1.5"`
    pub amount: String,
    pub token: TokenKind,
}

impl TransferRequest {
    pub fn trx(to: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            amount: amount.into(),
            token: TokenKind::Trx,
        }
    }

    pub fn trc20(to: impl Into<String>, amount: impl Into<String>, contract: TronAddress, symbol: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            amount: amount.into(),
            token: TokenKind::Trc20 {
                contract,
                symbol: symbol.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_id: TransactionId,
    pub explorer_url: String,
    /// Unconfirmed local record of the transfer
    pub record: Transaction,
}

/// Transaction manager for building, signing and broadcasting transfers
pub struct TransactionManager {
    client: Arc<dyn TronRpc>,
    reader: BalanceReader,
    signature_manager: SignatureManager,
    network: Network,
}

impl TransactionManager {
    pub fn new(client: Arc<dyn TronRpc>, network: Network) -> Self {
        Self {
            // Balance checks only; history goes through the session's reader
            reader: BalanceReader::new(client.clone(), 0),
            client,
            signature_manager: SignatureManager::new(),
            network,
        }
    }

    /// Checks that need no network access: recipient present, not self,
    /// well-formed, and a positive decimal amount.
    pub fn validate_request(wallet: &WalletInfo, request: &TransferRequest) -> WalletResult<(TronAddress, DecimalAmount)> {
        let to = request.to.trim();
        if to.is_empty() {
            return Err(WalletError::validation(messages::EMPTY_RECIPIENT));
        }
        if wallet.owns(to) {
            return Err(WalletError::validation(messages::SEND_TO_SELF));
        }
        let recipient: TronAddress = to
            .parse()
            .map_err(|_| WalletError::validation(messages::INVALID_ADDRESS))?;

        let amount = parse_decimal(&request.amount)?;
        if amount.is_zero() {
            return Err(WalletError::validation(messages::AMOUNT_NOT_POSITIVE));
        }
        Ok((recipient, amount))
    }

    pub async fn transfer(&self, wallet: &WalletInfo, request: &TransferRequest) -> WalletResult<TransferReceipt> {
        let (recipient, amount) = Self::validate_request(wallet, request)?;
        let owner = *wallet.address();

        let (value, unsigned) = match &request.token {
            TokenKind::Trx => {
                let value = TokenAmount::new(amount.to_raw(TRX_DECIMALS)?, TRX_DECIMALS);
                let sun = u64::try_from(value.raw())
                    .ok()
                    .filter(|sun| *sun <= i64::MAX as u64)
                    .ok_or_else(|| WalletError::validation(messages::INVALID_AMOUNT))?;

                let balance = self.reader.get_native_balance(&owner).await?;
                Self::ensure_covers(&balance, &value, TRX_SYMBOL)?;

                (value, self.client.create_transaction(&owner, &recipient, sun).await?)
            }
            TokenKind::Trc20 { contract, symbol } => {
                let balance = self.reader.get_token_balance(&owner, contract).await?;
                let value = TokenAmount::new(amount.to_raw(balance.decimals())?, balance.decimals());
                Self::ensure_covers(&balance, &value, symbol)?;

                let call = ContractCall {
                    owner_address: owner,
                    contract_address: *contract,
                    function_selector: TRC20_TRANSFER_SELECTOR.to_string(),
                    parameter: abi::encode_transfer_params(&recipient, value.raw()),
                    fee_limit: Some(TRC20_FEE_LIMIT_SUN),
                    call_value: 0,
                };
                (value, self.client.trigger_smart_contract(&call).await?)
            }
        };

        Self::check_transaction_id(&unsigned)?;
        let signed = self.sign(unsigned, wallet)?;
        let tx_id = self.broadcast(&signed).await?;

        log::info!(
            "Broadcast {} {} from {} to {}: {}",
            value,
            request.token.symbol(),
            owner,
            recipient,
            tx_id
        );

        Ok(TransferReceipt {
            explorer_url: self.network.transaction_url(&tx_id),
            record: Transaction {
                tx_id: tx_id.clone(),
                timestamp: current_timestamp_millis(),
                owner_address: owner.to_base58(),
                to_address: recipient.to_base58(),
                amount: value,
                token_type: request.token.symbol().to_string(),
                confirmed: false,
            },
            tx_id,
        })
    }

    fn ensure_covers(balance: &TokenAmount, value: &TokenAmount, symbol: &str) -> WalletResult<()> {
        if balance.covers(value) {
            return Ok(());
        }
        Err(WalletError::validation(format!(
            "Insufficient {symbol} balance. Available: {balance} {symbol}"
        )))
    }

    /// The node computes `txID` itself; refuse to sign one that does not
    /// hash the raw data we were handed.
    pub fn check_transaction_id(transaction: &TronTransaction) -> WalletResult<()> {
        let raw = hex::decode(&transaction.raw_data_hex)
            .map_err(|_| WalletError::transaction("Node returned malformed raw transaction data"))?;
        let expected = hex::encode(HashManager::transaction_id(&raw));
        if !expected.eq_ignore_ascii_case(&transaction.tx_id) {
            log::error!("Transaction id mismatch: node {} computed {}", transaction.tx_id, expected);
            return Err(WalletError::transaction("Transaction id does not match its raw data"));
        }
        Ok(())
    }

    fn sign(&self, mut transaction: TronTransaction, wallet: &WalletInfo) -> WalletResult<TronTransaction> {
        let signature = self
            .signature_manager
            .sign_transaction_id(&transaction.tx_id, wallet.private_key())?;
        transaction.signature = vec![signature.to_hex()];
        Ok(transaction)
    }

    async fn broadcast(&self, transaction: &TronTransaction) -> WalletResult<TransactionId> {
        let response = self.client.broadcast_transaction(transaction).await?;
        if !response.result {
            let reason = response.decoded_message();
            log::warn!("Broadcast of {} rejected: {}", transaction.tx_id, reason);
            return Err(WalletError::transaction(format!("{}: {}", messages::BROADCAST_FAILED, reason)));
        }
        Ok(response.txid.unwrap_or_else(|| transaction.tx_id.clone()))
    }
}
