//! Balance and history queries

use std::sync::Arc;

use crate::core::crypto::address::TronAddress;
use crate::core::rpc::abi;
use crate::core::rpc::{ContractCall, NativeTransactionRecord, Trc20TransferRecord, TronRpc};
use crate::domain::entities::Transaction;
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::TokenAmount;
use crate::shared::WalletResult;

/// Reads balances and transaction history through a [`TronRpc`]
pub struct BalanceReader {
    client: Arc<dyn TronRpc>,
    history_limit: usize,
}

impl BalanceReader {
    pub fn new(client: Arc<dyn TronRpc>, history_limit: usize) -> Self {
        Self { client, history_limit }
    }

    /// TRX balance; accounts the node has never seen hold zero
    pub async fn get_native_balance(&self, address: &TronAddress) -> WalletResult<TokenAmount> {
        let account = self.client.get_account(address).await?;
        Ok(TokenAmount::from_sun(account.balance))
    }

    /// `decimals()` of a TRC20 contract
    pub async fn get_token_decimals(&self, owner: &TronAddress, contract: &TronAddress) -> WalletResult<u8> {
        let call = constant_call(owner, contract, TRC20_DECIMALS_SELECTOR, String::new());
        let word = self.client.trigger_constant_contract(&call).await?;
        let decimals = abi::decode_uint256(&word)?;
        u8::try_from(decimals)
            .map_err(|_| WalletError::rpc(format!("Unsupported token decimals: {}", decimals)))
    }

    /// `balanceOf(owner)` scaled by the contract's own decimals
    pub async fn get_token_balance(&self, owner: &TronAddress, contract: &TronAddress) -> WalletResult<TokenAmount> {
        let decimals = self.get_token_decimals(owner, contract).await?;
        let call = constant_call(owner, contract, TRC20_BALANCE_OF_SELECTOR, abi::encode_address(owner));
        let word = self.client.trigger_constant_contract(&call).await?;
        Ok(TokenAmount::new(abi::decode_uint256(&word)?, decimals))
    }

    /// Native and TRC20 transfers merged newest first, capped at the
    /// configured page size
    pub async fn get_transaction_history(&self, address: &TronAddress) -> WalletResult<Vec<Transaction>> {
        let native = self.client.get_account_transactions(address, self.history_limit).await?;
        let tokens = self.client.get_trc20_transfers(address, self.history_limit).await?;

        let mut transactions: Vec<Transaction> = native
            .iter()
            .filter_map(native_to_transaction)
            .chain(tokens.iter().filter_map(trc20_to_transaction))
            .collect();

        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions.truncate(self.history_limit);
        log::debug!("Loaded {} history entries for {}", transactions.len(), address);
        Ok(transactions)
    }
}

fn constant_call(owner: &TronAddress, contract: &TronAddress, selector: &str, parameter: String) -> ContractCall {
    ContractCall {
        owner_address: *owner,
        contract_address: *contract,
        function_selector: selector.to_string(),
        parameter,
        fee_limit: None,
        call_value: 0,
    }
}

/// Normalize either address encoding to base58
fn to_base58(address: &str) -> Option<String> {
    address.parse::<TronAddress>().ok().map(|a| a.to_base58())
}

/// Only plain TRX transfers are shown; other contract types are skipped
fn native_to_transaction(record: &NativeTransactionRecord) -> Option<Transaction> {
    let contract = record.first_contract()?;
    if contract.contract_type != TRANSFER_CONTRACT_TYPE {
        return None;
    }
    let value = &contract.parameter.value;
    let owner = to_base58(value.owner_address.as_deref()?)?;
    let to = to_base58(value.to_address.as_deref()?)?;

    Some(Transaction {
        tx_id: record.tx_id.clone(),
        timestamp: record.timestamp(),
        owner_address: owner,
        to_address: to,
        amount: TokenAmount::from_sun(value.amount.unwrap_or(0)),
        token_type: TRX_SYMBOL.to_string(),
        confirmed: record.is_success(),
    })
}

fn trc20_to_transaction(record: &Trc20TransferRecord) -> Option<Transaction> {
    let raw = match record.value.parse::<u128>() {
        Ok(raw) => raw,
        Err(_) => {
            log::debug!("Skipping TRC20 transfer {} with value {}", record.transaction_id, record.value);
            return None;
        }
    };
    Some(Transaction {
        tx_id: record.transaction_id.clone(),
        timestamp: record.block_timestamp,
        owner_address: to_base58(&record.from)?,
        to_address: to_base58(&record.to)?,
        amount: TokenAmount::new(raw, record.token_info.decimals),
        token_type: record.token_info.symbol.clone(),
        confirmed: true,
    })
}
