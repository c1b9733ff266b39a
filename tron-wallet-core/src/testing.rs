//! Scripted [`TronRpc`] for tests
//!
//! Available under `cfg(test)` and the `test-utils` feature. Responses are
//! configured per address and every call is counted, so tests can assert
//! that validation failures never reach the network.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::json;

use crate::core::crypto::address::TronAddress;
use crate::core::crypto::hashing::HashManager;
use crate::core::rpc::abi;
use crate::core::rpc::*;
use crate::shared::constants::{TRC20_BALANCE_OF_SELECTOR, TRC20_DECIMALS_SELECTOR};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

#[derive(Default)]
struct MockState {
    balances: HashMap<String, u64>,
    token_decimals: HashMap<String, u8>,
    token_balances: HashMap<(String, String), u128>,
    native_history: Vec<NativeTransactionRecord>,
    trc20_history: Vec<Trc20TransferRecord>,
    fail_account: bool,
    fail_token: bool,
    fail_history: bool,
    fail_build: bool,
    corrupt_tx_id: bool,
    broadcast_failure: Option<BroadcastResponse>,
    broadcasts: Vec<TronTransaction>,
    calls: HashMap<&'static str, usize>,
}

#[derive(Default)]
pub struct MockTronRpc {
    state: Mutex<MockState>,
}

impl MockTronRpc {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test must not poison every other assertion
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_call(&self, method: &'static str) {
        *self.state().calls.entry(method).or_insert(0) += 1;
    }

    pub fn set_balance(&self, address: &TronAddress, sun: u64) {
        self.state().balances.insert(address.to_base58(), sun);
    }

    pub fn set_token(&self, contract: &TronAddress, decimals: u8) {
        self.state().token_decimals.insert(contract.to_base58(), decimals);
    }

    pub fn set_token_balance(&self, contract: &TronAddress, owner: &TronAddress, raw: u128) {
        self.state()
            .token_balances
            .insert((contract.to_base58(), owner.to_base58()), raw);
    }

    pub fn set_native_history(&self, records: Vec<NativeTransactionRecord>) {
        self.state().native_history = records;
    }

    pub fn set_trc20_history(&self, records: Vec<Trc20TransferRecord>) {
        self.state().trc20_history = records;
    }

    pub fn fail_account(&self, fail: bool) {
        self.state().fail_account = fail;
    }

    pub fn fail_token(&self, fail: bool) {
        self.state().fail_token = fail;
    }

    pub fn fail_history(&self, fail: bool) {
        self.state().fail_history = fail;
    }

    pub fn fail_build(&self, fail: bool) {
        self.state().fail_build = fail;
    }

    /// Return transactions whose id does not match their raw data
    pub fn corrupt_tx_id(&self, corrupt: bool) {
        self.state().corrupt_tx_id = corrupt;
    }

    /// Reject broadcasts with `code` and a hex-encoded `message`
    pub fn reject_broadcast(&self, code: &str, message: &str) {
        self.state().broadcast_failure = Some(BroadcastResponse {
            result: false,
            txid: None,
            code: Some(code.to_string()),
            message: Some(hex::encode(message)),
        });
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state().calls.get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.state().calls.values().sum()
    }

    /// Transactions received by `broadcast_transaction`
    pub fn broadcasts(&self) -> Vec<TronTransaction> {
        self.state().broadcasts.clone()
    }

    fn build_transaction(&self, raw_data: serde_json::Value) -> WalletResult<TronTransaction> {
        let state = self.state();
        if state.fail_build {
            return Err(WalletError::rpc("contract validate error"));
        }
        let raw_bytes = serde_json::to_vec(&raw_data)?;
        let mut tx_id = hex::encode(HashManager::transaction_id(&raw_bytes));
        if state.corrupt_tx_id {
            tx_id = hex::encode(HashManager::sha256(b"something else"));
        }
        Ok(TronTransaction {
            tx_id,
            raw_data,
            raw_data_hex: hex::encode(raw_bytes),
            visible: true,
            signature: Vec::new(),
        })
    }
}

#[async_trait]
impl TronRpc for MockTronRpc {
    async fn get_account(&self, address: &TronAddress) -> WalletResult<AccountResponse> {
        self.record_call("get_account");
        let state = self.state();
        if state.fail_account {
            return Err(WalletError::network("connection refused"));
        }
        Ok(AccountResponse {
            address: Some(address.to_base58()),
            balance: state.balances.get(&address.to_base58()).copied().unwrap_or(0),
        })
    }

    async fn create_transaction(
        &self,
        owner: &TronAddress,
        to: &TronAddress,
        amount_sun: u64,
    ) -> WalletResult<TronTransaction> {
        self.record_call("create_transaction");
        self.build_transaction(json!({
            "contract": [{
                "type": "TransferContract",
                "parameter": {"value": {
                    "owner_address": owner.to_hex(),
                    "to_address": to.to_hex(),
                    "amount": amount_sun,
                }},
            }],
        }))
    }

    async fn trigger_smart_contract(&self, call: &ContractCall) -> WalletResult<TronTransaction> {
        self.record_call("trigger_smart_contract");
        self.build_transaction(json!({
            "contract": [{
                "type": "TriggerSmartContract",
                "parameter": {"value": {
                    "owner_address": call.owner_address.to_hex(),
                    "contract_address": call.contract_address.to_hex(),
                    "data": call.parameter,
                }},
            }],
            "fee_limit": call.fee_limit,
        }))
    }

    async fn trigger_constant_contract(&self, call: &ContractCall) -> WalletResult<Vec<u8>> {
        self.record_call("trigger_constant_contract");
        let state = self.state();
        if state.fail_token {
            return Err(WalletError::rpc("REVERT opcode executed"));
        }
        let contract = call.contract_address.to_base58();
        let decimals = state
            .token_decimals
            .get(&contract)
            .copied()
            .ok_or_else(|| WalletError::rpc("contract not found"))?;

        let word = match call.function_selector.as_str() {
            TRC20_DECIMALS_SELECTOR => abi::encode_uint256(decimals as u128),
            TRC20_BALANCE_OF_SELECTOR => {
                let id = call
                    .parameter
                    .get(24..64)
                    .ok_or_else(|| WalletError::rpc("bad balanceOf argument"))?;
                let owner = TronAddress::from_hex(&format!("41{}", id))?;
                let raw = state
                    .token_balances
                    .get(&(contract, owner.to_base58()))
                    .copied()
                    .unwrap_or(0);
                abi::encode_uint256(raw)
            }
            other => return Err(WalletError::rpc(format!("unexpected selector {}", other))),
        };
        Ok(hex::decode(word)?)
    }

    async fn broadcast_transaction(&self, transaction: &TronTransaction) -> WalletResult<BroadcastResponse> {
        self.record_call("broadcast_transaction");
        let mut state = self.state();
        if let Some(failure) = state.broadcast_failure.clone() {
            return Ok(failure);
        }
        state.broadcasts.push(transaction.clone());
        Ok(BroadcastResponse {
            result: true,
            txid: Some(transaction.tx_id.clone()),
            code: None,
            message: None,
        })
    }

    async fn get_account_transactions(
        &self,
        _address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<NativeTransactionRecord>> {
        self.record_call("get_account_transactions");
        let state = self.state();
        if state.fail_history {
            return Err(WalletError::network("timed out"));
        }
        Ok(state.native_history.iter().take(limit).cloned().collect())
    }

    async fn get_trc20_transfers(
        &self,
        _address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<Trc20TransferRecord>> {
        self.record_call("get_trc20_transfers");
        let state = self.state();
        if state.fail_history {
            return Err(WalletError::network("timed out"));
        }
        Ok(state.trc20_history.iter().take(limit).cloned().collect())
    }
}

/// A successful native `TransferContract` entry as TronGrid returns it
pub fn native_record(tx_id: &str, owner: &TronAddress, to: &TronAddress, sun: u64, timestamp: i64) -> NativeTransactionRecord {
    serde_json::from_value(json!({
        "txID": tx_id,
        "block_timestamp": timestamp,
        "raw_data": {
            "contract": [{
                "type": "TransferContract",
                "parameter": {"value": {
                    "amount": sun,
                    "owner_address": owner.to_hex(),
                    "to_address": to.to_hex(),
                }},
            }],
            "timestamp": timestamp,
        },
        "ret": [{"contractRet": "SUCCESS"}],
    }))
    .expect("static record shape")
}

/// A TRC20 transfer entry as TronGrid returns it
pub fn trc20_record(
    tx_id: &str,
    from: &TronAddress,
    to: &TronAddress,
    value: u128,
    symbol: &str,
    decimals: u8,
    timestamp: i64,
) -> Trc20TransferRecord {
    serde_json::from_value(json!({
        "transaction_id": tx_id,
        "block_timestamp": timestamp,
        "from": from.to_base58(),
        "to": to.to_base58(),
        "value": value.to_string(),
        "type": "Transfer",
        "token_info": {"symbol": symbol, "decimals": decimals, "name": symbol},
    }))
    .expect("static record shape")
}
