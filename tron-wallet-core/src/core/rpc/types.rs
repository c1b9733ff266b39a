//! Wire types for the Tron full-node HTTP API and the TronGrid v1 index

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::crypto::address::TronAddress;

/// Unsigned or signed transaction as the node returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TronTransaction {
    #[serde(rename = "txID")]
    pub tx_id: String,
    pub raw_data: Value,
    pub raw_data_hex: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signature: Vec<String>,
}

/// `/wallet/getaccount`. Unactivated accounts come back as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub address: Option<String>,
    /// Sun. Absent when the balance is zero.
    #[serde(default)]
    pub balance: u64,
}

/// A smart-contract call, either state-changing or constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub owner_address: TronAddress,
    pub contract_address: TronAddress,
    pub function_selector: String,
    /// ABI-encoded arguments as hex, without `0x`
    pub parameter: String,
    pub fee_limit: Option<u64>,
    pub call_value: u64,
}

impl ContractCall {
    pub fn to_request(&self) -> Value {
        let mut body = serde_json::json!({
            "owner_address": self.owner_address.to_base58(),
            "contract_address": self.contract_address.to_base58(),
            "function_selector": self.function_selector,
            "parameter": self.parameter,
            "call_value": self.call_value,
            "visible": true,
        });
        if let Some(fee_limit) = self.fee_limit {
            body["fee_limit"] = Value::from(fee_limit);
        }
        body
    }
}

/// `result` object of trigger calls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerResult {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerSmartContractResponse {
    #[serde(default)]
    pub result: TriggerResult,
    #[serde(default)]
    pub transaction: Option<TronTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerConstantContractResponse {
    #[serde(default)]
    pub result: TriggerResult,
    #[serde(default)]
    pub constant_result: Vec<String>,
}

/// `/wallet/broadcasttransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    /// Usually hex-encoded UTF-8
    #[serde(default)]
    pub message: Option<String>,
}

impl BroadcastResponse {
    /// Human-readable node message, decoding hex when possible
    pub fn decoded_message(&self) -> String {
        let decoded = self.message.as_deref().map(decode_node_message);
        match (decoded, &self.code) {
            (Some(message), _) if !message.is_empty() => message,
            (_, Some(code)) => code.clone(),
            _ => "unknown error".to_string(),
        }
    }
}

/// Nodes hex-encode most error messages; fall back to the raw text
pub fn decode_node_message(message: &str) -> String {
    hex::decode(message)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| message.to_string())
}

/// Envelope of every TronGrid v1 list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct V1Page<T> {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn default_true() -> bool {
    true
}

/// Entry of `/v1/accounts/{address}/transactions`
#[derive(Debug, Clone, Deserialize)]
pub struct NativeTransactionRecord {
    #[serde(rename = "txID")]
    pub tx_id: String,
    #[serde(default)]
    pub block_timestamp: i64,
    #[serde(default)]
    pub raw_data: NativeRawData,
    #[serde(default)]
    pub ret: Vec<ContractResult>,
}

impl NativeTransactionRecord {
    pub fn first_contract(&self) -> Option<&ContractEntry> {
        self.raw_data.contract.first()
    }

    pub fn is_success(&self) -> bool {
        self.ret
            .first()
            .and_then(|r| r.contract_ret.as_deref())
            .map(|r| r == crate::shared::constants::CONTRACT_RET_SUCCESS)
            .unwrap_or(false)
    }

    /// Block time, or the signing time for entries still in the mempool
    pub fn timestamp(&self) -> i64 {
        if self.block_timestamp > 0 {
            self.block_timestamp
        } else {
            self.raw_data.timestamp
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NativeRawData {
    #[serde(default)]
    pub contract: Vec<ContractEntry>,
    #[serde(default)]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractEntry {
    #[serde(rename = "type")]
    pub contract_type: String,
    pub parameter: ContractParameter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractParameter {
    pub value: TransferValue,
}

/// Only the fields of `TransferContract` are read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferValue {
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub owner_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractResult {
    #[serde(rename = "contractRet", default)]
    pub contract_ret: Option<String>,
}

/// Entry of `/v1/accounts/{address}/transactions/trc20`
#[derive(Debug, Clone, Deserialize)]
pub struct Trc20TransferRecord {
    pub transaction_id: String,
    #[serde(default)]
    pub block_timestamp: i64,
    pub from: String,
    pub to: String,
    /// Raw token units as a decimal string
    pub value: String,
    pub token_info: Trc20TokenInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trc20TokenInfo {
    pub symbol: String,
    #[serde(default)]
    pub address: Option<String>,
    pub decimals: u8,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_without_data_is_empty() {
        let page: V1Page<Trc20TransferRecord> = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(page.success);
        assert!(page.data.is_empty());

        let page: V1Page<NativeTransactionRecord> = serde_json::from_value(json!({})).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_account_without_balance_is_zero() {
        let account: AccountResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(account.balance, 0);

        let account: AccountResponse =
            serde_json::from_value(json!({"address": "TUEZSdKsoDHQMeZwihtdoBiN46zxhGWYdH", "balance": 1_000_000})).unwrap();
        assert_eq!(account.balance, 1_000_000);
    }

    #[test]
    fn test_broadcast_message_decoding() {
        let failed: BroadcastResponse = serde_json::from_value(json!({
            "code": "SIGERROR",
            "message": hex::encode("validate signature error"),
        }))
        .unwrap();
        assert!(!failed.result);
        assert_eq!(failed.decoded_message(), "validate signature error");

        let plain = BroadcastResponse {
            message: Some("balance is not sufficient".to_string()),
            ..Default::default()
        };
        assert_eq!(plain.decoded_message(), "balance is not sufficient");

        let code_only = BroadcastResponse {
            code: Some("BANDWITH_ERROR".to_string()),
            ..Default::default()
        };
        assert_eq!(code_only.decoded_message(), "BANDWITH_ERROR");
    }

    #[test]
    fn test_native_record_parsing() {
        let record: NativeTransactionRecord = serde_json::from_value(json!({
            "txID": "ab".repeat(32),
            "block_timestamp": 1_700_000_000_000i64,
            "raw_data": {
                "contract": [{
                    "type": "TransferContract",
                    "parameter": {
                        "value": {
                            "amount": 2_500_000,
                            "owner_address": "41c8599111f29c1e1e061265b4af93ea1f274ad78a",
                            "to_address": "41a614f803b6fd780986a42c78ec9c7f77e6ded13c"
                        },
                        "type_url": "type.googleapis.com/protocol.TransferContract"
                    }
                }],
                "timestamp": 1_699_999_999_000i64
            },
            "ret": [{"contractRet": "SUCCESS"}]
        }))
        .unwrap();

        assert!(record.is_success());
        assert_eq!(record.timestamp(), 1_700_000_000_000);
        let contract = record.first_contract().unwrap();
        assert_eq!(contract.contract_type, "TransferContract");
        assert_eq!(contract.parameter.value.amount, Some(2_500_000));
    }

    #[test]
    fn test_contract_call_request() {
        let call = ContractCall {
            owner_address: TronAddress::from_base58("TUEZSdKsoDHQMeZwihtdoBiN46zxhGWYdH").unwrap(),
            contract_address: TronAddress::from_base58("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t").unwrap(),
            function_selector: "balanceOf(address)".to_string(),
            parameter: "00".repeat(32),
            fee_limit: None,
            call_value: 0,
        };
        let body = call.to_request();
        assert_eq!(body["visible"], true);
        assert_eq!(body["contract_address"], "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
        assert!(body.get("fee_limit").is_none());
    }
}
