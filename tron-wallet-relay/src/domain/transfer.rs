//! Request and response bodies of `POST /api/transfer`

use serde::{Deserialize, Serialize};
use tron_wallet_core::TronAddress;

/// Raw request body. Every field is optional so that a missing parameter
/// yields the API's own 400 rather than a deserializer error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody {
    pub from_private_key: Option<String>,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub amount: Option<AmountValue>,
    pub token_contract_address: Option<String>,
    pub simulate: Option<bool>,
}

/// `amount` may be sent as a JSON number or a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(serde_json::Number),
    Text(String),
}

impl AmountValue {
    /// An empty string or a numeric zero counts as no amount at all
    pub fn is_blank(&self) -> bool {
        match self {
            AmountValue::Number(n) => n.as_f64() == Some(0.0),
            AmountValue::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn as_decimal_string(&self) -> String {
        match self {
            AmountValue::Number(n) => n.to_string(),
            AmountValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// Validated transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub from_private_key: Option<String>,
    pub from_address: Option<String>,
    pub to_address: String,
    /// Display units
    pub amount: String,
    /// `None` sends TRX
    pub token_contract: Option<TronAddress>,
    pub simulate: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedTransfer {
    pub success: bool,
    pub from_address: String,
    pub to_address: String,
    pub amount: String,
    pub token_symbol: String,
    pub transaction_id: String,
    /// RFC 3339
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedTransfer {
    pub success: bool,
    pub transaction_id: String,
    pub explorer_url: String,
}
