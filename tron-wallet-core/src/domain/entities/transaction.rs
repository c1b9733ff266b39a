//! Transaction history record

use serde::{Deserialize, Serialize};

use crate::core::crypto::address::TronAddress;
use crate::shared::types::{Timestamp, TokenAmount, TransactionId};

/// One transfer in the wallet's history. Records come either from a
/// successful local transfer (unconfirmed) or from the history query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub tx_id: TransactionId,
    /// Milliseconds since the epoch
    pub timestamp: Timestamp,
    pub owner_address: String,
    pub to_address: String,
    pub amount: TokenAmount,
    /// `TRX` or the token symbol
    pub token_type: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    Incoming,
    Outgoing,
    SelfTransfer,
}

impl Transaction {
    pub fn direction(&self, wallet: &TronAddress) -> TransferDirection {
        match (wallet.matches(&self.owner_address), wallet.matches(&self.to_address)) {
            (true, true) => TransferDirection::SelfTransfer,
            (true, false) => TransferDirection::Outgoing,
            _ => TransferDirection::Incoming,
        }
    }
}
