//! Balances and transaction history
//!
//! [`BalanceReader`] performs the queries; [`BalanceState`] and
//! [`TransactionState`] are the view models a session exposes after each
//! refresh.

pub mod reader;

pub use reader::*;

use crate::domain::entities::{TokenInfo, Transaction};
use crate::shared::types::TokenAmount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub token: TokenInfo,
    pub amount: TokenAmount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub native: Option<TokenAmount>,
    /// `None` when no token is configured or the token query failed
    pub token: Option<TokenBalance>,
}

impl BalanceState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub transactions: Vec<Transaction>,
}
