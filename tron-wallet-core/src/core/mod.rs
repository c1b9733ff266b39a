//! Core wallet functionality
//!
//! Cryptography, the Tron RPC seam, balances, transfers, the wallet session
//! and the setup wizard that produces it.

pub mod balance;
pub mod crypto;
pub mod rpc;
pub mod setup;
pub mod transactions;
pub mod wallet;
