//! Tron node access
//!
//! [`TronRpc`] is the seam between wallet logic and the network. The
//! production implementation is `infrastructure::tron_grid::TronGridClient`;
//! tests use `testing::MockTronRpc`.

pub mod abi;
pub mod types;

pub use types::*;

use async_trait::async_trait;

use crate::core::crypto::address::TronAddress;
use crate::shared::WalletResult;

#[async_trait]
pub trait TronRpc: Send + Sync {
    /// `/wallet/getaccount`
    async fn get_account(&self, address: &TronAddress) -> WalletResult<AccountResponse>;

    /// Build an unsigned TRX transfer (`/wallet/createtransaction`)
    async fn create_transaction(
        &self,
        owner: &TronAddress,
        to: &TronAddress,
        amount_sun: u64,
    ) -> WalletResult<TronTransaction>;

    /// Build an unsigned contract call (`/wallet/triggersmartcontract`)
    async fn trigger_smart_contract(&self, call: &ContractCall) -> WalletResult<TronTransaction>;

    /// Run a read-only call and return the first result word
    /// (`/wallet/triggerconstantcontract`)
    async fn trigger_constant_contract(&self, call: &ContractCall) -> WalletResult<Vec<u8>>;

    async fn broadcast_transaction(&self, transaction: &TronTransaction) -> WalletResult<BroadcastResponse>;

    /// Native transactions touching `address`, newest first
    async fn get_account_transactions(
        &self,
        address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<NativeTransactionRecord>>;

    /// TRC20 transfers touching `address`, newest first
    async fn get_trc20_transfers(
        &self,
        address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<Trc20TransferRecord>>;
}
