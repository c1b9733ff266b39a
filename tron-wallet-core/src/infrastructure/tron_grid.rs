//! TronGrid HTTP client
//!
//! Implements [`TronRpc`] against a full node's `/wallet/*` endpoints and
//! the TronGrid `/v1/accounts/*` index. Every request uses `visible: true`
//! so addresses travel in base58.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::core::crypto::address::TronAddress;
use crate::core::rpc::*;
use crate::shared::config::WalletConfig;
use crate::shared::constants::{messages, API_KEY_HEADER};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

pub struct TronGridClient {
    http: Client,
    base_url: String,
}

impl TronGridClient {
    /// Build a client for `config.full_host`, sending the API key header
    /// when one is configured.
    pub fn new(config: &WalletConfig) -> WalletResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
                .map_err(|e| WalletError::config(format!("Invalid header name: {}", e)))?;
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|_| WalletError::config("TRON_PRO_API_KEY contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            log::error!("Failed to build HTTP client: {}", e);
            WalletError::network(messages::CLIENT_INIT_FAILED)
        })?;

        log::info!("Tron client ready for {} ({})", config.full_host, config.network);
        Ok(Self {
            http,
            base_url: config.full_host.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &Value) -> WalletResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::read_json(path, response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> WalletResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).query(query).send().await?;
        let value = Self::read_json(path, response).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn read_json(path: &str, response: reqwest::Response) -> WalletResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} returned {}: {}", path, status, body);
            return Err(WalletError::network(format!("{} returned HTTP {}", path, status)));
        }
        Ok(response.json::<Value>().await?)
    }

    /// The node reports failures as `{"Error": "..."}` with HTTP 200
    fn check_node_error(value: &Value) -> WalletResult<()> {
        match value.get("Error").and_then(Value::as_str) {
            Some(error) => Err(WalletError::rpc(error.to_string())),
            None => Ok(()),
        }
    }

    fn check_trigger_result(result: &TriggerResult) -> WalletResult<()> {
        if result.result {
            return Ok(());
        }
        let message = result
            .message
            .as_deref()
            .map(decode_node_message)
            .or_else(|| result.code.clone())
            .unwrap_or_else(|| "contract call failed".to_string());
        Err(WalletError::rpc(message))
    }

    /// Entries that do not match `T` are skipped. The transactions index
    /// mixes in internal transactions with a different shape.
    fn page_data<T: DeserializeOwned>(path: &str, page: V1Page<Value>) -> WalletResult<Vec<T>> {
        if !page.success {
            return Err(WalletError::rpc(format!(
                "{} failed: {}",
                path,
                page.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }
        Ok(page
            .data
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("Skipping {} entry: {}", path, e);
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl TronRpc for TronGridClient {
    async fn get_account(&self, address: &TronAddress) -> WalletResult<AccountResponse> {
        let value = self
            .post(
                "/wallet/getaccount",
                &json!({ "address": address.to_base58(), "visible": true }),
            )
            .await?;
        Self::check_node_error(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn create_transaction(
        &self,
        owner: &TronAddress,
        to: &TronAddress,
        amount_sun: u64,
    ) -> WalletResult<TronTransaction> {
        let value = self
            .post(
                "/wallet/createtransaction",
                &json!({
                    "owner_address": owner.to_base58(),
                    "to_address": to.to_base58(),
                    "amount": amount_sun,
                    "visible": true,
                }),
            )
            .await?;
        Self::check_node_error(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn trigger_smart_contract(&self, call: &ContractCall) -> WalletResult<TronTransaction> {
        let value = self.post("/wallet/triggersmartcontract", &call.to_request()).await?;
        Self::check_node_error(&value)?;
        let response: TriggerSmartContractResponse = serde_json::from_value(value)?;
        Self::check_trigger_result(&response.result)?;
        response
            .transaction
            .ok_or_else(|| WalletError::rpc("triggersmartcontract returned no transaction"))
    }

    async fn trigger_constant_contract(&self, call: &ContractCall) -> WalletResult<Vec<u8>> {
        let value = self.post("/wallet/triggerconstantcontract", &call.to_request()).await?;
        Self::check_node_error(&value)?;
        let response: TriggerConstantContractResponse = serde_json::from_value(value)?;
        Self::check_trigger_result(&response.result)?;
        let first = response
            .constant_result
            .first()
            .ok_or_else(|| WalletError::rpc("Constant call returned no result"))?;
        hex::decode(first).map_err(|e| WalletError::rpc(format!("Malformed constant result: {}", e)))
    }

    async fn broadcast_transaction(&self, transaction: &TronTransaction) -> WalletResult<BroadcastResponse> {
        let body = serde_json::to_value(transaction)?;
        let value = self.post("/wallet/broadcasttransaction", &body).await?;
        Self::check_node_error(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_account_transactions(
        &self,
        address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<NativeTransactionRecord>> {
        let path = format!("/v1/accounts/{}/transactions", address.to_base58());
        let page: V1Page<Value> = self
            .get(
                &path,
                &[
                    ("limit", limit.to_string()),
                    ("order_by", "block_timestamp,desc".to_string()),
                    ("search_internal", "false".to_string()),
                ],
            )
            .await?;
        Self::page_data(&path, page)
    }

    async fn get_trc20_transfers(
        &self,
        address: &TronAddress,
        limit: usize,
    ) -> WalletResult<Vec<Trc20TransferRecord>> {
        let path = format!("/v1/accounts/{}/transactions/trc20", address.to_base58());
        let page: V1Page<Value> = self
            .get(
                &path,
                &[
                    ("limit", limit.to_string()),
                    ("order_by", "block_timestamp,desc".to_string()),
                ],
            )
            .await?;
        Self::page_data(&path, page)
    }
}
