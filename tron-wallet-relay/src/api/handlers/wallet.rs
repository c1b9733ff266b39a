use actix_web::{post, HttpResponse};
use serde_json::json;
use tron_wallet_core::WalletInfo;

use crate::domain::error::{RelayError, WALLET_CREATION_FAILED};

/// Fresh random account. The private key is returned to the caller and not
/// kept.
#[post("/create-wallet")]
pub async fn create_wallet() -> Result<HttpResponse, RelayError> {
    let wallet = WalletInfo::generate().map_err(|e| {
        tracing::error!("Wallet generation failed: {}", e);
        RelayError::internal(WALLET_CREATION_FAILED)
    })?;
    tracing::info!(address = %wallet.address(), "Wallet created");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "wallet": {
            "address": wallet.address_base58(),
            "privateKey": wallet.private_key_hex().as_str(),
            "publicKey": wallet.public_key(),
        },
    })))
}
