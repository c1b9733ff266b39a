pub mod handlers;

use actix_web::web;

use crate::middleware::json_error_handler;
pub use handlers::*;

/// Register the relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(handlers::health::health)
        .service(
            web::scope("/api")
                .service(create_wallet)
                .service(handlers::transfer::transfer),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::infrastructure::config::Config;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tron_wallet_core::testing::MockTronRpc;
    use tron_wallet_core::{TronAddress, WalletInfo};

    const KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const KEY_ADDRESS: &str = "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC";
    const TO: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

    fn state(mock: &Arc<MockTronRpc>) -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::default(), mock.clone()))
    }

    async fn post(mock: &Arc<MockTronRpc>, uri: &str, body: Value) -> (u16, Value) {
        let app = test::init_service(App::new().app_data(state(mock)).configure(configure)).await;
        let request = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status().as_u16();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn test_health() {
        let mock = Arc::new(MockTronRpc::new());
        let app = test::init_service(App::new().app_data(state(&mock)).configure(configure)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(response.status().is_success());
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["network"], "Nile Testnet");
    }

    #[actix_web::test]
    async fn test_create_wallet() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(&mock, "/api/create-wallet", json!({})).await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);

        let wallet = &body["wallet"];
        let address = wallet["address"].as_str().unwrap();
        assert!(address.starts_with('T'));
        let restored = WalletInfo::from_private_key(wallet["privateKey"].as_str().unwrap()).unwrap();
        assert_eq!(restored.address_base58(), address);
        assert_eq!(restored.public_key(), wallet["publicKey"].as_str().unwrap());
    }

    #[actix_web::test]
    async fn test_missing_parameters() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(&mock, "/api/transfer", json!({"toAddress": TO, "amount": "1"})).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({"success": false, "error": "Missing required parameters"}));
        assert_eq!(mock.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_zero_amount_counts_as_missing() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromPrivateKey": KEY, "toAddress": TO, "amount": 0}),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Missing required parameters");
    }

    #[actix_web::test]
    async fn test_malformed_json() {
        let mock = Arc::new(MockTronRpc::new());
        let app = test::init_service(App::new().app_data(state(&mock)).configure(configure)).await;
        let request = test::TestRequest::post()
            .uri("/api/transfer")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid JSON body");
    }

    #[actix_web::test]
    async fn test_simulated_transfer() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromAddress": KEY_ADDRESS, "toAddress": TO, "amount": 5, "simulate": true}),
        )
        .await;
        assert_eq!(status, 200);
        let tx = &body["transaction"];
        assert_eq!(tx["success"], true);
        assert_eq!(tx["fromAddress"], KEY_ADDRESS);
        assert_eq!(tx["amount"], "5");
        assert_eq!(tx["tokenSymbol"], "TRX");
        assert!(tx["transactionId"].as_str().unwrap().starts_with("simulated_"));
        assert_eq!(mock.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_real_transfer_requires_private_key() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromAddress": KEY_ADDRESS, "toAddress": TO, "amount": "1"}),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Private key required for real transactions");
    }

    #[actix_web::test]
    async fn test_real_trx_transfer() {
        let mock = Arc::new(MockTronRpc::new());
        mock.set_balance(&TronAddress::from_base58(KEY_ADDRESS).unwrap(), 3_000_000);
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromPrivateKey": KEY, "toAddress": TO, "amount": "1.25"}),
        )
        .await;
        assert_eq!(status, 200);
        let tx_id = body["transaction"]["transactionId"].as_str().unwrap();
        assert_eq!(tx_id.len(), 64);
        assert_eq!(
            body["transaction"]["explorerUrl"],
            format!("https://nile.tronscan.org/#/transaction/{}", tx_id)
        );
        assert_eq!(mock.broadcasts().len(), 1);
    }

    #[actix_web::test]
    async fn test_validation_error_is_400() {
        let mock = Arc::new(MockTronRpc::new());
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromPrivateKey": KEY, "toAddress": KEY_ADDRESS, "amount": "1"}),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "You cannot send to self");
        assert_eq!(mock.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_node_failure_is_500() {
        let mock = Arc::new(MockTronRpc::new());
        mock.fail_account(true);
        let (status, body) = post(
            &mock,
            "/api/transfer",
            json!({"fromPrivateKey": KEY, "toAddress": TO, "amount": "1"}),
        )
        .await;
        assert_eq!(status, 500);
        assert_eq!(body, json!({"success": false, "error": "Failed to process transfer"}));
    }
}
