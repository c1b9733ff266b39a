use actix_web::{get, web, HttpResponse, Responder};

use crate::app::AppState;

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "network": state.config.wallet.network.name(),
    }))
}
