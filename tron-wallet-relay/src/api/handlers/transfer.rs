use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::app::AppState;
use crate::domain::error::RelayError;
use crate::domain::transfer::TransferBody;
use crate::validators::validate_transfer;

#[post("/transfer")]
pub async fn transfer(
    state: web::Data<AppState>,
    body: web::Json<TransferBody>,
) -> Result<HttpResponse, RelayError> {
    let command = validate_transfer(body.into_inner())?;

    let transaction = if command.simulate {
        json!(state.transfers.simulate(&command)?)
    } else {
        json!(state.transfers.submit(&command).await?)
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "transaction": transaction,
    })))
}
