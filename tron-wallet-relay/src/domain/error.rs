use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const PRIVATE_KEY_REQUIRED: &str = "Private key required for real transactions";
pub const INVALID_PRIVATE_KEY: &str = "Invalid private key";
pub const INVALID_TOKEN_CONTRACT: &str = "Invalid token contract address";
pub const INVALID_JSON: &str = "Invalid JSON body";
pub const WALLET_CREATION_FAILED: &str = "Failed to create wallet";
pub const TRANSFER_FAILED: &str = "Failed to process transfer";

/// Error type for the relay API. Renders as `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The caller can fix the request; the message is shown as is
    Validation(String),

    /// Server-side failure; the message is a fixed public string and the
    /// cause is logged where the error is created
    Internal(String),

    NotFound(String),
}

impl RelayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Internal(msg) | Self::NotFound(msg) => msg,
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Validation(msg) => write!(f, "Validation error: {msg}"),
            RelayError::Internal(msg) => write!(f, "Internal error: {msg}"),
            RelayError::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for RelayError {}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.message(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_error_body_shape() {
        let response = RelayError::validation(MISSING_PARAMETERS).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Missing required parameters"}));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::internal(TRANSFER_FAILED).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(RelayError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RelayError::internal(TRANSFER_FAILED).to_string(), "Internal error: Failed to process transfer");
    }
}
