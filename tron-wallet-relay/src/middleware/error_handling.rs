use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    http::header::{HeaderName, HeaderValue},
    Error, HttpRequest, HttpResponse,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::time::Instant;

use crate::domain::error::{RelayError, INVALID_JSON};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags each response with a request id and logs failed requests with it
#[derive(Clone, Default)]
pub struct ErrorHandlingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ErrorHandlingService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlingService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let request_id = uuid::Uuid::new_v4().to_string();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let start_time = Instant::now();

        Box::pin(async move {
            match service.call(req).await {
                Ok(mut response) => {
                    let status = response.status().as_u16();
                    let duration_ms = start_time.elapsed().as_millis() as u64;
                    if response.status().is_server_error() {
                        tracing::error!(%request_id, %method, %path, status, duration_ms, "Request failed");
                    } else if response.status().is_client_error() {
                        tracing::warn!(%request_id, %method, %path, status, duration_ms, "Request rejected");
                    } else {
                        tracing::debug!(%request_id, %method, %path, status, duration_ms, "Request completed");
                    }

                    if let Ok(value) = HeaderValue::from_str(&request_id) {
                        response
                            .headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                    Ok(response)
                }
                Err(error) => {
                    tracing::error!(%request_id, %method, %path, "Unhandled error: {}", error);
                    Err(error)
                }
            }
        })
    }
}

/// Malformed JSON bodies get the API's error shape instead of actix's text
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    tracing::debug!("Rejected request body: {}", err);
    RelayError::validation(INVALID_JSON).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, RelayError> {
    Err(RelayError::NotFound(format!("No route for {} {}", req.method(), req.path())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_request_id_and_not_found() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorHandlingMiddleware)
                .route("/ok", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .default_service(web::to(not_found)),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
        assert!(response.status().is_success());
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let response = test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;
        assert_eq!(response.status(), 404);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No route for GET /missing");
    }
}
