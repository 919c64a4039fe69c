use actix_web::{http::{Method, StatusCode}, web, HttpResponse, Responder, ResponseError};
use crate::core::{HandleError, Relay};
use crate::models::{Ack, HealthResponse, RelayResponse};
use crate::services::RelayError;
use std::sync::Arc;

/// Largest request body the relay reads
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Body limit for the relay route, well above actix's 256 KiB default
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(MAX_BODY_BYTES)
}

/// Configure relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload_config()).service(
        web::resource("/relay")
            .route(web::post().to(relay))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Cross-origin preflight; the body is never read.
async fn preflight() -> impl Responder {
    HttpResponse::Ok().json(Ack { success: true })
}

/// Relay endpoint
///
/// POST /api/relay
///
/// Request body:
/// ```json
/// {
///   "pluginData": "string",
///   "userId": "string"
/// }
/// ```
async fn relay(
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, HandleError> {
    let body = body.map_err(body_error)?;
    let data = state.relay.handle(&body).await?;
    Ok(HttpResponse::Ok().json(RelayResponse::completed(data)))
}

/// Payload failures (over the limit, broken stream) share the relay's JSON failure shape.
fn body_error(err: actix_web::Error) -> HandleError {
    tracing::info!("Failed to read request body: {}", err);
    HandleError::Relay(RelayError::Internal(format!("invalid request body: {}", err)))
}

impl ResponseError for HandleError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandleError::MissingParameter => StatusCode::BAD_REQUEST,
            HandleError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            HandleError::MissingParameter => RelayResponse::rejected(self.to_string()),
            HandleError::Relay(e) => RelayResponse::failed(e.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
