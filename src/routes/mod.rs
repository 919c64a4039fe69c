// Route exports
pub mod relay;

use actix_web::{http::header, middleware::DefaultHeaders, web};

pub use relay::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(relay::health_check))
        .service(web::scope("/api").configure(relay::configure));
}

/// Cross-origin headers attached to every response, errors and 404s included
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
