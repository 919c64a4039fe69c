use actix_web::{middleware, web, App, HttpServer};
use contact_relay::routes::{self, AppState};
use contact_relay::{Relay, Settings};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    // RUST_LOG takes precedence when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_tracing();

    info!("Starting contact relay...");

    // Configuration is read once and never reloaded
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        "Configuration loaded (upstream: {}, timeout: {}s)",
        settings.upstream.api_url, settings.upstream.timeout_secs
    );

    let relay = Relay::from_settings(&settings.upstream).map_err(|e| {
        error!("Failed to build HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let app_state = AppState {
        relay: Arc::new(relay),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(routes::cors_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
