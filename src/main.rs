use actix_web::{middleware, web, App, HttpServer};
use expense_tracker_backend::config::Settings;
use expense_tracker_backend::routes::{self, AppState};
use expense_tracker_backend::services::SupabaseClient;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Expense Tracker backend...");

    // Load configuration; provider credentials are mandatory
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    let supabase = Arc::new(
        SupabaseClient::new(
            settings.supabase.url.clone(),
            settings.supabase.key.clone(),
            settings.supabase.timeout(),
        )
        .map_err(|e| {
            error!("Failed to create Supabase client: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?,
    );

    info!("Supabase client initialized for {}", supabase.base_url());

    // Build application state
    let app_state = AppState::new(supabase.clone(), supabase, settings.project_name.clone())
        .with_category_deadline(settings.ml.category_deadline())
        .with_forecast_window(settings.ml.forecast_window);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let allowed_origins = settings.cors.allowed_origins.clone();

    info!("CORS allowed origins: {:?}", allowed_origins);
    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(routes::build_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
