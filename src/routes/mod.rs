// Route exports
pub mod auth;
pub mod ml;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, web, HttpResponse, Responder};
use crate::core::{CategoryClassifier, ExpenseForecaster, DEFAULT_FORECAST_WINDOW};
use crate::models::{HealthResponse, RootResponse};
use crate::services::{AuthGateway, IdentityProvider, TransactionStore};
use std::sync::Arc;
use std::time::Duration;

/// Deadline applied to category classification unless configured otherwise
pub const DEFAULT_CATEGORY_DEADLINE: Duration = Duration::from_secs(2);

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthGateway,
    pub forecaster: ExpenseForecaster,
    pub classifier: Arc<CategoryClassifier>,
    pub category_deadline: Duration,
    pub service_name: String,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        transactions: Arc<dyn TransactionStore>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            auth: AuthGateway::new(identity),
            forecaster: ExpenseForecaster::new(transactions, DEFAULT_FORECAST_WINDOW),
            classifier: Arc::new(CategoryClassifier::default()),
            category_deadline: DEFAULT_CATEGORY_DEADLINE,
            service_name: service_name.into(),
        }
    }

    pub fn with_category_deadline(mut self, deadline: Duration) -> Self {
        self.category_deadline = deadline;
        self
    }

    pub fn with_forecast_window(mut self, window: usize) -> Self {
        self.forecaster = self.forecaster.with_window(window);
        self
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root)).service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .service(web::scope("/auth").configure(auth::configure))
            .service(web::scope("/ml").configure(ml::configure)),
    );
}

/// CORS policy for the configured frontend origins
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Liveness message
async fn root(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: format!("{} is running", state.service_name),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// JSON extractor config shared by the server and tests
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}
