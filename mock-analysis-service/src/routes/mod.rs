pub mod admin;
pub mod analysis;
pub mod health;

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::status::SharedStatus;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub status: SharedStatus,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            status: SharedStatus::new(),
            started_at: Instant::now(),
        }
    }
}

/// Turns a handler panic into the same envelope as any other unexpected error.
pub fn unexpected_error_response(
    status: &SharedStatus,
    panic: Box<dyn Any + Send + 'static>,
) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Unexpected error in request handler: {}", detail);
    status.record_error();
    ApiError::Unexpected(detail).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let panic_status = state.status.clone();

    Router::new()
        .route("/", get(health::root))
        .route("/api/v1/health/", get(health::health_check))
        .route("/api/v1/analysis/generate", post(analysis::generate_analysis))
        .route("/api/v1/status", get(admin::service_status))
        .route("/api/v1/admin/simulate-error", post(admin::simulate_error))
        .route("/api/v1/admin/set-delay", post(admin::set_delay))
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| -> Response {
                unexpected_error_response(&panic_status, panic)
            },
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_payloads_become_unexpected_errors() {
        let status = SharedStatus::new();

        let response = unexpected_error_response(&status, Box::new("template missing"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = unexpected_error_response(&status, Box::new(String::from("index out of range")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(status.snapshot().error_count, 2);
    }
}
