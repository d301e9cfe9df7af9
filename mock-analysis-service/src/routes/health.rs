use axum::extract::State;
use axum::response::Json;

use crate::error::ApiError;
use crate::models::responses::{HealthResponse, RootResponse};
use crate::routes::AppState;
use crate::services::flags::check_health;
use crate::utils::time::{now_millis, now_rfc3339};

pub const SERVICE_NAME: &str = "book-ai-analysis-service";
pub const SERVICE_TITLE: &str = "Book AI Analysis Service";

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    state.status.record_request();
    Json(RootResponse {
        service: SERVICE_TITLE.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now_rfc3339(),
    })
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let status = state.status.record_request();

    if let Err(e) = check_health(&status, state.config.simulated_timeout).await {
        state.status.record_error();
        tracing::warn!(error_code = e.error_code(), "Health check failed: {}", e);
        return Err(e);
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_millis(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
