use axum::extract::State;
use axum::response::Json;
use chrono::Utc;

use crate::models::responses::{ApiResponse, HealthData, RootResponse};
use crate::routes::AppState;

pub const SERVICE_NAME: &str = "book-ai-analysis-service";

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        service: "Book AI Analysis Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        port: state.port,
    })
}

pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::ok(
        HealthData {
            status: "UP".to_string(),
            timestamp: Utc::now(),
            service: SERVICE_NAME.to_string(),
        },
        "Service is running normally",
    ))
}
