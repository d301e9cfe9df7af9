use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::utils::time::now_millis;

/// How far ahead the maintenance window is advertised to end.
const MAINTENANCE_WINDOW_MINUTES: i64 = 30;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("internal server error")]
    SimulatedInternal,

    #[error("unexpected error: {0}")]
    Unexpected(String),

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("service is under maintenance, please try again later")]
    Maintenance,

    #[error("service unhealthy")]
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: &'static str,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<String>,
}

impl ApiError {
    pub fn missing_fields(fields: &[&str]) -> Self {
        ApiError::InvalidRequest(format!("missing required fields: {}", fields.join(", ")))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SimulatedInternal | ApiError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::ServiceUnavailable | ApiError::Maintenance | ApiError::Unhealthy => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::SimulatedInternal => "INTERNAL_ERROR",
            ApiError::Unexpected(_) => "UNEXPECTED_ERROR",
            ApiError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ApiError::Maintenance => "MAINTENANCE_MODE",
            ApiError::Unhealthy => "SERVICE_UNHEALTHY",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let estimated_completion = match self {
            ApiError::Maintenance => Some(
                (Utc::now() + Duration::minutes(MAINTENANCE_WINDOW_MINUTES)).to_rfc3339(),
            ),
            _ => None,
        };

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            error_code: self.error_code(),
            timestamp: now_millis(),
            estimated_completion,
        };

        (self.status_code(), Json(body)).into_response()
    }
}
