use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::responses::ApiResponse;
use crate::services::providers::ProviderError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("analysis generation failed: {0}")]
    AnalysisFailed(#[from] ProviderError),
}

impl ApiError {
    pub fn missing_fields(fields: &[&str]) -> Self {
        ApiError::InvalidRequest(format!("missing required fields: {}", fields.join(", ")))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::AnalysisFailed(_) => "ANALYSIS_FAILED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: ApiResponse<()> = ApiResponse {
            success: false,
            data: None,
            message: Some(self.to_string()),
            error_code: Some(self.error_code().to_string()),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
