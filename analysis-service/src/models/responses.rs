use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisType {
    LiteratureAnalysis,
    TechnicalSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub user_id: String,
    pub book_id: String,
    pub analysis_type: AnalysisType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope shared by every endpoint under `/api/v1`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error_code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error_code: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub status: String,
    pub port: u16,
}
