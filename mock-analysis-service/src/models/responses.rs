use serde::{Deserialize, Serialize};

use super::status::ServiceStatus;

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub service: String,
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
    pub user_id: String,
    pub book_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAnalysis {
    pub content: String,
    pub analysis_type: String,
    pub confidence: f64,
    pub processing_time_ms: u64,
    pub word_count: usize,
    pub genre: String,
    pub book_info: BookInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub message: String,
    pub data: GeneratedAnalysis,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub service_status: ServiceStatus,
    pub uptime_seconds: f64,
    pub current_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminResponse {
    pub message: String,
}
