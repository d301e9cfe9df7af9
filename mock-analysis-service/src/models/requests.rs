use serde::{Deserialize, Serialize};

/// Reading record submitted for analysis. Absent keys deserialize to empty
/// strings so they are rejected by the validator instead of the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub book_id: String,
    pub book_title: String,
    pub book_author: String,
    pub genre: String,
    pub reading_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SimulationCommand {
    #[serde(rename = "reset")]
    Reset,
    #[serde(rename = "503")]
    ServiceUnavailable,
    #[serde(rename = "500")]
    InternalError,
    #[serde(rename = "400")]
    BadRequest,
    #[serde(rename = "timeout")]
    Timeout,
    #[serde(rename = "maintenance")]
    Maintenance,
    #[serde(rename = "delay")]
    Delay,
}

#[derive(Debug, Deserialize)]
pub struct SimulateErrorParams {
    pub error_type: SimulationCommand,
    /// Seconds, only read by the `delay` command.
    pub duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SetDelayParams {
    pub delay_seconds: f64,
}
