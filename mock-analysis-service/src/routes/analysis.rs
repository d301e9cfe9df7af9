use std::time::Instant;

use axum::extract::{rejection::JsonRejection, State};
use axum::response::Json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::requests::AnalysisRequest;
use crate::models::responses::{AnalysisResponse, BookInfo, GeneratedAnalysis};
use crate::routes::AppState;
use crate::services::flags::check_generate;
use crate::services::generator::generate_analysis as render_analysis;
use crate::services::validation::validate_request;
use crate::utils::text::word_count;
use crate::utils::time::now_millis;

const ANALYSIS_TYPE: &str = "SUMMARY";
const CONFIDENCE: f64 = 0.95;

pub async fn generate_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let result = produce(&state, payload).await;

    if let Err(e) = &result {
        state.status.record_error();
        warn!(error_code = e.error_code(), "Analysis request rejected: {}", e);
    }
    result.map(Json)
}

async fn produce(
    state: &AppState,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<AnalysisResponse, ApiError> {
    let status = state.status.record_request();

    let Json(request) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    validate_request(&request)?;
    check_generate(&status, state.config.simulated_timeout).await?;

    Ok(analyse(request))
}

fn analyse(request: AnalysisRequest) -> AnalysisResponse {
    info!(
        user_id = %request.user_id,
        book_id = %request.book_id,
        genre = %request.genre,
        "Generating analysis for '{}'",
        request.book_title
    );

    let started = Instant::now();
    let content = render_analysis(&request);
    let processing_time_ms = started.elapsed().as_millis() as u64;

    info!(
        book_id = %request.book_id,
        processing_time_ms,
        "Analysis generated ({} characters)",
        content.chars().count()
    );

    AnalysisResponse {
        success: true,
        message: "Analysis completed successfully".to_string(),
        data: GeneratedAnalysis {
            word_count: word_count(&content),
            content,
            analysis_type: ANALYSIS_TYPE.to_string(),
            confidence: CONFIDENCE,
            processing_time_ms,
            genre: request.genre,
            book_info: BookInfo {
                title: request.book_title,
                author: request.book_author,
                user_id: request.user_id,
                book_id: request.book_id,
            },
        },
        timestamp: now_millis(),
    }
}
