use axum::extract::{rejection::JsonRejection, State};
use axum::response::Json;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::requests::AnalysisRequest;
use crate::models::responses::{AnalysisResponse, ApiResponse};
use crate::routes::AppState;
use crate::services::prompt::build_prompt;
use crate::services::providers::ChatMessage;
use crate::services::validation::validate_request;

pub async fn generate_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisResponse>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        let err = ApiError::InvalidRequest(rejection.body_text());
        warn!("Rejected analysis request: {}", err);
        err
    })?;

    let genre = validate_request(&request).map_err(|err| {
        warn!(user_id = %request.user_id, "Rejected analysis request: {}", err);
        err
    })?;

    info!(
        user_id = %request.user_id,
        book_id = %request.book_id,
        ?genre,
        "Analysis requested for '{}'",
        request.book_title
    );

    let prompt = build_prompt(
        genre,
        &request.book_title,
        &request.book_author,
        &request.reading_content,
    );
    let messages = [ChatMessage::system(prompt.system), ChatMessage::user(prompt.user)];

    info!(model = state.provider.model(), "Calling completion API");
    let content = state.provider.complete(&messages).await.map_err(|e| {
        error!(book_id = %request.book_id, "Analysis generation failed: {}", e);
        ApiError::from(e)
    })?;
    info!(length = content.chars().count(), "Completion received");

    let analysis = AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        user_id: request.user_id,
        book_id: request.book_id,
        analysis_type: prompt.analysis_type,
        content,
        created_at: Utc::now(),
    };

    info!(analysis_id = %analysis.analysis_id, "Analysis completed");
    Ok(Json(ApiResponse::ok(analysis, "Analysis completed")))
}
