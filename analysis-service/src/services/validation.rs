use crate::error::ApiError;
use crate::models::requests::{AnalysisRequest, Genre};

/// Every field feeds the prompt, so every field is required.
pub fn validate_request(request: &AnalysisRequest) -> Result<Genre, ApiError> {
    let text_fields = [
        ("user_id", &request.user_id),
        ("book_id", &request.book_id),
        ("book_title", &request.book_title),
        ("book_author", &request.book_author),
        ("reading_content", &request.reading_content),
    ];

    let mut missing: Vec<&str> = text_fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if request.genre.is_none() {
        missing.push("genre");
    }

    match request.genre {
        Some(genre) if missing.is_empty() => Ok(genre),
        _ => Err(ApiError::missing_fields(&missing)),
    }
}
