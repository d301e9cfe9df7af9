use crate::error::ApiError;
use crate::models::requests::AnalysisRequest;

/// `user_id` and `book_id` are the only hard requirements; an empty
/// `reading_content` gets its own reply from the generator.
pub fn validate_request(request: &AnalysisRequest) -> Result<(), ApiError> {
    if request.user_id.trim().is_empty() || request.book_id.trim().is_empty() {
        return Err(ApiError::missing_fields(&["user_id", "book_id"]));
    }
    Ok(())
}
