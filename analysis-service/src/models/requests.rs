use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Technical,
    Literature,
}

/// Reading record submitted for analysis. Absent keys deserialize to empty
/// values so the validator can report them together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub book_id: String,
    pub book_title: String,
    pub book_author: String,
    pub genre: Option<Genre>,
    pub reading_content: String,
}
