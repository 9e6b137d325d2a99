use serde::{Deserialize, Serialize};

/// Minimal listing record returned by the quiz-list upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
}

/// Full quiz document as served by the quiz upstream. Owned by the response
/// that produced it; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answers: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
