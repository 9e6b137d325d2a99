use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded request body of `POST /evaluate`: question key (plus the
/// distinguished `quizId` entry) to the submitted answer strings.
pub type Submission = HashMap<String, Vec<String>>;

/// Body forwarded to the checker service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerPayload {
    #[serde(rename = "quizId")]
    pub quiz_id: String,
    pub answers: HashMap<String, Vec<String>>,
}

impl CheckerPayload {
    /// Pulls the `quizId` entry out of a submission. The remaining keys are
    /// the answers; the first `quizId` value identifies the quiz.
    pub fn from_submission(mut submission: Submission) -> Result<Self> {
        let mut values = submission.remove("quizId").unwrap_or_default();
        if values.is_empty() {
            return Err(Error::BadRequest("Quiz ID is missing".to_string()));
        }
        Ok(Self {
            quiz_id: values.remove(0),
            answers: submission,
        })
    }
}
