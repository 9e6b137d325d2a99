use crate::error::{Error, Result};
use crate::models::quiz::{Quiz, QuizSummary};
use reqwest::Client;
use tracing::info;

/// Client for the upstream quiz service. Stateless and cache-free: the
/// upstream is the source of truth, so every call re-fetches.
#[derive(Clone)]
pub struct QuizService {
    client: Client,
    quiz_url: String,
    quiz_list_url: String,
}

impl QuizService {
    pub fn new(client: Client, quiz_url: String, quiz_list_url: String) -> Self {
        Self {
            client,
            quiz_url,
            quiz_list_url,
        }
    }

    pub async fn fetch_quiz_list(&self) -> Result<Vec<QuizSummary>> {
        let response = self.client.get(&self.quiz_list_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        let summaries = serde_json::from_slice(&body)?;
        Ok(summaries)
    }

    pub async fn fetch_quiz(&self, id: &str) -> Result<Quiz> {
        // The id is appended verbatim; the separator comes from configuration.
        let url = format!("{}{}", self.quiz_url, id);
        info!("Fetching quiz from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        let quiz = serde_json::from_slice(&body)?;
        Ok(quiz)
    }
}
