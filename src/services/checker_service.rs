use crate::dto::evaluate_dto::CheckerPayload;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::Client;
use tracing::info;

/// Client for the external grading service. The response body is relayed
/// verbatim to the caller; this side never inspects the verdict.
#[derive(Clone)]
pub struct CheckerService {
    client: Client,
    endpoint: String,
}

impl CheckerService {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub async fn evaluate(&self, payload: &CheckerPayload) -> Result<Bytes> {
        info!(
            "Forwarding submission for quiz {} to checker at {}",
            payload.quiz_id, self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        Ok(response.bytes().await?)
    }
}
