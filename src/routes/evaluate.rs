use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    dto::evaluate_dto::{CheckerPayload, Submission},
    error::{Error, Result},
    AppState,
};

/// Forwards a submitted answer set to the checker service and relays the
/// checker's response body unchanged.
#[axum::debug_handler]
pub async fn evaluate(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let submission: Submission = serde_json::from_slice(&body)
        .map_err(|_| Error::BadRequest("Invalid request payload".to_string()))?;

    let payload = CheckerPayload::from_submission(submission)?;
    let verdict = state.checker_service.evaluate(&payload).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], verdict).into_response())
}
