use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{error::Result, views, AppState};

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let summaries = state.quiz_service.fetch_quiz_list().await?;
    Ok(Html(views::render_index(&summaries)))
}

#[axum::debug_handler]
pub async fn quiz_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let quiz = state.quiz_service.fetch_quiz(&id).await?;
    Ok(Html(views::render_quiz(&quiz)?))
}
