use axum::{http::StatusCode, response::IntoResponse};

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
