use axum::{http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::utils::primes::count_primes_below;

const PRIME_SWEEP_MAX: u64 = 9_000_000;

/// Kicks off a detached prime-counting sweep on the blocking pool and
/// answers immediately. Nobody observes the outcome; a failed sweep only
/// shows up in the logs.
#[axum::debug_handler]
pub async fn cpu_intensive() -> impl IntoResponse {
    tokio::task::spawn_blocking(|| {
        let count = count_primes_below(PRIME_SWEEP_MAX);
        info!("Prime sweep finished: {} primes below {}", count, PRIME_SWEEP_MAX);
    });

    (StatusCode::ACCEPTED, "CPU-intensive task accepted")
}
