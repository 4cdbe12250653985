//! API route configuration.

use crate::api::handlers::{joke_by_source_handler, paired_jokes_handler, random_joke_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Joke routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /jokes`          - One joke, alternating providers
/// - `GET /jokes/paired`   - Hybrid jokes built from both providers
/// - `GET /jokes/{source}` - One joke from `chuck` or `dad`
///
/// `/jokes/paired` is a static segment and wins over `{source}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jokes", get(random_joke_handler))
        .route("/jokes/paired", get(paired_jokes_handler))
        .route("/jokes/{source}", get(joke_by_source_handler))
}
