//! Handlers for the joke endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::jokes::{JokeResponse, PairedJokesQuery, PairedJokesResponse};
use crate::domain::entities::Provider;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches batches from both providers and returns the hybrid jokes.
///
/// # Endpoint
///
/// `GET /api/jokes/paired?count=5`
///
/// # Query Parameters
///
/// - `count` (optional): Jokes requested from each provider
///   (default: `PAIRED_JOKES_COUNT`, max: `MAX_PAIRED_JOKES_COUNT`)
///
/// # Response
///
/// Up to `count` pairs. Individual upstream failures only shrink the list.
///
/// # Errors
///
/// - 400 Bad Request if `count` is not a number or is out of range
/// - 502 Bad Gateway if either provider returned no jokes at all
pub async fn paired_jokes_handler(
    State(state): State<AppState>,
    query: Result<Query<PairedJokesQuery>, QueryRejection>,
) -> Result<Json<PairedJokesResponse>, AppError> {
    let Query(params) = query?;
    let max = state.max_paired_count;

    params
        .validate()
        .map_err(|_| count_out_of_range(params.count, max))?;

    let count = params.count.unwrap_or(state.default_paired_count);
    if count > max {
        return Err(count_out_of_range(Some(count), max));
    }

    let pairs = state.paired_jokes_service.get_paired_jokes(count).await?;

    Ok(Json(PairedJokesResponse::new(pairs)))
}

fn count_out_of_range(count: Option<usize>, max: usize) -> AppError {
    AppError::bad_request(
        format!("count must be between 1 and {max}"),
        json!({ "count": count, "max": max }),
    )
}

/// Returns one joke, alternating between providers on every call.
///
/// # Endpoint
///
/// `GET /api/jokes`
///
/// # Errors
///
/// Returns 502 Bad Gateway if the selected provider fails.
pub async fn random_joke_handler(
    State(state): State<AppState>,
) -> Result<Json<JokeResponse>, AppError> {
    let (provider, joke) = state.joke_service.get_rotating_joke().await?;

    Ok(Json(JokeResponse::new(provider, joke)))
}

/// Returns one joke from the named provider.
///
/// # Endpoint
///
/// `GET /api/jokes/{source}` where `source` is `chuck` or `dad`
///
/// # Errors
///
/// - 400 Bad Request for an unknown source
/// - 502 Bad Gateway if the provider fails
pub async fn joke_by_source_handler(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<JokeResponse>, AppError> {
    let provider: Provider = source.parse()?;
    let joke = state.joke_service.get_joke(provider).await?;

    Ok(Json(JokeResponse::new(provider, joke)))
}
