//! Shared HTTP plumbing for provider clients.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Joke, Provider};
use crate::domain::sources::UpstreamError;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Builds the HTTP client shared by all provider clients.
///
/// Every request made through it is bounded by `timeout`, covering connect,
/// headers and body.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Sends `request` and decodes a JSON body, mapping every failure to
/// [`UpstreamError`].
pub(super) async fn get_json<T: DeserializeOwned>(
    provider: Provider,
    request: RequestBuilder,
) -> Result<T, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            UpstreamError::Timeout { provider }
        } else {
            UpstreamError::InvalidPayload {
                provider,
                reason: e.to_string(),
            }
        }
    })
}

/// Turns an optional payload field into a [`Joke`].
pub(super) fn joke_from_field(
    provider: Provider,
    field: &str,
    value: Option<String>,
) -> Result<Joke, UpstreamError> {
    let text = value.ok_or_else(|| UpstreamError::InvalidPayload {
        provider,
        reason: format!("missing `{field}` field"),
    })?;

    Joke::new(text).map_err(|_| UpstreamError::InvalidPayload {
        provider,
        reason: format!("empty `{field}` field"),
    })
}

/// First 50 characters of a joke, for log lines.
pub(super) fn preview(joke: &Joke) -> String {
    joke.as_str().chars().take(50).collect()
}

fn transport_error(provider: Provider, error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Timeout { provider }
    } else {
        UpstreamError::Transport {
            provider,
            message: error.to_string(),
        }
    }
}
