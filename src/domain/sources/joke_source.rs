//! Source trait for fetching a single joke from an upstream provider.

use crate::domain::entities::{Joke, Provider};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of one fetch against one provider.
///
/// Transport errors, non-2xx statuses and malformed payloads are all folded
/// into this type so callers can treat every provider the same way.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{provider} request failed: {message}")]
    Transport { provider: Provider, message: String },

    #[error("{provider} request timed out")]
    Timeout { provider: Provider },

    #[error("{provider} responded with status {status}")]
    Status { provider: Provider, status: u16 },

    #[error("{provider} returned an invalid payload: {reason}")]
    InvalidPayload { provider: Provider, reason: String },

    #[error("{provider} fetch task aborted: {message}")]
    TaskAborted { provider: Provider, message: String },
}

impl UpstreamError {
    /// Provider the failed request was sent to.
    pub fn provider(&self) -> Provider {
        match self {
            UpstreamError::Transport { provider, .. }
            | UpstreamError::Timeout { provider }
            | UpstreamError::Status { provider, .. }
            | UpstreamError::InvalidPayload { provider, .. }
            | UpstreamError::TaskAborted { provider, .. } => *provider,
        }
    }
}

/// A provider that can be asked for one joke at a time.
///
/// # Implementations
///
/// - [`crate::infrastructure::sources::ChuckNorrisClient`] - reads the `value` field
/// - [`crate::infrastructure::sources::DadJokeClient`] - reads the `joke` field
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Provider this source talks to.
    fn provider(&self) -> Provider;

    /// Fetches exactly one joke.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the request fails, times out, returns a
    /// non-2xx status, or the payload lacks a non-blank joke field.
    async fn fetch_one(&self) -> Result<Joke, UpstreamError>;
}
