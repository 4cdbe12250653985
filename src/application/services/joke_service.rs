//! Single-joke retrieval from a named or rotating provider.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use crate::domain::entities::{Joke, Provider};
use crate::domain::errors::JokeError;
use crate::domain::sources::JokeSource;

/// Service for fetching one joke at a time.
///
/// When no provider is named, sources are used in round-robin order so that
/// the choice is reproducible rather than random.
pub struct JokeService {
    sources: Vec<Arc<dyn JokeSource>>,
    next: AtomicUsize,
}

impl JokeService {
    /// Creates a service rotating over `sources` in the given order.
    pub fn new(sources: Vec<Arc<dyn JokeSource>>) -> Self {
        Self {
            sources,
            next: AtomicUsize::new(0),
        }
    }

    /// Providers this service can serve, in rotation order.
    pub fn providers(&self) -> Vec<Provider> {
        self.sources.iter().map(|s| s.provider()).collect()
    }

    /// Fetches one joke from `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`JokeError::SourceNotConfigured`] if no source serves that
    /// provider, or [`JokeError::Upstream`] if the fetch fails.
    pub async fn get_joke(&self, provider: Provider) -> Result<Joke, JokeError> {
        info!("Fetching joke from source: {}", provider);

        let source = self
            .sources
            .iter()
            .find(|s| s.provider() == provider)
            .ok_or(JokeError::SourceNotConfigured(provider))?;

        Ok(source.fetch_one().await?)
    }

    /// Fetches one joke from the next source in the rotation.
    ///
    /// # Errors
    ///
    /// Returns [`JokeError::NoSources`] if the service has no sources, or
    /// [`JokeError::Upstream`] if the fetch fails.
    pub async fn get_rotating_joke(&self) -> Result<(Provider, Joke), JokeError> {
        if self.sources.is_empty() {
            return Err(JokeError::NoSources);
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.sources.len();
        let source = &self.sources[index];
        let provider = source.provider();
        info!("Fetching joke from rotating source: {}", provider);

        let joke = source.fetch_one().await?;
        Ok((provider, joke))
    }
}
