//! Client for the Chuck Norris jokes API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::http::{get_json, joke_from_field, preview};
use crate::domain::entities::{Joke, Provider};
use crate::domain::sources::{JokeSource, UpstreamError};

/// Relevant part of `GET /jokes/random`.
#[derive(Debug, Deserialize)]
struct ChuckNorrisPayload {
    value: Option<String>,
}

/// [`JokeSource`] backed by `api.chucknorris.io`.
///
/// Reads the joke from the `value` field. No special headers are required.
#[derive(Debug, Clone)]
pub struct ChuckNorrisClient {
    client: reqwest::Client,
    url: Url,
}

impl ChuckNorrisClient {
    pub const DEFAULT_URL: &'static str = "https://api.chucknorris.io/jokes/random";

    /// Creates a client for the given endpoint.
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl JokeSource for ChuckNorrisClient {
    fn provider(&self) -> Provider {
        Provider::ChuckNorris
    }

    async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
        debug!("Fetching random Chuck Norris joke");

        let payload: ChuckNorrisPayload =
            get_json(self.provider(), self.client.get(self.url.clone())).await?;
        let joke = joke_from_field(self.provider(), "value", payload.value)?;

        debug!("Chuck Norris joke fetched: {}...", preview(&joke));
        Ok(joke)
    }
}
