//! Client for the icanhazdadjoke API.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::http::{get_json, joke_from_field, preview};
use crate::domain::entities::{Joke, Provider};
use crate::domain::sources::{JokeSource, UpstreamError};

#[derive(Debug, Deserialize)]
struct DadJokePayload {
    joke: Option<String>,
}

/// [`JokeSource`] backed by `icanhazdadjoke.com`.
///
/// The API serves HTML unless asked for JSON, so every request carries
/// `Accept: application/json`. Reads the joke from the `joke` field.
#[derive(Debug, Clone)]
pub struct DadJokeClient {
    client: reqwest::Client,
    url: Url,
}

impl DadJokeClient {
    pub const DEFAULT_URL: &'static str = "https://icanhazdadjoke.com/";

    /// Creates a client for the given endpoint.
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl JokeSource for DadJokeClient {
    fn provider(&self) -> Provider {
        Provider::DadJoke
    }

    async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
        debug!("Fetching random Dad Joke");

        let request = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json");
        let payload: DadJokePayload = get_json(self.provider(), request).await?;
        let joke = joke_from_field(self.provider(), "joke", payload.joke)?;

        debug!("Dad Joke fetched: {}...", preview(&joke));
        Ok(joke)
    }
}
