//! DTOs for the joke endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::PAIRED_JOKES_COUNT_CEILING;
use crate::domain::entities::{Joke, PairedJoke, Provider};

/// Query parameters for `GET /api/jokes/paired`.
///
/// Query strings are parsed with `serde_with` so `count=abc` is a
/// deserialization error rather than a silent default. The range check here
/// only enforces the absolute ceiling; the handler applies the configured
/// maximum.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PairedJokesQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = PAIRED_JOKES_COUNT_CEILING))]
    pub count: Option<usize>,
}

/// One hybrid joke with the two jokes it was made from.
#[derive(Debug, Serialize)]
pub struct PairedJokeItem {
    pub chuck: Joke,
    pub dad: Joke,
    pub combined: Joke,
}

impl From<PairedJoke> for PairedJokeItem {
    fn from(pair: PairedJoke) -> Self {
        Self {
            chuck: pair.first,
            dad: pair.second,
            combined: pair.combined,
        }
    }
}

/// Response for `GET /api/jokes/paired`.
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "chuck": "...", "dad": "...", "combined": "..." }
///   ],
///   "count": 1
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct PairedJokesResponse {
    pub success: bool,
    pub data: Vec<PairedJokeItem>,
    pub count: usize,
}

impl PairedJokesResponse {
    pub fn new(pairs: Vec<PairedJoke>) -> Self {
        let data: Vec<PairedJokeItem> = pairs.into_iter().map(PairedJokeItem::from).collect();
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JokeData {
    pub joke: Joke,
    pub source: Provider,
}

/// Response for the single-joke endpoints.
#[derive(Debug, Serialize)]
pub struct JokeResponse {
    pub success: bool,
    pub data: JokeData,
}

impl JokeResponse {
    pub fn new(source: Provider, joke: Joke) -> Self {
        Self {
            success: true,
            data: JokeData { joke, source },
        }
    }
}
