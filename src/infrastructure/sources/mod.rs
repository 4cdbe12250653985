//! HTTP clients for the upstream joke providers.
//!
//! Provides two [`crate::domain::sources::JokeSource`] implementations:
//! - [`ChuckNorrisClient`] - `api.chucknorris.io`, `value`-keyed payload
//! - [`DadJokeClient`] - `icanhazdadjoke.com`, `joke`-keyed payload
//!
//! Both share a `reqwest::Client` built by [`build_http_client`], which applies
//! the per-request timeout.

mod chuck_norris;
mod dad_joke;
mod http;

pub use chuck_norris::ChuckNorrisClient;
pub use dad_joke::DadJokeClient;
pub use http::{DEFAULT_UPSTREAM_TIMEOUT, build_http_client};
