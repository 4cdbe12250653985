//! # Hybrid Jokes
//!
//! An HTTP service that fetches one-liners from two joke APIs concurrently,
//! pairs them up and stitches each pair into a single "hybrid" joke.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Jokes, batches, the source trait, pairing and combining
//! - **Application Layer** ([`application`]) - Batch fetching and aggregation services
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the providers
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Concurrent fan-out with per-call failure isolation
//! - Deterministic setup/punchline stitching
//! - Single-joke endpoints with a rotating provider
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at different upstreams
//! export CHUCK_NORRIS_API_URL="https://api.chucknorris.io/jokes/random"
//! export DAD_JOKE_API_URL="https://icanhazdadjoke.com/"
//!
//! # Start the service
//! cargo run
//!
//! curl 'http://localhost:3000/api/jokes/paired?count=3'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{JokeService, PairedJokesService};
    pub use crate::domain::entities::{Joke, PairedJoke, Provider};
    pub use crate::domain::sources::{JokeSource, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
