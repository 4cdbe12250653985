//! Application layer services orchestrating joke fetching and synthesis.
//!
//! Services consume the [`crate::domain::sources::JokeSource`] trait and give
//! HTTP handlers and the CLI a small API to call.
//!
//! # Available Services
//!
//! - [`services::PairedJokesService`] - Concurrent fetch, pairing and combination
//! - [`services::JokeService`] - Single jokes from a named or rotating provider
//! - [`services::batch_fetcher`] - Concurrent fan-out against one provider

pub mod services;
