//! Domain layer containing joke entities and the synthesis logic.
//!
//! Nothing in here performs I/O. Upstream providers are reached through the
//! [`sources::JokeSource`] trait, implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Jokes, providers, fetch outcomes, and paired jokes
//! - [`sources`] - Source trait and upstream error types
//! - [`errors`] - Aggregation-level errors
//! - [`pairing`] - Positional pairing of two joke sequences
//! - [`combiner`] - Setup/punchline extraction and template stitching
//!
//! # Aggregation Flow
//!
//! 1. [`crate::application::services::batch_fetcher`] fans out N fetches per provider
//! 2. [`crate::application::services::PairedJokesService`] filters both batches
//! 3. [`pairing::pair`] aligns the survivors by index
//! 4. [`combiner::combine`] stitches every pair into a new joke

pub mod combiner;
pub mod entities;
pub mod errors;
pub mod pairing;
pub mod sources;
