//! Core domain entities for joke aggregation.
//!
//! # Entity Types
//!
//! - [`Joke`] - Non-blank joke text from one provider
//! - [`Provider`] - Identifies an upstream joke provider
//! - [`FetchOutcome`] / [`Batch`] - Per-request results of one fan-out
//! - [`PairedJoke`] - Two source jokes and their combination
//!
//! Entities are created fresh for every aggregation and never mutated afterwards.

pub mod batch;
pub mod joke;
pub mod paired_joke;
pub mod provider;

pub use batch::{Batch, FetchOutcome};
pub use joke::{BlankJokeError, Joke};
pub use paired_joke::PairedJoke;
pub use provider::{Provider, UnknownProviderError};
