//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod jokes;

pub use health::health_handler;
pub use jokes::{joke_by_source_handler, paired_jokes_handler, random_joke_handler};
