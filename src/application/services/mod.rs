//! Business logic services for the application layer.

pub mod batch_fetcher;
pub mod joke_service;
pub mod paired_jokes_service;

pub use batch_fetcher::fetch_batch;
pub use joke_service::JokeService;
pub use paired_jokes_service::{
    DEFAULT_MAX_PAIRED_JOKES_COUNT, DEFAULT_PAIRED_JOKES_COUNT, PAIRED_JOKES_COUNT_CEILING,
    PairedJokesService,
};
