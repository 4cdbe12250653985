use std::sync::Arc;

use crate::application::services::{
    DEFAULT_MAX_PAIRED_JOKES_COUNT, DEFAULT_PAIRED_JOKES_COUNT, JokeService, PairedJokesService,
};

/// Shared handler state.
///
/// Services sit behind `Arc` so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub paired_jokes_service: Arc<PairedJokesService>,
    pub joke_service: Arc<JokeService>,
    /// Pairs requested when `count` is omitted.
    pub default_paired_count: usize,
    /// Largest accepted `count`.
    pub max_paired_count: usize,
}

impl AppState {
    pub fn new(paired_jokes_service: Arc<PairedJokesService>, joke_service: Arc<JokeService>) -> Self {
        Self {
            paired_jokes_service,
            joke_service,
            default_paired_count: DEFAULT_PAIRED_JOKES_COUNT,
            max_paired_count: DEFAULT_MAX_PAIRED_JOKES_COUNT,
        }
    }

    /// Overrides the paired-jokes limits from configuration.
    pub fn with_paired_limits(mut self, default_count: usize, max_count: usize) -> Self {
        self.default_paired_count = default_count;
        self.max_paired_count = max_count;
        self
    }
}
