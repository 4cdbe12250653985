#![allow(dead_code)]

use async_trait::async_trait;
use hybrid_jokes::application::services::{JokeService, PairedJokesService};
use hybrid_jokes::domain::entities::{Joke, Provider};
use hybrid_jokes::domain::sources::{JokeSource, UpstreamError};
use hybrid_jokes::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves the given jokes in order, cycling when exhausted.
pub struct StaticSource {
    provider: Provider,
    jokes: Vec<String>,
    next: AtomicUsize,
}

impl StaticSource {
    pub fn new(provider: Provider, jokes: &[&str]) -> Self {
        Self {
            provider,
            jokes: jokes.iter().map(|j| j.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl JokeSource for StaticSource {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(Joke::new(self.jokes[i % self.jokes.len()].clone()).unwrap())
    }
}

/// Fails every call with a 503 status.
pub struct FailingSource(pub Provider);

#[async_trait]
impl JokeSource for FailingSource {
    fn provider(&self) -> Provider {
        self.0
    }

    async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
        Err(UpstreamError::Status {
            provider: self.0,
            status: 503,
        })
    }
}

pub fn chuck_source() -> Arc<dyn JokeSource> {
    Arc::new(StaticSource::new(
        Provider::ChuckNorris,
        &["Chuck Norris counted to infinity. Twice."],
    ))
}

pub fn dad_source() -> Arc<dyn JokeSource> {
    Arc::new(StaticSource::new(
        Provider::DadJoke,
        &["Why did the scarecrow win an award? Because he was outstanding in his field."],
    ))
}

pub fn create_test_state(chuck: Arc<dyn JokeSource>, dad: Arc<dyn JokeSource>) -> AppState {
    let paired = Arc::new(PairedJokesService::new(chuck.clone(), dad.clone()));
    let jokes = Arc::new(JokeService::new(vec![chuck, dad]));

    AppState::new(paired, jokes)
}

pub fn healthy_state() -> AppState {
    create_test_state(chuck_source(), dad_source())
}

/// Succeeds for the first `successes` calls, then fails with a timeout.
pub struct FlakySource {
    provider: Provider,
    successes: usize,
    calls: AtomicUsize,
}

impl FlakySource {
    pub fn new(provider: Provider, successes: usize) -> Self {
        Self {
            provider,
            successes,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl JokeSource for FlakySource {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.successes {
            Ok(Joke::new(format!("Joke number {call}.")).unwrap())
        } else {
            Err(UpstreamError::Timeout {
                provider: self.provider,
            })
        }
    }
}
