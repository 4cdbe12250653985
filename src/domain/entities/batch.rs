//! Fetch outcomes and the batch they are collected into.

use super::{Joke, Provider};
use crate::domain::sources::UpstreamError;

/// Result of a single fetch attempt against one provider.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(Joke),
    Failure(UpstreamError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl From<Result<Joke, UpstreamError>> for FetchOutcome {
    fn from(result: Result<Joke, UpstreamError>) -> Self {
        match result {
            Ok(joke) => FetchOutcome::Success(joke),
            Err(err) => FetchOutcome::Failure(err),
        }
    }
}

/// Every outcome of one fan-out against a single provider.
///
/// Position `i` holds the outcome of the `i`-th issued request, whatever order
/// the requests completed in. Failures stay in the batch as outcomes, so the
/// length always equals the number of requests issued.
#[derive(Debug)]
pub struct Batch {
    provider: Provider,
    outcomes: Vec<FetchOutcome>,
}

impl Batch {
    pub fn new(provider: Provider, outcomes: Vec<FetchOutcome>) -> Self {
        Self { provider, outcomes }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn outcomes(&self) -> &[FetchOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Consumes the batch, keeping successful jokes in request order.
    pub fn into_successes(self) -> Vec<Joke> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                FetchOutcome::Success(joke) => Some(joke),
                FetchOutcome::Failure(_) => None,
            })
            .collect()
    }
}
