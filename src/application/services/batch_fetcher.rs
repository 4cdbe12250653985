//! Concurrent fan-out of fetches against a single provider.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::entities::{Batch, FetchOutcome, Joke};
use crate::domain::sources::{JokeSource, UpstreamError};

/// Issues `n` concurrent fetches against `source` and waits for all of them.
///
/// Every request runs as its own task and all tasks are spawned before any is
/// awaited. A failed request, including a panicked task, becomes a
/// [`FetchOutcome::Failure`] in its own slot and never affects its siblings.
///
/// The returned batch always has exactly `n` outcomes, indexed by issue order.
pub async fn fetch_batch(source: Arc<dyn JokeSource>, n: usize) -> Batch {
    let provider = source.provider();
    debug!(provider = provider.as_str(), count = n, "Issuing batch");

    let handles: Vec<_> = (0..n)
        .map(|_| {
            let source = Arc::clone(&source);
            tokio::spawn(async move { source.fetch_one().await })
        })
        .collect();

    let outcomes = join_all(handles)
        .await
        .into_iter()
        .enumerate()
        .map(|(index, joined)| {
            let result: Result<Joke, UpstreamError> = joined.unwrap_or_else(|e| {
                Err(UpstreamError::TaskAborted {
                    provider,
                    message: e.to_string(),
                })
            });

            match &result {
                Ok(_) => {
                    metrics::counter!(
                        "jokes_upstream_fetch_total",
                        "provider" => provider.as_str(),
                        "outcome" => "success"
                    )
                    .increment(1);
                }
                Err(e) => {
                    warn!("Error fetching {} joke #{}: {}", provider, index + 1, e);
                    metrics::counter!(
                        "jokes_upstream_fetch_total",
                        "provider" => provider.as_str(),
                        "outcome" => "failure"
                    )
                    .increment(1);
                }
            }

            FetchOutcome::from(result)
        })
        .collect();

    Batch::new(provider, outcomes)
}
