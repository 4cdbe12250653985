//! Hybrid joke aggregation across two providers.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::services::batch_fetcher::fetch_batch;
use crate::domain::combiner::combine;
use crate::domain::entities::PairedJoke;
use crate::domain::errors::AggregationError;
use crate::domain::pairing::pair;
use crate::domain::sources::JokeSource;

/// Number of pairs requested when the caller does not specify one.
pub const DEFAULT_PAIRED_JOKES_COUNT: usize = 5;

/// Largest count a caller may request unless configured otherwise.
pub const DEFAULT_MAX_PAIRED_JOKES_COUNT: usize = 20;

/// Upper bound for any configured maximum.
pub const PAIRED_JOKES_COUNT_CEILING: usize = 100;

/// Service producing paired jokes from two providers.
///
/// The `first` source supplies setups and the `second` source supplies
/// punchlines. Holds no state between calls.
pub struct PairedJokesService {
    first: Arc<dyn JokeSource>,
    second: Arc<dyn JokeSource>,
}

impl PairedJokesService {
    /// Creates a new paired jokes service.
    pub fn new(first: Arc<dyn JokeSource>, second: Arc<dyn JokeSource>) -> Self {
        Self { first, second }
    }

    /// Fetches `count` jokes from each provider and pairs them.
    ///
    /// # Concurrency
    ///
    /// Both batches run at the same time, so up to `2 * count` requests are in
    /// flight at once. The call returns only after every request has settled.
    ///
    /// # Partial Failure
    ///
    /// Failed requests are logged and dropped. The result has
    /// `min(successes(first), successes(second))` pairs, aligned by request
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::InsufficientJokes`] if either provider
    /// produced no joke at all. No partial result is returned in that case.
    pub async fn get_paired_jokes(&self, count: usize) -> Result<Vec<PairedJoke>, AggregationError> {
        info!("Starting parallel fetch of {} joke pairs", count);

        let (first_batch, second_batch) = tokio::join!(
            fetch_batch(Arc::clone(&self.first), count),
            fetch_batch(Arc::clone(&self.second), count)
        );

        let first_provider = first_batch.provider();
        let second_provider = second_batch.provider();
        let first_jokes = first_batch.into_successes();
        let second_jokes = second_batch.into_successes();

        info!(
            "Jokes fetched: {} {}, {} {}",
            first_jokes.len(),
            first_provider,
            second_jokes.len(),
            second_provider
        );

        if first_jokes.is_empty() || second_jokes.is_empty() {
            error!("Could not fetch enough jokes");
            metrics::counter!("jokes_aggregation_failures_total").increment(1);
            return Err(AggregationError::InsufficientJokes {
                first: first_jokes.len(),
                second: second_jokes.len(),
            });
        }

        let pairs = pair(first_jokes, second_jokes);
        debug!("Pairing {} jokes", pairs.len());

        let paired: Vec<PairedJoke> = pairs
            .into_iter()
            .map(|(first, second)| {
                let combined = combine(&first, &second);
                PairedJoke::new(first, second, combined)
            })
            .collect();

        metrics::counter!("jokes_paired_total").increment(paired.len() as u64);
        info!("Total pairs created: {}", paired.len());

        Ok(paired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Joke, Provider};
    use crate::domain::sources::{MockJokeSource, UpstreamError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Plays back a fixed script, one entry per call in issue order.
    struct ScriptedSource {
        provider: Provider,
        calls: AtomicUsize,
        script: Vec<Option<&'static str>>,
    }

    impl ScriptedSource {
        fn new(provider: Provider, script: Vec<Option<&'static str>>) -> Arc<Self> {
            Arc::new(Self {
                provider,
                calls: AtomicUsize::new(0),
                script,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JokeSource for ScriptedSource {
        fn provider(&self) -> Provider {
            self.provider
        }

        async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.script.get(index).copied().flatten() {
                Some(text) => Ok(Joke::new(text).unwrap()),
                None => Err(UpstreamError::Transport {
                    provider: self.provider,
                    message: "API Error".to_string(),
                }),
            }
        }
    }

    fn constant_mock(provider: Provider, text: &'static str, times: usize) -> MockJokeSource {
        let mut mock = MockJokeSource::new();
        mock.expect_provider().return_const(provider);
        mock.expect_fetch_one()
            .times(times)
            .returning(move || Ok(Joke::new(text).unwrap()));
        mock
    }

    fn failing_mock(provider: Provider, times: usize) -> MockJokeSource {
        let mut mock = MockJokeSource::new();
        mock.expect_provider().return_const(provider);
        mock.expect_fetch_one().times(times).returning(move || {
            Err(UpstreamError::Status {
                provider,
                status: 503,
            })
        });
        mock
    }

    #[tokio::test]
    async fn test_five_successes_each_side() {
        let chuck = ScriptedSource::new(
            Provider::ChuckNorris,
            vec![
                Some("Chuck joke 1."),
                Some("Chuck joke 2."),
                Some("Chuck joke 3."),
                Some("Chuck joke 4."),
                Some("Chuck joke 5."),
            ],
        );
        let dad = ScriptedSource::new(
            Provider::DadJoke,
            vec![
                Some("Dad joke 1."),
                Some("Dad joke 2."),
                Some("Dad joke 3."),
                Some("Dad joke 4."),
                Some("Dad joke 5."),
            ],
        );
        let service = PairedJokesService::new(chuck, dad);

        let result = service.get_paired_jokes(5).await.unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result[0].first.as_str(), "Chuck joke 1.");
        assert_eq!(result[0].second.as_str(), "Dad joke 1.");
        assert_eq!(result[4].first.as_str(), "Chuck joke 5.");
        assert_eq!(result[4].second.as_str(), "Dad joke 5.");
        assert!(result.iter().all(|p| !p.combined.as_str().is_empty()));
    }

    #[tokio::test]
    async fn test_issues_count_requests_per_provider() {
        let chuck = constant_mock(Provider::ChuckNorris, "Chuck joke.", 5);
        let dad = constant_mock(Provider::DadJoke, "Dad joke.", 5);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        let result = service.get_paired_jokes(5).await.unwrap();

        assert_eq!(result.len(), 5);
    }

    #[tokio::test]
    async fn test_one_success_against_five_yields_one_pair() {
        let chuck = ScriptedSource::new(
            Provider::ChuckNorris,
            vec![None, None, Some("Lonely chuck."), None, None],
        );
        let dad = constant_mock(Provider::DadJoke, "Dad joke.", 5);
        let service = PairedJokesService::new(chuck.clone(), Arc::new(dad));

        let result = service.get_paired_jokes(5).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].first.as_str(), "Lonely chuck.");
        assert_eq!(chuck.calls(), 5);
    }

    #[tokio::test]
    async fn test_result_length_is_min_of_successes() {
        let chuck = ScriptedSource::new(
            Provider::ChuckNorris,
            vec![Some("c1."), None, Some("c3."), Some("c4."), Some("c5.")],
        );
        let dad = ScriptedSource::new(
            Provider::DadJoke,
            vec![None, Some("d2."), None, Some("d4."), None],
        );
        let service = PairedJokesService::new(chuck, dad);

        let result = service.get_paired_jokes(5).await.unwrap();

        let pairs: Vec<(&str, &str)> = result
            .iter()
            .map(|p| (p.first.as_str(), p.second.as_str()))
            .collect();
        assert_eq!(pairs, vec![("c1.", "d2."), ("c3.", "d4.")]);
    }

    #[tokio::test]
    async fn test_first_side_total_failure_is_error() {
        let chuck = failing_mock(Provider::ChuckNorris, 5);
        let dad = constant_mock(Provider::DadJoke, "Dad joke.", 5);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        let result = service.get_paired_jokes(5).await;

        assert_eq!(
            result.unwrap_err(),
            AggregationError::InsufficientJokes {
                first: 0,
                second: 5
            }
        );
    }

    #[tokio::test]
    async fn test_second_side_total_failure_is_error() {
        let chuck = constant_mock(Provider::ChuckNorris, "Chuck joke.", 5);
        let dad = failing_mock(Provider::DadJoke, 5);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        let result = service.get_paired_jokes(5).await;

        assert!(matches!(
            result,
            Err(AggregationError::InsufficientJokes { first: 5, second: 0 })
        ));
    }

    #[tokio::test]
    async fn test_both_sides_failing_is_error() {
        let chuck = failing_mock(Provider::ChuckNorris, 5);
        let dad = failing_mock(Provider::DadJoke, 5);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        assert!(service.get_paired_jokes(5).await.is_err());
    }

    #[tokio::test]
    async fn test_count_is_parameterizable() {
        let chuck = constant_mock(Provider::ChuckNorris, "Chuck joke.", 3);
        let dad = constant_mock(Provider::DadJoke, "Dad joke.", 3);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        let result = service.get_paired_jokes(3).await.unwrap();

        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_count_is_error() {
        let chuck = constant_mock(Provider::ChuckNorris, "Chuck joke.", 0);
        let dad = constant_mock(Provider::DadJoke, "Dad joke.", 0);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        assert!(service.get_paired_jokes(0).await.is_err());
    }

    #[tokio::test]
    async fn test_combined_matches_combiner() {
        let chuck = constant_mock(Provider::ChuckNorris, "Setup line. Extra.", 1);
        let dad = constant_mock(Provider::DadJoke, "Is this a question? Yes it is.", 1);
        let service = PairedJokesService::new(Arc::new(chuck), Arc::new(dad));

        let result = service.get_paired_jokes(1).await.unwrap();

        assert_eq!(
            result[0].combined.as_str(),
            "Setup line. Meanwhile, yes it is."
        );
    }

    /// Sleeps before every answer so overlapping calls are visible in
    /// wall-clock time.
    struct SlowSource {
        provider: Provider,
        delay: Duration,
        in_flight: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl JokeSource for SlowSource {
        fn provider(&self) -> Provider {
            self.provider
        }

        async fn fetch_one(&self) -> Result<Joke, UpstreamError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Joke::new("Slow joke? Sure.").unwrap())
        }
    }

    #[tokio::test]
    async fn test_both_providers_are_fetched_concurrently() {
        let delay = Duration::from_millis(200);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let source = |provider| {
            Arc::new(SlowSource {
                provider,
                delay,
                in_flight: Arc::clone(&in_flight),
                peak: Arc::clone(&peak),
            })
        };
        let service = PairedJokesService::new(
            source(Provider::ChuckNorris),
            source(Provider::DadJoke),
        );

        let started = Instant::now();
        let result = service.get_paired_jokes(5).await.unwrap();

        // One batch after the other would take at least two delays.
        assert!(started.elapsed() < delay * 3 / 2);
        assert_eq!(peak.load(Ordering::SeqCst), 10);
        assert_eq!(result.len(), 5);
    }
}
