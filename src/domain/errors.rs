//! Errors raised above the level of a single upstream request.

use crate::domain::entities::Provider;
use crate::domain::sources::UpstreamError;
use thiserror::Error;

/// Batch-level failure of an aggregation.
///
/// Individual upstream failures never surface here; this is only raised when
/// one provider produced no joke at all across its batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("could not obtain enough jokes from the external sources")]
    InsufficientJokes {
        /// Successful fetches from the setup source.
        first: usize,
        /// Successful fetches from the punchline source.
        second: usize,
    },
}

/// Failure of a single-joke request.
#[derive(Debug, Error)]
pub enum JokeError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("no source configured for {0}")]
    SourceNotConfigured(Provider),

    #[error("no joke sources configured")]
    NoSources,
}
