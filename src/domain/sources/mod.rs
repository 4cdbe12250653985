//! Source trait definitions for the domain layer.
//!
//! Each upstream provider is reached through a [`JokeSource`]. Concrete HTTP
//! clients live in `crate::infrastructure::sources`; mock implementations are
//! auto-generated via `mockall` for testing.

pub mod joke_source;

pub use joke_source::{JokeSource, UpstreamError};

#[cfg(test)]
pub use joke_source::MockJokeSource;
