//! Upstream joke provider identifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Error returned when a provider name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown joke source '{0}', expected 'chuck' or 'dad'")]
pub struct UnknownProviderError(pub String);

/// One of the two external joke providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Provider {
    /// `api.chucknorris.io`, answers with a `value` field.
    #[serde(rename = "chuck")]
    ChuckNorris,
    /// `icanhazdadjoke.com`, answers with a `joke` field.
    #[serde(rename = "dad")]
    DadJoke,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::ChuckNorris, Provider::DadJoke];

    /// Stable identifier used in URLs, logs and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::ChuckNorris => "chuck",
            Provider::DadJoke => "dad",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::ChuckNorris => "Chuck Norris",
            Provider::DadJoke => "Dad Jokes",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = UnknownProviderError;

    /// Parses a provider name case-insensitively.
    ///
    /// Accepts `chuck`, `chucknorris`, `chuck-norris`, `dad`, `dadjoke` and `dad-joke`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chuck" | "chucknorris" | "chuck-norris" => Ok(Provider::ChuckNorris),
            "dad" | "dadjoke" | "dad-joke" => Ok(Provider::DadJoke),
            _ => Err(UnknownProviderError(s.to_string())),
        }
    }
}
