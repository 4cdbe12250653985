//! Joke entity wrapping the text returned by a provider.

use serde::Serialize;
use std::fmt;

/// Error returned when constructing a [`Joke`] from blank text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("joke text must not be blank")]
pub struct BlankJokeError;

/// Opaque, non-blank joke text.
///
/// The only structure assumed is sentence punctuation, which the
/// [`crate::domain::combiner`] relies on. Serializes as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Joke(String);

impl Joke {
    /// Creates a joke, rejecting empty or whitespace-only text.
    ///
    /// The text is stored as given; surrounding whitespace is not trimmed.
    pub fn new(text: impl Into<String>) -> Result<Self, BlankJokeError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(BlankJokeError);
        }
        Ok(Self(text))
    }

    /// Wraps text produced by the combiner, which is never blank.
    pub(crate) fn stitched(text: String) -> Self {
        debug_assert!(!text.trim().is_empty());
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Joke {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Joke {
    type Error = BlankJokeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Joke {
    type Error = BlankJokeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
