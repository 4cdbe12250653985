//! Paired joke value object.

use super::Joke;

/// Two source jokes and the hybrid joke stitched from them.
///
/// `first` supplies the setup and `second` the punchline. Only ever built from
/// successful fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedJoke {
    pub first: Joke,
    pub second: Joke,
    pub combined: Joke,
}

impl PairedJoke {
    pub fn new(first: Joke, second: Joke, combined: Joke) -> Self {
        Self {
            first,
            second,
            combined,
        }
    }
}
