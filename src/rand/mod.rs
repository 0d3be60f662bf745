//! Random index selection over the OS entropy source.

mod os;

use crate::error::{Error, Result};

pub use os::OsRandom;

// =============================================================================
// Word source
// =============================================================================

/// Produces uniformly distributed machine words.
pub trait WordSource {
    fn next_word(&mut self) -> Result<usize>;
}

// =============================================================================
// Rejection sampling
// =============================================================================

/// Uniform index in `[0, limit)`.
///
/// Words at or above the largest multiple of `limit` that fits in a `usize`
/// are discarded and redrawn, so every residue has the same number of
/// preimages. Source errors are returned as-is, never retried.
pub fn rand_below<S: WordSource + ?Sized>(source: &mut S, limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(Error::EmptyCharset);
    }

    let bound = usize::MAX / limit * limit;

    loop {
        let word = source.next_word()?;
        if word < bound {
            return Ok(word % limit);
        }
        tracing::trace!(limit, "rejected draw outside uniform zone");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::WordSource;
    use crate::error::{Error, Result};
    use std::collections::VecDeque;

    /// Replays fixed words, then fails like an exhausted entropy source.
    pub struct Scripted(pub VecDeque<usize>);

    impl Scripted {
        pub fn new(words: impl IntoIterator<Item = usize>) -> Self {
            Self(words.into_iter().collect())
        }
    }

    impl WordSource for Scripted {
        fn next_word(&mut self) -> Result<usize> {
            self.0
                .pop_front()
                .ok_or(Error::Random(getrandom::Error::UNSUPPORTED))
        }
    }

    pub struct Failing {
        pub calls: usize,
    }

    impl WordSource for Failing {
        fn next_word(&mut self) -> Result<usize> {
            self.calls += 1;
            Err(Error::Random(getrandom::Error::UNSUPPORTED))
        }
    }
}
