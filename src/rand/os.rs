//! OS CSPRNG word source (getrandom(2), BCryptGenRandom, etc).

use zeroize::Zeroize;

use super::WordSource;
use crate::error::Result;

/// Draws every word straight from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl WordSource for OsRandom {
    #[inline]
    fn next_word(&mut self) -> Result<usize> {
        let mut bytes = [0u8; size_of::<usize>()];
        getrandom::fill(&mut bytes)?;
        let word = usize::from_ne_bytes(bytes);
        bytes.zeroize();
        Ok(word)
    }
}
