//! Error type for password generation and output.

use thiserror::Error;

/// Fatal errors. Parse problems are not here; they are reported and recovered
/// in `cli::parse`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No character classes enabled")]
    EmptyCharset,

    #[error("Failed to get random: {0}")]
    Random(#[from] getrandom::Error),

    #[error("Failed to allocate {0} bytes for password")]
    Alloc(usize),

    #[error("Failed to write password: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
