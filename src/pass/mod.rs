//! Password generation and output.

mod buffer;
pub mod charset;
mod generate;
mod output;

pub use buffer::SecretBuf;
pub use generate::generate;
pub use output::write_line;
