//! Password output.

use std::io::Write;

use super::SecretBuf;
use crate::error::Result;

/// Write the password as one line and flush.
///
/// The terminator goes into the reserved tail of `pass` so the whole line is a
/// single `write_all`; a newline-terminated write bypasses stdout's line
/// buffer, leaving no copy behind in it.
pub fn write_line<W: Write>(out: &mut W, mut pass: SecretBuf) -> Result<()> {
    pass.push(b'\n');
    out.write_all(pass.as_bytes())?;
    out.flush()?;
    tracing::debug!(bytes = pass.len(), "password written");
    Ok(())
}
