//! Fixed-capacity secret buffer, wiped on drop.

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Owns password bytes. Capacity is reserved up front and never grows, so no
/// stale copy is left behind by a reallocation.
pub struct SecretBuf {
    bytes: Vec<u8>,
    locked: bool,
}

impl SecretBuf {
    /// Reserve exactly `capacity` bytes. Fails instead of aborting when the
    /// allocator refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Alloc(capacity))?;

        let locked = mem_lock(&bytes);
        tracing::debug!(capacity, locked, "secret buffer allocated");

        Ok(Self { bytes, locked })
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        debug_assert!(
            self.bytes.len() < self.bytes.capacity(),
            "SecretBuf would reallocate"
        );
        self.bytes.push(byte);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl Zeroize for SecretBuf {
    /// Zeroes the whole allocation, spare capacity included.
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for SecretBuf {
    fn drop(&mut self) {
        self.zeroize();
        if self.locked {
            mem_unlock(&self.bytes);
        }
    }
}

impl std::fmt::Debug for SecretBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBuf")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Page locking
// =============================================================================

#[cfg(unix)]
fn mem_lock(bytes: &Vec<u8>) -> bool {
    if bytes.capacity() == 0 {
        return false;
    }
    unsafe { libc::mlock(bytes.as_ptr() as *const libc::c_void, bytes.capacity()) == 0 }
}

#[cfg(unix)]
fn mem_unlock(bytes: &Vec<u8>) {
    unsafe { libc::munlock(bytes.as_ptr() as *const libc::c_void, bytes.capacity()) };
}

#[cfg(not(unix))]
fn mem_lock(_: &Vec<u8>) -> bool {
    false
}

#[cfg(not(unix))]
fn mem_unlock(_: &Vec<u8>) {}
