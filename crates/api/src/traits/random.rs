//! Secure random source capability

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::Result;

/// A source of cryptographically secure random bytes.
///
/// Implementors must be safe for concurrent callers: byte sequences handed
/// to simultaneous requests must never overlap or correlate. A source that
/// cannot satisfy a request fails with a typed error; it must never fall
/// back to a weaker generator.
pub trait SecureRandom {
    /// Fills `dest` with cryptographically secure random bytes
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Generates `count` cryptographically secure random bytes
    fn generate(&self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}
