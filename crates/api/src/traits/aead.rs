//! Detached-tag authenticated encryption capability

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

/// Trait for authenticated encryption primitives with detached tags.
///
/// The primitive returns ciphertext and authentication tag as two separate
/// values so callers can serialize each component independently. A backend
/// that only offers combined output must split the trailing tag off before
/// returning; that split never leaks past this boundary.
pub trait AeadCipher {
    /// The nonce/IV type used by this cipher
    type Nonce;

    /// The authentication tag type produced by this cipher
    type Tag;

    /// Encrypts plaintext under (key, nonce, aad), returning ciphertext
    /// and detached tag
    ///
    /// The ciphertext has exactly the plaintext's length; no padding is
    /// applied.
    fn seal_detached(
        &self,
        key: &[u8],
        nonce: &Self::Nonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Self::Tag)>;

    /// Verifies the tag against (key, nonce, aad, ciphertext), then
    /// decrypts
    ///
    /// Returns an error if authentication fails; no plaintext bytes are
    /// released in that case.
    fn open_detached(
        &self,
        key: &[u8],
        nonce: &Self::Nonce,
        aad: &[u8],
        ciphertext: &[u8],
        tag: &Self::Tag,
    ) -> Result<Vec<u8>>;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}
