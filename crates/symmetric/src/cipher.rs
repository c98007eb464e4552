//! Content encrypter trait for sealant-symmetric
//!
//! This module defines the caller-facing contract implemented by all
//! content encryption algorithms in the library.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::aead::gcm::SymmetricEncryptionContext;
use crate::algorithm::SymmetricKeyAlgorithm;
use crate::error::Result;

/// Trait for authenticated content encryption with detached tags
///
/// Every call is independent: a fresh initialization vector is generated
/// per encryption and no state is carried between operations.
pub trait ContentEncrypter {
    /// Encrypts plaintext with associated data under the supplied raw key,
    /// generating a fresh initialization vector
    ///
    /// The key is borrowed for the duration of the call only; it is never
    /// retained or logged.
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        additional_authenticated_data: &[u8],
    ) -> Result<SymmetricEncryptionContext>;

    /// Verifies the authentication tag and decrypts ciphertext
    ///
    /// `initialization_vector` and `authentication_tag` are the raw wire
    /// bytes; their lengths are validated against the configured algorithm
    /// before any cryptographic verification. Returns an error if
    /// authentication fails, releasing no plaintext.
    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        additional_authenticated_data: &[u8],
        initialization_vector: &[u8],
        authentication_tag: &[u8],
    ) -> Result<Vec<u8>>;

    /// The algorithm this encrypter is configured for
    fn algorithm(&self) -> SymmetricKeyAlgorithm;
}
