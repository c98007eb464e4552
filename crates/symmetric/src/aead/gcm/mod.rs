//! AES-GCM authenticated encryption
//!
//! This module provides the AES-GCM content encryption operation as defined
//! in NIST SP 800-38D, with the authentication tag detached from the
//! ciphertext so envelope formats can serialize ciphertext, tag, and
//! initialization vector independently.
//!
//! # Examples
//!
//! ```
//! use sealant_symmetric::{AesGcmEncrypter, ContentEncrypter, SymmetricKeyAlgorithm};
//! use sealant_symmetric::Result;
//!
//! // Example function that handles errors properly
//! fn example() -> Result<()> {
//!     let encrypter = AesGcmEncrypter::new(SymmetricKeyAlgorithm::A256Gcm);
//!
//!     // Encrypt some data
//!     let key = [0u8; 32];
//!     let context = encrypter.encrypt(b"Secret message", &key, b"")?;
//!
//!     // Decrypt it again with the components the context carries
//!     let plaintext = encrypter.decrypt(
//!         &context.ciphertext,
//!         &key,
//!         b"",
//!         context.initialization_vector.as_ref(),
//!         context.authentication_tag.as_ref(),
//!     )?;
//!     assert_eq!(plaintext, b"Secret message");
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::algorithm::SymmetricKeyAlgorithm;
use crate::cipher::ContentEncrypter;
use crate::error::{validate, Result};
use crate::keys::SymmetricKey;
#[cfg(feature = "std")]
use crate::random::OsRandom;
use sealant_api::traits::{AeadCipher, SecureRandom};

pub mod backend;
pub mod types;


// Re-export GCM-specific types
pub use backend::GcmBackend;
pub use types::{GcmNonce, GcmTag, SymmetricEncryptionContext};

/// AES-GCM content encrypter
///
/// Orchestrates one authenticated-encryption operation per call: generate a
/// fresh initialization vector from the random source, run the detached-tag
/// cipher, and hand back ciphertext, tag, and vector together. Stateless
/// between calls and safe to share across threads.
pub struct AesGcmEncrypter<R: SecureRandom, C: AeadCipher<Nonce = GcmNonce, Tag = GcmTag> = GcmBackend> {
    algorithm: SymmetricKeyAlgorithm,
    random: R,
    cipher: C,
}

#[cfg(feature = "std")]
impl AesGcmEncrypter<OsRandom> {
    /// Creates an encrypter using the operating-system random source and
    /// the default cipher backend
    pub fn new(algorithm: SymmetricKeyAlgorithm) -> Self {
        Self::with_capabilities(algorithm, OsRandom, GcmBackend)
    }
}

impl<R, C> AesGcmEncrypter<R, C>
where
    R: SecureRandom,
    C: AeadCipher<Nonce = GcmNonce, Tag = GcmTag>,
{
    /// Creates an encrypter from explicitly injected capabilities
    pub fn with_capabilities(algorithm: SymmetricKeyAlgorithm, random: R, cipher: C) -> Self {
        Self {
            algorithm,
            random,
            cipher,
        }
    }
}

impl<R, C> ContentEncrypter for AesGcmEncrypter<R, C>
where
    R: SecureRandom,
    C: AeadCipher<Nonce = GcmNonce, Tag = GcmTag>,
{
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        additional_authenticated_data: &[u8],
    ) -> Result<SymmetricEncryptionContext> {
        // Key length must hold before any cryptographic work; the key is
        // never truncated or padded to fit.
        validate::key_length(self.algorithm.name(), key.len(), self.algorithm.key_length())?;

        // Fresh initialization vector per call. Reusing a vector under the
        // same key voids every GCM guarantee, so generation failure is
        // terminal and never falls back to a weaker source.
        let iv_bytes = self.random.generate(self.algorithm.iv_length())?;
        let initialization_vector = GcmNonce::from_slice(&iv_bytes)?;

        let (ciphertext, authentication_tag) = self.cipher.seal_detached(
            key,
            &initialization_vector,
            additional_authenticated_data,
            plaintext,
        )?;

        Ok(SymmetricEncryptionContext::new(
            ciphertext,
            authentication_tag,
            initialization_vector,
        ))
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        additional_authenticated_data: &[u8],
        initialization_vector: &[u8],
        authentication_tag: &[u8],
    ) -> Result<Vec<u8>> {
        validate::key_length(self.algorithm.name(), key.len(), self.algorithm.key_length())?;
        validate::length(
            "initialization vector",
            initialization_vector.len(),
            self.algorithm.iv_length(),
        )?;
        validate::length(
            "authentication tag",
            authentication_tag.len(),
            self.algorithm.tag_length(),
        )?;

        let initialization_vector = GcmNonce::from_slice(initialization_vector)?;
        let authentication_tag = GcmTag::from_slice(authentication_tag)?;

        self.cipher.open_detached(
            key,
            &initialization_vector,
            additional_authenticated_data,
            ciphertext,
            &authentication_tag,
        )
    }

    fn algorithm(&self) -> SymmetricKeyAlgorithm {
        self.algorithm
    }
}

/// AES-GCM encrypter bound to a single key
///
/// Convenience handle for callers that encrypt many payloads under one
/// content encryption key. The key length is checked once at construction.
pub struct KeyedAesGcm<R: SecureRandom, C: AeadCipher<Nonce = GcmNonce, Tag = GcmTag> = GcmBackend> {
    encrypter: AesGcmEncrypter<R, C>,
    key: SymmetricKey,
}

#[cfg(feature = "std")]
impl KeyedAesGcm<OsRandom> {
    /// Creates a keyed encrypter using the operating-system random source
    pub fn new(key: SymmetricKey) -> Self {
        Self::with_capabilities(key, OsRandom, GcmBackend)
    }

    /// Generates a fresh random key and binds an encrypter to it
    pub fn generate(algorithm: SymmetricKeyAlgorithm) -> Result<Self> {
        let key = SymmetricKey::generate(algorithm, &OsRandom)?;
        Ok(Self::new(key))
    }
}

impl<R, C> KeyedAesGcm<R, C>
where
    R: SecureRandom,
    C: AeadCipher<Nonce = GcmNonce, Tag = GcmTag>,
{
    /// Creates a keyed encrypter from explicitly injected capabilities
    pub fn with_capabilities(key: SymmetricKey, random: R, cipher: C) -> Self {
        Self {
            encrypter: AesGcmEncrypter::with_capabilities(key.algorithm(), random, cipher),
            key,
        }
    }

    /// Encrypts plaintext under the bound key with a fresh vector
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        additional_authenticated_data: &[u8],
    ) -> Result<SymmetricEncryptionContext> {
        self.encrypter
            .encrypt(plaintext, self.key.as_bytes(), additional_authenticated_data)
    }

    /// Verifies and decrypts ciphertext under the bound key
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        additional_authenticated_data: &[u8],
        initialization_vector: &[u8],
        authentication_tag: &[u8],
    ) -> Result<Vec<u8>> {
        self.encrypter.decrypt(
            ciphertext,
            self.key.as_bytes(),
            additional_authenticated_data,
            initialization_vector,
            authentication_tag,
        )
    }

    /// The algorithm the bound key belongs to
    pub fn algorithm(&self) -> SymmetricKeyAlgorithm {
        self.key.algorithm()
    }

    /// Returns the key used by this instance
    pub fn key(&self) -> &SymmetricKey {
        &self.key
    }
}
