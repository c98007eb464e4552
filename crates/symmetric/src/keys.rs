//! Key types for content encryption
//!
//! Raw key bytes for a content encryption algorithm, held in a container
//! that is zeroed on drop and redacted in debug output.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::algorithm::SymmetricKeyAlgorithm;
use crate::error::{validate, Result};
use sealant_api::traits::SecureRandom;
use sealant_api::types::SecretVec;

/// Symmetric key material bound to a content encryption algorithm
///
/// The length invariant `bytes.len() == algorithm.key_length()` is enforced
/// at construction, so holders of a `SymmetricKey` never re-check it.
#[derive(Clone)]
pub struct SymmetricKey {
    algorithm: SymmetricKeyAlgorithm,
    bytes: SecretVec,
}

impl SymmetricKey {
    /// Creates a key from raw bytes, validating the length against the
    /// algorithm
    pub fn from_slice(algorithm: SymmetricKeyAlgorithm, bytes: &[u8]) -> Result<Self> {
        validate::key_length(algorithm.name(), bytes.len(), algorithm.key_length())?;
        Ok(Self {
            algorithm,
            bytes: SecretVec::from_slice(bytes),
        })
    }

    /// Creates a key from an owned byte vector, validating the length
    /// against the algorithm
    pub fn new(algorithm: SymmetricKeyAlgorithm, bytes: Vec<u8>) -> Result<Self> {
        validate::key_length(algorithm.name(), bytes.len(), algorithm.key_length())?;
        Ok(Self {
            algorithm,
            bytes: SecretVec::new(bytes),
        })
    }

    /// Generates a fresh random key for the algorithm
    pub fn generate<R: SecureRandom>(
        algorithm: SymmetricKeyAlgorithm,
        random: &R,
    ) -> Result<Self> {
        let bytes = random.generate(algorithm.key_length())?;
        Ok(Self {
            algorithm,
            bytes: SecretVec::new(bytes),
        })
    }

    /// The algorithm this key belongs to
    pub fn algorithm(&self) -> SymmetricKeyAlgorithm {
        self.algorithm
    }

    /// Returns a reference to the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey({})[REDACTED]", self.algorithm.name())
    }
}
