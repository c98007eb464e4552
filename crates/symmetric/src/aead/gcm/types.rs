//! GCM-specific types

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use sealant_api::types::{Nonce, Tag};
use sealant_params::{GCM_IV_SIZE, GCM_TAG_SIZE};

/// 96-bit GCM initialization vector
pub type GcmNonce = Nonce<GCM_IV_SIZE>;

/// 128-bit GCM authentication tag
pub type GcmTag = Tag<GCM_TAG_SIZE>;

/// Result of one authenticated encryption operation
///
/// Bundles the three components an envelope format serializes
/// independently. The ciphertext has exactly the plaintext's length; the
/// initialization vector is returned because decryption requires the same
/// vector that encryption consumed.
#[derive(Clone, Debug)]
pub struct SymmetricEncryptionContext {
    /// Encrypted payload, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Detached authentication tag over ciphertext and associated data
    pub authentication_tag: GcmTag,
    /// Initialization vector generated for this operation
    pub initialization_vector: GcmNonce,
}

impl SymmetricEncryptionContext {
    /// Creates a new context from its three components
    pub fn new(
        ciphertext: Vec<u8>,
        authentication_tag: GcmTag,
        initialization_vector: GcmNonce,
    ) -> Self {
        Self {
            ciphertext,
            authentication_tag,
            initialization_vector,
        }
    }
}
