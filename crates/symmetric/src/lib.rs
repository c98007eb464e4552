//! Authenticated symmetric encryption for the sealant library
//!
//! This crate provides the AES-GCM content encryption core used by sealed
//! message envelopes: a single-call authenticated-encryption operation that
//! returns ciphertext, a detached authentication tag, and the freshly
//! generated initialization vector as separately serializable components.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod aead;
pub mod algorithm;
pub mod cipher;
pub mod error;
pub mod keys;
#[cfg(feature = "std")]
pub mod random;

// Re-export main types for convenience
pub use aead::gcm::{AesGcmEncrypter, GcmBackend, GcmNonce, GcmTag, KeyedAesGcm, SymmetricEncryptionContext};
pub use algorithm::SymmetricKeyAlgorithm;
pub use cipher::ContentEncrypter;
pub use keys::SymmetricKey;
#[cfg(feature = "std")]
pub use random::OsRandom;

// Re-export the API error system instead of custom error types
pub use sealant_api::error::{Error, Result};

// Re-export commonly used validation utilities
pub use sealant_api::error::validate;
