//! # sealant
//!
//! An authenticated symmetric encryption core for sealed message envelopes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sealant = "0.4"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support and the OS random source
//! - `serde`: Serialization support for the pure-data descriptor types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`sealant-api`]: Capability traits, error types, and typed byte
//!   containers
//! - [`sealant-params`]: Size constants for the supported algorithms
//! - [`sealant-symmetric`]: The AES-GCM content encryption core
//!
//! ## Example
//!
//! ```
//! use sealant::prelude::*;
//!
//! fn seal() -> Result<()> {
//!     let encrypter = AesGcmEncrypter::new(SymmetricKeyAlgorithm::A256Gcm);
//!     let key = SymmetricKey::generate(SymmetricKeyAlgorithm::A256Gcm, &OsRandom)?;
//!
//!     let context = encrypter.encrypt(b"message body", key.as_bytes(), b"header")?;
//!
//!     // ciphertext, tag, and initialization vector travel separately
//!     let plaintext = encrypter.decrypt(
//!         &context.ciphertext,
//!         key.as_bytes(),
//!         b"header",
//!         context.initialization_vector.as_ref(),
//!         context.authentication_tag.as_ref(),
//!     )?;
//!     assert_eq!(plaintext, b"message body");
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use sealant_api as api;
pub use sealant_params as params;
pub use sealant_symmetric as symmetric;

/// Common imports for sealant users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export capability traits
    pub use crate::api::{AeadCipher, SecureRandom};

    // Re-export typed byte containers
    pub use crate::api::types::{Nonce, SecretVec, Tag};

    // Re-export the content encryption core
    pub use crate::symmetric::{
        AesGcmEncrypter, ContentEncrypter, GcmBackend, GcmNonce, GcmTag, KeyedAesGcm,
        SymmetricEncryptionContext, SymmetricKey, SymmetricKeyAlgorithm,
    };

    // Conditional re-exports based on features
    #[cfg(feature = "std")]
    pub use crate::symmetric::OsRandom;
}
