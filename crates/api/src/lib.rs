//! Public API traits and types for the sealant library
//!
//! This crate provides the public API surface for the sealant ecosystem,
//! including trait definitions, error types, and common types used
//! throughout the library.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{AeadCipher, SecureRandom};
