//! Capability traits for the sealant ecosystem
//!
//! These traits describe the two capabilities the encryption core consumes
//! from its environment: a cryptographically secure random source and a
//! detached-tag authenticated encryption primitive.

pub mod aead;
pub mod random;

pub use aead::AeadCipher;
pub use random::SecureRandom;
