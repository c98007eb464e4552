//! Core types with security guarantees for the sealant library
//!
//! This module provides fundamental type definitions that enforce
//! compile-time and runtime guarantees for cryptographic operations.

pub mod nonce;
pub mod secret;
pub mod tag;

pub use nonce::Nonce;
pub use secret::SecretVec;
pub use tag::Tag;
