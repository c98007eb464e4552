//! Authenticated encryption with associated data (AEAD)

pub mod gcm;
