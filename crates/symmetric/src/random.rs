//! Operating-system random source
//!
//! Default `SecureRandom` implementation backed by the operating system's
//! entropy source via `rand::rngs::OsRng`. `OsRng` is safe for concurrent
//! use, so one `OsRandom` value may serve any number of simultaneous
//! encryption calls.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};
use sealant_api::traits::SecureRandom;

/// Secure random source backed by the operating system
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        // Entropy failure is terminal for the call; no weaker fallback.
        OsRng.try_fill_bytes(dest).map_err(|e| Error::RandomGeneration {
            context: "OsRng",
            message: e.to_string(),
        })
    }
}
