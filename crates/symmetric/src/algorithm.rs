//! Symmetric content encryption algorithm descriptors
//!
//! Each variant is pure data: it fixes the key, initialization vector, and
//! authentication tag lengths for one AES-GCM key size. Adding a key size
//! means adding one variant and its params constant, not new code paths.

use core::fmt;

use sealant_params::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, GCM_IV_SIZE, GCM_TAG_SIZE,
};

/// Supported AES-GCM content encryption algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymmetricKeyAlgorithm {
    /// AES-GCM with a 128-bit key
    A128Gcm,
    /// AES-GCM with a 192-bit key
    A192Gcm,
    /// AES-GCM with a 256-bit key
    A256Gcm,
}

impl SymmetricKeyAlgorithm {
    /// Required key length in bytes
    pub const fn key_length(self) -> usize {
        match self {
            Self::A128Gcm => AES128_KEY_SIZE,
            Self::A192Gcm => AES192_KEY_SIZE,
            Self::A256Gcm => AES256_KEY_SIZE,
        }
    }

    /// Initialization vector length in bytes (96-bit nonce for GCM)
    pub const fn iv_length(self) -> usize {
        GCM_IV_SIZE
    }

    /// Authentication tag length in bytes
    pub const fn tag_length(self) -> usize {
        GCM_TAG_SIZE
    }

    /// Canonical algorithm identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::A128Gcm => "A128GCM",
            Self::A192Gcm => "A192GCM",
            Self::A256Gcm => "A256GCM",
        }
    }
}

impl fmt::Display for SymmetricKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_lengths() {
        assert_eq!(SymmetricKeyAlgorithm::A128Gcm.key_length(), 16);
        assert_eq!(SymmetricKeyAlgorithm::A192Gcm.key_length(), 24);
        assert_eq!(SymmetricKeyAlgorithm::A256Gcm.key_length(), 32);

        for algorithm in [
            SymmetricKeyAlgorithm::A128Gcm,
            SymmetricKeyAlgorithm::A192Gcm,
            SymmetricKeyAlgorithm::A256Gcm,
        ] {
            assert_eq!(algorithm.iv_length(), 12);
            assert_eq!(algorithm.tag_length(), 16);
        }
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(SymmetricKeyAlgorithm::A128Gcm.name(), "A128GCM");
        assert_eq!(SymmetricKeyAlgorithm::A192Gcm.name(), "A192GCM");
        assert_eq!(SymmetricKeyAlgorithm::A256Gcm.name(), "A256GCM");
    }
}
