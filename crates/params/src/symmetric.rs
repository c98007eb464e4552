//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// GCM initialization vector size in bytes (96-bit nonce per NIST SP 800-38D)
pub const GCM_IV_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;
