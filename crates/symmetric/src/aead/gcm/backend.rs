//! Default AES-GCM cipher backend
//!
//! Implements the detached-tag AEAD capability on top of the RustCrypto
//! `aes-gcm` crate. Tag verification inside the primitive is constant time
//! and happens before any plaintext is produced.

#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString, vec::Vec};

use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};

use super::types::{GcmNonce, GcmTag};
use crate::error::{Error, Result};
use sealant_api::traits::AeadCipher;
use sealant_params::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

/// AES-192-GCM, not aliased by the aes-gcm crate itself
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Detached-tag AES-GCM backend dispatching on key length
#[derive(Clone, Copy, Debug, Default)]
pub struct GcmBackend;

impl AeadCipher for GcmBackend {
    type Nonce = GcmNonce;
    type Tag = GcmTag;

    fn seal_detached(
        &self,
        key: &[u8],
        nonce: &GcmNonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, GcmTag)> {
        match key.len() {
            AES128_KEY_SIZE => seal_with::<Aes128Gcm>("AES-128-GCM", key, nonce, aad, plaintext),
            AES192_KEY_SIZE => seal_with::<Aes192Gcm>("AES-192-GCM", key, nonce, aad, plaintext),
            AES256_KEY_SIZE => seal_with::<Aes256Gcm>("AES-256-GCM", key, nonce, aad, plaintext),
            other => Err(unsupported_key_length(other)),
        }
    }

    fn open_detached(
        &self,
        key: &[u8],
        nonce: &GcmNonce,
        aad: &[u8],
        ciphertext: &[u8],
        tag: &GcmTag,
    ) -> Result<Vec<u8>> {
        match key.len() {
            AES128_KEY_SIZE => open_with::<Aes128Gcm>("AES-128-GCM", key, nonce, aad, ciphertext, tag),
            AES192_KEY_SIZE => open_with::<Aes192Gcm>("AES-192-GCM", key, nonce, aad, ciphertext, tag),
            AES256_KEY_SIZE => open_with::<Aes256Gcm>("AES-256-GCM", key, nonce, aad, ciphertext, tag),
            other => Err(unsupported_key_length(other)),
        }
    }

    fn name() -> &'static str {
        "AES-GCM"
    }
}

fn seal_with<C>(
    algorithm: &'static str,
    key: &[u8],
    nonce: &GcmNonce,
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, GcmTag)>
where
    C: KeyInit + AeadInPlace + AeadCore<NonceSize = U12, TagSize = U16>,
{
    let cipher = C::new_from_slice(key).map_err(|e| Error::Encryption {
        context: algorithm,
        message: e.to_string(),
    })?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(aes_gcm::Nonce::from_slice(nonce.as_ref()), aad, &mut buffer)
        .map_err(|_| Error::Encryption {
            context: algorithm,
            message: "cipher rejected input".to_string(),
        })?;

    Ok((buffer, GcmTag::from_slice(tag.as_slice())?))
}

fn open_with<C>(
    algorithm: &'static str,
    key: &[u8],
    nonce: &GcmNonce,
    aad: &[u8],
    ciphertext: &[u8],
    tag: &GcmTag,
) -> Result<Vec<u8>>
where
    C: KeyInit + AeadInPlace + AeadCore<NonceSize = U12, TagSize = U16>,
{
    let cipher = C::new_from_slice(key).map_err(|e| Error::Encryption {
        context: algorithm,
        message: e.to_string(),
    })?;

    // Verify-then-decrypt: on tag mismatch the buffer still holds
    // ciphertext and is dropped here, so no plaintext ever escapes.
    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            aes_gcm::Nonce::from_slice(nonce.as_ref()),
            aad,
            &mut buffer,
            aes_gcm::Tag::from_slice(tag.as_ref()),
        )
        .map_err(|_| Error::AuthenticationFailed { context: algorithm })?;

    Ok(buffer)
}

fn unsupported_key_length(actual: usize) -> Error {
    Error::InvalidParameter {
        context: "AES-GCM key",
        message: format!("unsupported key length {}", actual),
    }
}
