//! Byte layouts.
//!
//! Sealed box (AES-GCM "combined" form):
//!   nonce[12] || ciphertext[n] || tag[16]
//!
//! Wrapped key (RFC 3394):
//!   integrity_block[8] || wrapped_key[key_len]
//!
//! Agreement keys are raw X25519 scalars / points (32 bytes each).

use crate::error::{Error, Result};

pub const NONCE_BYTES: usize = 12;
pub const AEAD_TAG_BYTES: usize = 16;

/// Smallest well-formed sealed box (empty plaintext).
pub const MIN_SEALED_BYTES: usize = NONCE_BYTES + AEAD_TAG_BYTES; // 28

/// RFC 3394 adds one 64-bit integrity block.
pub const KEY_WRAP_OVERHEAD_BYTES: usize = 8;

pub const X25519_KEY_BYTES: usize = 32;

/// HKDF output length, independent of the configured hash width.
pub const DERIVED_KEY_BYTES: usize = 32;

/// Borrowed view of a sealed box.
#[derive(Debug, Clone, Copy)]
pub struct SealedParts<'a> {
    pub nonce: &'a [u8; NONCE_BYTES],
    /// Ciphertext with the tag still attached (what `aes-gcm` expects).
    pub ciphertext_and_tag: &'a [u8],
}

pub fn decode_sealed(data: &[u8]) -> Result<SealedParts<'_>> {
    if data.len() < MIN_SEALED_BYTES {
        return Err(Error::MalformedInput);
    }

    let nonce: &[u8; NONCE_BYTES] = data[..NONCE_BYTES]
        .try_into()
        .map_err(|_| Error::MalformedInput)?;

    Ok(SealedParts {
        nonce,
        ciphertext_and_tag: &data[NONCE_BYTES..],
    })
}

pub fn encode_sealed(nonce: &[u8; NONCE_BYTES], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_and_tag.len() < AEAD_TAG_BYTES {
        return Err(Error::MalformedInput);
    }

    let mut out = Vec::with_capacity(NONCE_BYTES + ciphertext_and_tag.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(ciphertext_and_tag);
    Ok(out)
}

/// Parse a 32-byte X25519 scalar or point.
pub fn x25519_bytes(bytes: &[u8]) -> Result<[u8; X25519_KEY_BYTES]> {
    bytes.try_into().map_err(|_| Error::MalformedInput)
}
