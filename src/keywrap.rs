//! AES key wrap (RFC 3394) under fixed, width-specific key-encrypting keys.
//!
//! KNOWN WEAKNESS: the three KEKs below are compiled-in constants, not
//! secrets distributed out of band. Anyone holding this crate can unwrap
//! any wrapped key. They are kept byte-for-byte so previously issued
//! wrapped keys keep unwrapping.

use aes_kw::{KekAes128, KekAes192, KekAes256};
use zeroize::Zeroizing;

use crate::algorithm::KeySize;
use crate::error::{Error, Result};

pub const KEK_128: [u8; 16] = *b"com.ddec.subrosa";
pub const KEK_192: [u8; 24] = *b"$#@%com.ddec.subrosa%@#$";
pub const KEK_256: [u8; 32] = *b"$#@%com@&._*ddec*_.&@subrosa%@#$";

/// The KEK selected by a key size. Cheap to build; never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kek {
    key_size: KeySize,
}

impl Kek {
    pub fn for_size(key_size: KeySize) -> Self {
        Self { key_size }
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Wrap raw key material. Length must be a multiple of 8, at least 16.
    pub fn wrap(&self, raw_key: &[u8]) -> Result<Vec<u8>> {
        let wrapped = match self.key_size {
            KeySize::Bits128 => KekAes128::from(KEK_128).wrap_vec(raw_key),
            KeySize::Bits192 => KekAes192::from(KEK_192).wrap_vec(raw_key),
            KeySize::Bits256 => KekAes256::from(KEK_256).wrap_vec(raw_key),
        };
        wrapped.map_err(|_| Error::MalformedInput)
    }

    /// Unwrap to raw key material.
    pub fn unwrap(&self, wrapped: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let raw = match self.key_size {
            KeySize::Bits128 => KekAes128::from(KEK_128).unwrap_vec(wrapped),
            KeySize::Bits192 => KekAes192::from(KEK_192).unwrap_vec(wrapped),
            KeySize::Bits256 => KekAes256::from(KEK_256).unwrap_vec(wrapped),
        };
        raw.map(Zeroizing::new).map_err(|_| Error::UnwrapFailure)
    }
}
