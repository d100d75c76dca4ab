//! KDF + agreement
//!
//! secret = X25519(own_private, peer_public)
//! key    = HKDF-SHA{256|384|512}(ikm = secret, salt = salt, info = "", L = 32)
//!
//! Only the HKDF hash follows the configured width; the output is always
//! 32 bytes.

use hkdf::Hkdf;
use sha2::{Sha256, Sha384, Sha512};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::algorithm::HashWidth;
use crate::error::{Error, Result};
use crate::wire::{self, DERIVED_KEY_BYTES};

/// Raw X25519 shared secret between own private scalar and peer point.
///
/// Non-contributory results (peer sent a low-order point) are rejected.
pub fn agree(private_key: &[u8], peer_public_key: &[u8]) -> Result<Zeroizing<[u8; 32]>> {
    let secret_bytes = Zeroizing::new(wire::x25519_bytes(private_key)?);
    let peer_bytes = wire::x25519_bytes(peer_public_key)?;

    let secret = StaticSecret::from(*secret_bytes);
    let peer = PublicKey::from(peer_bytes);
    let shared = secret.diffie_hellman(&peer);

    if !shared.was_contributory() {
        return Err(Error::MalformedInput);
    }
    Ok(Zeroizing::new(shared.to_bytes()))
}

pub fn derive_key(
    hash: HashWidth,
    secret: &[u8],
    salt: &[u8],
) -> Result<Zeroizing<[u8; DERIVED_KEY_BYTES]>> {
    let mut out = Zeroizing::new([0u8; DERIVED_KEY_BYTES]);
    let expanded = match hash {
        HashWidth::Bits256 => Hkdf::<Sha256>::new(Some(salt), secret).expand(&[], &mut out[..]),
        HashWidth::Bits384 => Hkdf::<Sha384>::new(Some(salt), secret).expand(&[], &mut out[..]),
        HashWidth::Bits512 => Hkdf::<Sha512>::new(Some(salt), secret).expand(&[], &mut out[..]),
    };
    expanded.map_err(|_| Error::MalformedInput)?;
    Ok(out)
}
