//! AEAD: AES-GCM (128/192/256, chosen by key length)

use aes_gcm::{
    aead::{consts::U12, Aead, KeyInit},
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm,
};
use getrandom::getrandom;

use crate::error::{Error, Result};
use crate::wire::{self, NONCE_BYTES};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Generate a random 12-byte nonce. Used during encryption only.
pub fn nonce() -> Result<[u8; NONCE_BYTES]> {
    let mut n = [0u8; NONCE_BYTES];
    getrandom(&mut n).map_err(|_| Error::Randomness)?;
    Ok(n)
}

/// Seal `plaintext` under `key`, returning `nonce || ciphertext || tag`.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let nonce = nonce()?;
    let sealed = match key.len() {
        16 => seal_with::<Aes128Gcm>(key, &nonce, plaintext)?,
        24 => seal_with::<Aes192Gcm>(key, &nonce, plaintext)?,
        32 => seal_with::<Aes256Gcm>(key, &nonce, plaintext)?,
        _ => return Err(Error::MalformedInput),
    };
    wire::encode_sealed(&nonce, &sealed)
}

/// Open a combined sealed box.
pub fn open(key: &[u8], combined: &[u8]) -> Result<Vec<u8>> {
    let parts = wire::decode_sealed(combined)?;
    match key.len() {
        16 => open_with::<Aes128Gcm>(key, parts.nonce, parts.ciphertext_and_tag),
        24 => open_with::<Aes192Gcm>(key, parts.nonce, parts.ciphertext_and_tag),
        32 => open_with::<Aes256Gcm>(key, parts.nonce, parts.ciphertext_and_tag),
        _ => Err(Error::MalformedInput),
    }
}

fn seal_with<C>(key: &[u8], nonce: &[u8; NONCE_BYTES], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| Error::MalformedInput)?;
    let n = aes_gcm::aead::Nonce::<C>::from_slice(nonce);
    cipher.encrypt(n, plaintext).map_err(|_| Error::MalformedInput)
}

fn open_with<C>(key: &[u8], nonce: &[u8; NONCE_BYTES], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| Error::MalformedInput)?;
    let n = aes_gcm::aead::Nonce::<C>::from_slice(nonce);
    cipher
        .decrypt(n, ciphertext)
        .map_err(|_| Error::AuthenticationFailure)
}
