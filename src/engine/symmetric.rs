//! AES-GCM engine with wrapped keys.
//!
//! Keys handed to callers are always wrapped under the KEK matching the
//! configured width. Every seal/open first unwraps the caller's key.

use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use super::{Confidentiality, KeyGeneration};
use crate::algorithm::KeySize;
use crate::error::{Error, OrAbsent, Result};
use crate::keywrap::Kek;
use crate::types::{DecryptionRequest, EncryptionRequest, SharedSecret};
use crate::{aead, batch, wire};

#[derive(Clone, Debug)]
pub struct SymmetricEngine {
    kek: Kek,
}

impl SymmetricEngine {
    pub fn new(key_size: KeySize) -> Self {
        Self {
            kek: Kek::for_size(key_size),
        }
    }

    pub fn key_size(&self) -> KeySize {
        self.kek.key_size()
    }

    pub(crate) fn seal_text(&self, text: &str, wrapped_key: &[u8]) -> Result<Vec<u8>> {
        let key = self.kek.unwrap(wrapped_key)?;
        aead::seal(&key, text.as_bytes())
    }

    pub(crate) fn open_text(&self, combined: &[u8], wrapped_key: &[u8]) -> Result<String> {
        wire::decode_sealed(combined)?;
        let key = self.kek.unwrap(wrapped_key)?;
        let plaintext = aead::open(&key, combined)?;
        String::from_utf8(plaintext).map_err(|_| Error::MalformedInput)
    }

    /// Fresh random key when `shared_secret` is `None`; otherwise wrap the
    /// raw key material carried in `shared_secret.key_pair.private_key`.
    pub(crate) fn wrapped_key(&self, shared_secret: Option<&SharedSecret>) -> Result<Vec<u8>> {
        match shared_secret {
            Some(secret) => self.kek.wrap(&secret.key_pair.private_key),
            None => {
                let mut raw = Zeroizing::new(vec![0u8; self.key_size().bytes()]);
                OsRng
                    .try_fill_bytes(&mut raw)
                    .map_err(|_| Error::Randomness)?;
                self.kek.wrap(&raw)
            }
        }
    }

    fn encrypt_request(&self, request: &EncryptionRequest) -> Result<Vec<u8>> {
        let key = request.key.as_deref().ok_or(Error::MissingKey)?;
        self.seal_text(&request.text, key)
    }

    fn decrypt_request(&self, request: &DecryptionRequest) -> Result<String> {
        let key = request.key.as_deref().ok_or(Error::MissingKey)?;
        self.open_text(&request.ciphertext, key)
    }
}

impl Confidentiality for SymmetricEngine {
    async fn encrypt(&self, request: &EncryptionRequest) -> Option<Vec<u8>> {
        self.encrypt_request(request).or_absent("encrypt")
    }

    async fn encrypt_many(&self, requests: Vec<EncryptionRequest>) -> Option<Vec<Vec<u8>>> {
        let expected = requests.len();
        batch::collect_all(requests, expected, |request| {
            let engine = self.clone();
            async move { engine.encrypt_request(&request).or_absent("encrypt") }
        })
        .await
    }

    async fn decrypt(&self, request: &DecryptionRequest) -> Option<String> {
        self.decrypt_request(request).or_absent("decrypt")
    }

    async fn decrypt_many(&self, requests: Vec<DecryptionRequest>) -> Option<Vec<String>> {
        let expected = requests.len();
        batch::collect_all(requests, expected, |request| {
            let engine = self.clone();
            async move { engine.decrypt_request(&request).or_absent("decrypt") }
        })
        .await
    }
}

impl KeyGeneration for SymmetricEngine {
    async fn generate_key(&self, shared_secret: Option<&SharedSecret>) -> Option<Vec<u8>> {
        self.wrapped_key(shared_secret).or_absent("generate_key")
    }

    /// Bulk generation is fresh-random only.
    async fn generate_keys(
        &self,
        count: usize,
        shared_secrets: Option<Vec<SharedSecret>>,
    ) -> Option<Vec<Vec<u8>>> {
        if shared_secrets.is_some() {
            return Err(Error::Unsupported).or_absent("generate_keys");
        }
        if count == 0 {
            return Err(Error::MalformedInput).or_absent("generate_keys");
        }
        batch::collect_all(0..count, count, |_| {
            let engine = self.clone();
            async move { engine.wrapped_key(None).or_absent("generate_key") }
        })
        .await
    }
}
