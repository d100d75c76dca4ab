//! X25519 agreement engine.
//!
//! Derives an AES key from own private key + peer public key + salt, then
//! hands it to an internal [`SymmetricEngine`] to be wrapped. Encryption
//! and decryption go straight to that engine, so a derived key is
//! interchangeable with one from the AES path of the same width.
//!
//! No signing happens here; this is key agreement only.

use rand_core::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use super::{Confidentiality, KeyGeneration, SymmetricEngine};
use crate::algorithm::{HashWidth, KeySize};
use crate::error::{Error, OrAbsent, Result};
use crate::types::{DecryptionRequest, EncryptionRequest, KeyPair, SharedSecret};
use crate::{batch, kdf, salt};

#[derive(Clone, Debug)]
pub struct AgreementEngine {
    hash: HashWidth,
    symmetric: SymmetricEngine,
}

impl AgreementEngine {
    pub fn new(hash: HashWidth, key_size: KeySize) -> Self {
        Self {
            hash,
            symmetric: SymmetricEngine::new(key_size),
        }
    }

    fn key_pair() -> KeyPair {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        let private = Zeroizing::new(secret.to_bytes());
        KeyPair::new(private.to_vec(), Some(public.to_bytes().to_vec()))
    }

    /// A.private + B.public and B.private + A.public with the same salt
    /// produce byte-identical wrapped keys.
    fn derive_wrapped_key(&self, shared_secret: Option<&SharedSecret>) -> Result<Vec<u8>> {
        let secret = shared_secret.ok_or(Error::MissingKey)?;
        let peer_public_key = secret.key_pair.public_key.as_deref().ok_or(Error::MissingKey)?;
        let salt = secret.salt.as_deref().ok_or(Error::MissingKey)?;

        let raw = kdf::agree(&secret.key_pair.private_key, peer_public_key)?;
        let derived = kdf::derive_key(self.hash, &raw[..], salt)?;
        self.symmetric
            .wrapped_key(Some(&SharedSecret::raw_key(&derived[..])))
    }
}

impl Confidentiality for AgreementEngine {
    async fn encrypt(&self, request: &EncryptionRequest) -> Option<Vec<u8>> {
        self.symmetric.encrypt(request).await
    }

    async fn encrypt_many(&self, requests: Vec<EncryptionRequest>) -> Option<Vec<Vec<u8>>> {
        self.symmetric.encrypt_many(requests).await
    }

    async fn decrypt(&self, request: &DecryptionRequest) -> Option<String> {
        self.symmetric.decrypt(request).await
    }

    async fn decrypt_many(&self, requests: Vec<DecryptionRequest>) -> Option<Vec<String>> {
        self.symmetric.decrypt_many(requests).await
    }
}

impl KeyGeneration for AgreementEngine {
    async fn generate_key(&self, shared_secret: Option<&SharedSecret>) -> Option<Vec<u8>> {
        self.derive_wrapped_key(shared_secret).or_absent("generate_key")
    }

    /// One derivation per shared secret; `count` must match how many succeed.
    async fn generate_keys(
        &self,
        count: usize,
        shared_secrets: Option<Vec<SharedSecret>>,
    ) -> Option<Vec<Vec<u8>>> {
        let Some(shared_secrets) = shared_secrets else {
            return Err(Error::MissingKey).or_absent("generate_keys");
        };
        batch::collect_all(shared_secrets, count, |secret| {
            let engine = self.clone();
            async move {
                engine
                    .derive_wrapped_key(Some(&secret))
                    .or_absent("generate_key")
            }
        })
        .await
    }

    async fn generate_key_pair(&self) -> Option<KeyPair> {
        Some(Self::key_pair())
    }

    async fn generate_key_pairs(&self, count: usize) -> Option<Vec<KeyPair>> {
        if count == 0 {
            return Err(Error::MalformedInput).or_absent("generate_key_pairs");
        }
        batch::collect_all(0..count, count, |_| async { Some(Self::key_pair()) }).await
    }

    async fn generate_salt(&self) -> Option<Vec<u8>> {
        salt::generate().await.or_absent("generate_salt")
    }

    async fn generate_salts(&self, count: usize) -> Option<Vec<Vec<u8>>> {
        if count == 0 {
            return Err(Error::MalformedInput).or_absent("generate_salts");
        }
        batch::collect_all(0..count, count, |_| async {
            salt::generate().await.or_absent("generate_salt")
        })
        .await
    }
}
