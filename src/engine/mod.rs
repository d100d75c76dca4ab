//! The three engines behind the façade and the capability traits they share.
//!
//! Every method has an "absent" default, so an engine only implements what
//! its algorithm family supports and everything else uniformly reports
//! `None`.

mod agreement;
mod hash;
mod symmetric;

pub use agreement::AgreementEngine;
pub use hash::HashEngine;
pub use symmetric::SymmetricEngine;

use crate::types::{DecryptionRequest, EncryptionRequest, KeyPair, SharedSecret};

/// Encrypt / decrypt, singular and batched.
pub(crate) trait Confidentiality {
    async fn encrypt(&self, request: &EncryptionRequest) -> Option<Vec<u8>>;

    async fn encrypt_many(&self, requests: Vec<EncryptionRequest>) -> Option<Vec<Vec<u8>>>;

    async fn decrypt(&self, _request: &DecryptionRequest) -> Option<String> {
        None
    }

    async fn decrypt_many(&self, _requests: Vec<DecryptionRequest>) -> Option<Vec<String>> {
        None
    }
}

/// Key, key pair, and salt generation.
pub(crate) trait KeyGeneration {
    async fn generate_key(&self, _shared_secret: Option<&SharedSecret>) -> Option<Vec<u8>> {
        None
    }

    async fn generate_keys(
        &self,
        _count: usize,
        _shared_secrets: Option<Vec<SharedSecret>>,
    ) -> Option<Vec<Vec<u8>>> {
        None
    }

    async fn generate_key_pair(&self) -> Option<KeyPair> {
        None
    }

    async fn generate_key_pairs(&self, _count: usize) -> Option<Vec<KeyPair>> {
        None
    }

    async fn generate_salt(&self) -> Option<Vec<u8>> {
        None
    }

    async fn generate_salts(&self, _count: usize) -> Option<Vec<Vec<u8>>> {
        None
    }
}
