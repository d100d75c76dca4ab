//! SHA-2 engine. "Encryption" is a one-way digest returned as lowercase
//! hex text bytes; nothing else is supported.

use sha2::{Digest, Sha256, Sha384, Sha512};

use super::{Confidentiality, KeyGeneration};
use crate::algorithm::HashWidth;
use crate::batch;
use crate::error::{Error, OrAbsent, Result};
use crate::types::EncryptionRequest;

#[derive(Clone, Copy, Debug)]
pub struct HashEngine {
    hash: HashWidth,
}

impl HashEngine {
    pub fn new(hash: HashWidth) -> Self {
        Self { hash }
    }

    pub fn hash_text(&self, text: &str) -> String {
        match self.hash {
            HashWidth::Bits256 => hex::encode(Sha256::digest(text.as_bytes())),
            HashWidth::Bits384 => hex::encode(Sha384::digest(text.as_bytes())),
            HashWidth::Bits512 => hex::encode(Sha512::digest(text.as_bytes())),
        }
    }

    fn digest_request(&self, request: &EncryptionRequest) -> Result<Vec<u8>> {
        if request.key.is_some() {
            return Err(Error::UnexpectedKey);
        }
        Ok(self.hash_text(&request.text).into_bytes())
    }
}

impl Confidentiality for HashEngine {
    async fn encrypt(&self, request: &EncryptionRequest) -> Option<Vec<u8>> {
        self.digest_request(request).or_absent("hash")
    }

    async fn encrypt_many(&self, requests: Vec<EncryptionRequest>) -> Option<Vec<Vec<u8>>> {
        let expected = requests.len();
        let engine = *self;
        batch::collect_all(requests, expected, move |request| async move {
            engine.digest_request(&request).or_absent("hash")
        })
        .await
    }
}

impl KeyGeneration for HashEngine {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DecryptionRequest, SharedSecret};
    use proptest::prelude::*;

    #[test]
    fn known_digests() {
        assert_eq!(
            HashEngine::new(HashWidth::Bits256).hash_text("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            HashEngine::new(HashWidth::Bits384).hash_text("abc"),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            HashEngine::new(HashWidth::Bits512).hash_text("abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[tokio::test]
    async fn digest_is_hex_text() {
        let engine = HashEngine::new(HashWidth::Bits512);
        let out = engine.encrypt(&EncryptionRequest::keyless("")).await.unwrap();
        assert_eq!(out.len(), 128);
        assert!(out.iter().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b)));
    }

    #[tokio::test]
    async fn key_is_rejected() {
        let engine = HashEngine::new(HashWidth::Bits256);
        let request = EncryptionRequest::with_key("abc", vec![0u8; 40]);
        assert!(engine.encrypt(&request).await.is_none());
        assert_eq!(engine.digest_request(&request).unwrap_err(), Error::UnexpectedKey);
    }

    #[tokio::test]
    async fn everything_else_is_absent() {
        let engine = HashEngine::new(HashWidth::Bits384);
        assert!(engine
            .decrypt(&DecryptionRequest::new(b"abc".to_vec(), None))
            .await
            .is_none());
        assert!(engine.decrypt_many(vec![]).await.is_none());
        assert!(engine.generate_key(None).await.is_none());
        assert!(engine
            .generate_key(Some(&SharedSecret::for_peer(&[1; 32], &[2; 32], b"s")))
            .await
            .is_none());
        assert!(engine.generate_keys(2, None).await.is_none());
        assert!(engine.generate_key_pair().await.is_none());
        assert!(engine.generate_key_pairs(2).await.is_none());
        assert!(engine.generate_salt().await.is_none());
        assert!(engine.generate_salts(2).await.is_none());
    }

    proptest! {
        #[test]
        fn digest_is_stable_and_sized(text in ".*", idx in 0usize..3) {
            let hash = [HashWidth::Bits256, HashWidth::Bits384, HashWidth::Bits512][idx];
            let engine = HashEngine::new(hash);
            let digest = engine.hash_text(&text);
            prop_assert_eq!(digest.len(), hash.bits() as usize / 4);
            prop_assert_eq!(digest, engine.hash_text(&text));
        }
    }
}
