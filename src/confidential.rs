//! Public façade.
//!
//! One [`Confidential`] is bound to one [`Algorithm`] for its whole life.
//! Every call is forwarded to the engine that algorithm selected; calls
//! the engine does not support return `None`.

use crate::algorithm::Algorithm;
use crate::engine::{AgreementEngine, Confidentiality, HashEngine, KeyGeneration, SymmetricEngine};
use crate::types::{DecryptionRequest, EncryptionRequest, KeyPair, SharedSecret};

#[derive(Clone, Debug)]
enum Engine {
    Symmetric(SymmetricEngine),
    Agreement(AgreementEngine),
    Hash(HashEngine),
}

macro_rules! forward {
    ($engine:expr, $method:ident($($arg:expr),*)) => {
        match $engine {
            Engine::Symmetric(e) => e.$method($($arg),*).await,
            Engine::Agreement(e) => e.$method($($arg),*).await,
            Engine::Hash(e) => e.$method($($arg),*).await,
        }
    };
}

/// Symmetric encryption, key agreement, or hashing behind one surface.
///
/// # Example
///
/// ```
/// use subrosa::{Algorithm, Confidential, DecryptionRequest, EncryptionRequest, KeySize};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let confidential = Confidential::new(Algorithm::Aes { key_size: KeySize::Bits256 });
/// let key = confidential.generate_key(None).await.unwrap();
///
/// let sealed = confidential
///     .encrypt(&EncryptionRequest::with_key("Hello, world!", key.clone()))
///     .await
///     .unwrap();
/// let text = confidential
///     .decrypt(&DecryptionRequest::with_key(sealed, key))
///     .await
///     .unwrap();
///
/// assert_eq!(text, "Hello, world!");
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Confidential {
    algorithm: Algorithm,
    engine: Engine,
}

impl Default for Confidential {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl Confidential {
    pub fn new(algorithm: Algorithm) -> Self {
        let engine = match algorithm {
            Algorithm::Aes { key_size } => Engine::Symmetric(SymmetricEngine::new(key_size)),
            Algorithm::Agreement { hash, key_size } => {
                Engine::Agreement(AgreementEngine::new(hash, key_size))
            }
            Algorithm::Sha2 { hash } => Engine::Hash(HashEngine::new(hash)),
        };
        tracing::debug!(%algorithm, "engine selected");
        Self { algorithm, engine }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    // -----------------------------------------------------------------------
    // Encryption
    // -----------------------------------------------------------------------

    /// Encrypt (AES, agreement) or digest (SHA-2) one text.
    pub async fn encrypt(&self, request: &EncryptionRequest) -> Option<Vec<u8>> {
        forward!(&self.engine, encrypt(request))
    }

    /// All-or-nothing batch; results are in request order.
    pub async fn encrypt_many(&self, requests: Vec<EncryptionRequest>) -> Option<Vec<Vec<u8>>> {
        forward!(&self.engine, encrypt_many(requests))
    }

    /// Always `None` for SHA-2.
    pub async fn decrypt(&self, request: &DecryptionRequest) -> Option<String> {
        forward!(&self.engine, decrypt(request))
    }

    pub async fn decrypt_many(&self, requests: Vec<DecryptionRequest>) -> Option<Vec<String>> {
        forward!(&self.engine, decrypt_many(requests))
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// AES: fresh wrapped key (pass `None`).
    /// Agreement: wrapped key derived from `shared_secret` (required).
    pub async fn generate_key(&self, shared_secret: Option<&SharedSecret>) -> Option<Vec<u8>> {
        forward!(&self.engine, generate_key(shared_secret))
    }

    /// AES: `count` fresh keys; `shared_secrets` must be `None`.
    /// Agreement: one key per shared secret; `count` must equal the number
    /// that succeed.
    pub async fn generate_keys(
        &self,
        count: usize,
        shared_secrets: Option<Vec<SharedSecret>>,
    ) -> Option<Vec<Vec<u8>>> {
        forward!(&self.engine, generate_keys(count, shared_secrets))
    }

    /// Agreement only.
    pub async fn generate_key_pair(&self) -> Option<KeyPair> {
        forward!(&self.engine, generate_key_pair())
    }

    pub async fn generate_key_pairs(&self, count: usize) -> Option<Vec<KeyPair>> {
        forward!(&self.engine, generate_key_pairs(count))
    }

    /// Agreement only.
    pub async fn generate_salt(&self) -> Option<Vec<u8>> {
        forward!(&self.engine, generate_salt())
    }

    pub async fn generate_salts(&self, count: usize) -> Option<Vec<Vec<u8>>> {
        forward!(&self.engine, generate_salts(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{HashWidth, KeySize};

    #[test]
    fn algorithm_selects_engine() {
        let c = Confidential::new(Algorithm::Sha2 { hash: HashWidth::Bits256 });
        assert!(matches!(c.engine, Engine::Hash(_)));
        let c = Confidential::new(Algorithm::Agreement {
            hash: HashWidth::Bits256,
            key_size: KeySize::Bits128,
        });
        assert!(matches!(c.engine, Engine::Agreement(_)));
        let c = Confidential::default();
        assert!(matches!(c.engine, Engine::Symmetric(ref e) if e.key_size() == KeySize::Bits256));
        assert_eq!(c.algorithm(), Algorithm::default());
    }
}
