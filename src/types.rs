//! Property bundles passed across the façade.
//!
//! All of these are per-call value objects. Key bytes are opaque to the
//! caller: a "key" here is always a wrapped key produced by
//! `generate_key`, never raw AES key material.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Input to `encrypt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionRequest {
    pub text: String,
    /// Wrapped key. Required for AES and agreement, must be `None` for SHA-2.
    pub key: Option<Vec<u8>>,
}

impl EncryptionRequest {
    pub fn new(text: impl Into<String>, key: Option<Vec<u8>>) -> Self {
        Self {
            text: text.into(),
            key,
        }
    }

    /// Request carrying a wrapped key.
    pub fn with_key(text: impl Into<String>, key: impl Into<Vec<u8>>) -> Self {
        Self::new(text, Some(key.into()))
    }

    /// Keyless request (hashing).
    pub fn keyless(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

/// Input to `decrypt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptionRequest {
    /// Combined `nonce || ciphertext || tag`.
    pub ciphertext: Vec<u8>,
    pub key: Option<Vec<u8>>,
}

impl DecryptionRequest {
    pub fn new(ciphertext: impl Into<Vec<u8>>, key: Option<Vec<u8>>) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            key,
        }
    }

    pub fn with_key(ciphertext: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        Self::new(ciphertext, Some(key.into()))
    }
}

/// Agreement key pair, or own private key + peer public key when used
/// inside a [`SharedSecret`].
///
/// Private bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    pub private_key: Vec<u8>,
    pub public_key: Option<Vec<u8>>,
}

impl KeyPair {
    pub fn new(private_key: impl Into<Vec<u8>>, public_key: Option<Vec<u8>>) -> Self {
        Self {
            private_key: private_key.into(),
            public_key,
        }
    }

    /// Pair own private key with a peer's public key for derivation.
    pub fn with_peer(private_key: &[u8], peer_public_key: &[u8]) -> Self {
        Self::new(private_key.to_vec(), Some(peer_public_key.to_vec()))
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"[redacted]")
            .field("public_key", &self.public_key.as_ref().map(hex::encode))
            .finish()
    }
}

/// Input to agreement key derivation.
#[derive(Clone, Debug)]
pub struct SharedSecret {
    pub key_pair: KeyPair,
    pub salt: Option<Vec<u8>>,
}

impl SharedSecret {
    pub fn new(key_pair: KeyPair, salt: Option<Vec<u8>>) -> Self {
        Self { key_pair, salt }
    }

    /// Own private key, peer public key, and salt in one step.
    pub fn for_peer(private_key: &[u8], peer_public_key: &[u8], salt: &[u8]) -> Self {
        Self::new(
            KeyPair::with_peer(private_key, peer_public_key),
            Some(salt.to_vec()),
        )
    }

    /// Carry raw symmetric key material to be wrapped as-is.
    pub(crate) fn raw_key(key: &[u8]) -> Self {
        Self::new(KeyPair::new(key.to_vec(), None), None)
    }
}
