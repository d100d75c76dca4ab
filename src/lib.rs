//! # Subrosa
//!
//! One façade over three unrelated primitives, picked once at construction:
//!
//! - **AES**: AES-GCM; keys are handed out wrapped (RFC 3394)
//! - **Agreement**: X25519 + HKDF-SHA2, producing wrapped AES keys
//! - **SHA-2**: hex-encoded one-way digest
//!
//! ## Quick Start
//!
//! ```rust
//! use subrosa::{Algorithm, Confidential, HashWidth, KeySize, SharedSecret};
//! use subrosa::{DecryptionRequest, EncryptionRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let confidential = Confidential::new(Algorithm::Agreement {
//!     hash: HashWidth::Bits512,
//!     key_size: KeySize::Bits256,
//! });
//!
//! let alice = confidential.generate_key_pair().await.unwrap();
//! let bob = confidential.generate_key_pair().await.unwrap();
//! let salt = confidential.generate_salt().await.unwrap();
//!
//! let alice_key = confidential
//!     .generate_key(Some(&SharedSecret::for_peer(
//!         &alice.private_key,
//!         bob.public_key.as_deref().unwrap(),
//!         &salt,
//!     )))
//!     .await
//!     .unwrap();
//! let bob_key = confidential
//!     .generate_key(Some(&SharedSecret::for_peer(
//!         &bob.private_key,
//!         alice.public_key.as_deref().unwrap(),
//!         &salt,
//!     )))
//!     .await
//!     .unwrap();
//!
//! let sealed = confidential
//!     .encrypt(&EncryptionRequest::with_key("woof", alice_key))
//!     .await
//!     .unwrap();
//! let text = confidential
//!     .decrypt(&DecryptionRequest::with_key(sealed, bob_key))
//!     .await
//!     .unwrap();
//! assert_eq!(text, "woof");
//! # }
//! ```
//!
//! ## Failure model
//!
//! Every operation returns `Option`. Missing keys, malformed input, failed
//! unwraps, authentication failures, and unsupported operations all look
//! the same to the caller. Plural operations are all-or-nothing: one
//! failed element makes the whole batch `None`.
//!
//! Plural operations and salt generation fan out on tokio and must be
//! awaited inside a tokio runtime.
//!
//! ## Known weakness
//!
//! Wrapped keys are wrapped under compiled-in key-encrypting keys (the
//! `keywrap` module). They keep wrapped keys portable between installs;
//! they are not a secret.

#![deny(unsafe_code)]

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod aead;
mod batch;
mod confidential;
mod engine;
mod error;
mod kdf;
mod salt;
mod types;

// Layout constants and KEKs are exposed for compatibility tooling, not as
// stable API.
#[doc(hidden)]
pub mod keywrap;
#[doc(hidden)]
pub mod wire;

pub mod algorithm;

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

pub use algorithm::{Algorithm, AlgorithmParseError, HashWidth, KeySize, ALGORITHM_ENV};
pub use confidential::Confidential;
pub use error::Error;
pub use types::{DecryptionRequest, EncryptionRequest, KeyPair, SharedSecret};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
