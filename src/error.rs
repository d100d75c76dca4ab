//! Internal failure taxonomy.
//!
//! Every public operation collapses these into "no result" (`None`).
//! The variant only ever surfaces in `tracing` debug events, so a caller
//! cannot tell a bad key from a bad ciphertext.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key was required but the request carried none.
    MissingKey,
    /// A key was supplied to an operation that must not take one.
    UnexpectedKey,
    /// Ciphertext, key, or point bytes could not be parsed.
    MalformedInput,
    /// AEAD tag mismatch.
    AuthenticationFailure,
    /// Key unwrap failed (wrong KEK or corrupted wrap).
    UnwrapFailure,
    /// The selected engine does not offer this operation.
    Unsupported,
    /// The OS random source failed.
    Randomness,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => write!(f, "key required but absent"),
            Self::UnexpectedKey => write!(f, "key supplied to a keyless operation"),
            Self::MalformedInput => write!(f, "malformed input"),
            Self::AuthenticationFailure => write!(f, "authentication failed"),
            Self::UnwrapFailure => write!(f, "key unwrap failed"),
            Self::Unsupported => write!(f, "operation not supported by this algorithm"),
            Self::Randomness => write!(f, "random source unavailable"),
        }
    }
}

impl std::error::Error for Error {}

pub(crate) type Result<T> = core::result::Result<T, Error>;

/// Collapse an internal result into the façade's "present or absent" form.
pub(crate) trait OrAbsent<T> {
    fn or_absent(self, operation: &'static str) -> Option<T>;
}

impl<T> OrAbsent<T> for Result<T> {
    fn or_absent(self, operation: &'static str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!(operation, %error, "no result produced");
                None
            }
        }
    }
}
