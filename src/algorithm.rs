//! Algorithm selection.
//!
//! An [`Algorithm`] is chosen once when the façade is built and decides
//! which engine backs it. Widths are enums so only valid combinations can
//! be expressed.
//!
//! Canonical names (used by `FromStr`, `Display`, serde, and the
//! `SUBROSA_ALGORITHM` environment variable):
//!
//! | Algorithm                                   | Name                    |
//! |---------------------------------------------|-------------------------|
//! | `Aes { key_size: Bits128 }`                 | `aes-128`               |
//! | `Agreement { hash: Bits512, key_size: Bits256 }` | `x25519-sha512-aes256` |
//! | `Sha2 { hash: Bits384 }`                    | `sha-384`               |

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`Algorithm::from_env`].
pub const ALGORITHM_ENV: &str = "SUBROSA_ALGORITHM";

/// Symmetric key width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    pub fn bytes(&self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    pub fn bits(&self) -> u16 {
        self.bytes() as u16 * 8
    }

    fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "128" => Some(KeySize::Bits128),
            "192" => Some(KeySize::Bits192),
            "256" => Some(KeySize::Bits256),
            _ => None,
        }
    }
}

/// SHA-2 output width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashWidth {
    Bits256,
    Bits384,
    Bits512,
}

impl HashWidth {
    pub fn bits(&self) -> u16 {
        match self {
            HashWidth::Bits256 => 256,
            HashWidth::Bits384 => 384,
            HashWidth::Bits512 => 512,
        }
    }

    fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "256" => Some(HashWidth::Bits256),
            "384" => Some(HashWidth::Bits384),
            "512" => Some(HashWidth::Bits512),
            _ => None,
        }
    }
}

/// Which engine backs a [`Confidential`](crate::Confidential) instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// AES-GCM with keys wrapped under a fixed key-encrypting key.
    Aes { key_size: KeySize },
    /// X25519 agreement + HKDF, producing keys for the AES path.
    Agreement { hash: HashWidth, key_size: KeySize },
    /// One-way SHA-2 digest, hex encoded.
    Sha2 { hash: HashWidth },
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Aes {
            key_size: KeySize::Bits256,
        }
    }
}

impl Algorithm {
    /// Read the algorithm from `SUBROSA_ALGORITHM`, or the default when unset.
    pub fn from_env() -> Result<Self, AlgorithmParseError> {
        match std::env::var(ALGORITHM_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Aes { key_size } => write!(f, "aes-{}", key_size.bits()),
            Algorithm::Agreement { hash, key_size } => {
                write!(f, "x25519-sha{}-aes{}", hash.bits(), key_size.bits())
            }
            Algorithm::Sha2 { hash } => write!(f, "sha-{}", hash.bits()),
        }
    }
}

/// Unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmParseError(pub String);

impl fmt::Display for AlgorithmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl std::error::Error for AlgorithmParseError {}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let err = || AlgorithmParseError(s.to_string());

        if let Some(bits) = name.strip_prefix("aes-") {
            let key_size = KeySize::from_bits(bits).ok_or_else(err)?;
            return Ok(Algorithm::Aes { key_size });
        }
        if let Some(bits) = name.strip_prefix("sha-") {
            let hash = HashWidth::from_bits(bits).ok_or_else(err)?;
            return Ok(Algorithm::Sha2 { hash });
        }
        if let Some(rest) = name.strip_prefix("x25519-sha") {
            let (hash_bits, key_bits) = rest.split_once("-aes").ok_or_else(err)?;
            let hash = HashWidth::from_bits(hash_bits).ok_or_else(err)?;
            let key_size = KeySize::from_bits(key_bits).ok_or_else(err)?;
            return Ok(Algorithm::Agreement { hash, key_size });
        }
        Err(err())
    }
}

impl TryFrom<String> for Algorithm {
    type Error = AlgorithmParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Algorithm; 15] = [
        Algorithm::Aes { key_size: KeySize::Bits128 },
        Algorithm::Aes { key_size: KeySize::Bits192 },
        Algorithm::Aes { key_size: KeySize::Bits256 },
        Algorithm::Sha2 { hash: HashWidth::Bits256 },
        Algorithm::Sha2 { hash: HashWidth::Bits384 },
        Algorithm::Sha2 { hash: HashWidth::Bits512 },
        Algorithm::Agreement { hash: HashWidth::Bits256, key_size: KeySize::Bits128 },
        Algorithm::Agreement { hash: HashWidth::Bits256, key_size: KeySize::Bits192 },
        Algorithm::Agreement { hash: HashWidth::Bits256, key_size: KeySize::Bits256 },
        Algorithm::Agreement { hash: HashWidth::Bits384, key_size: KeySize::Bits128 },
        Algorithm::Agreement { hash: HashWidth::Bits384, key_size: KeySize::Bits192 },
        Algorithm::Agreement { hash: HashWidth::Bits384, key_size: KeySize::Bits256 },
        Algorithm::Agreement { hash: HashWidth::Bits512, key_size: KeySize::Bits128 },
        Algorithm::Agreement { hash: HashWidth::Bits512, key_size: KeySize::Bits192 },
        Algorithm::Agreement { hash: HashWidth::Bits512, key_size: KeySize::Bits256 },
    ];

    #[test]
    fn names_parse_back() {
        for alg in ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn canonical_names() {
        assert_eq!(Algorithm::default().to_string(), "aes-256");
        assert_eq!(
            Algorithm::Agreement { hash: HashWidth::Bits512, key_size: KeySize::Bits256 }.to_string(),
            "x25519-sha512-aes256"
        );
        assert_eq!("SHA-384".parse::<Algorithm>().unwrap(), Algorithm::Sha2 { hash: HashWidth::Bits384 });
    }

    #[test]
    fn rejects_invalid_widths() {
        for bad in ["aes-512", "sha-128", "x25519-sha256-aes512", "x25519-sha256", "rsa-2048", ""] {
            assert!(bad.parse::<Algorithm>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn serde_uses_canonical_name() {
        let alg = Algorithm::Agreement { hash: HashWidth::Bits384, key_size: KeySize::Bits128 };
        let json = serde_json::to_string(&alg).unwrap();
        assert_eq!(json, "\"x25519-sha384-aes128\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alg);
        assert!(serde_json::from_str::<Algorithm>("\"aes-64\"").is_err());
    }

    #[test]
    fn key_size_bytes() {
        assert_eq!(KeySize::Bits128.bytes(), 16);
        assert_eq!(KeySize::Bits192.bytes(), 24);
        assert_eq!(KeySize::Bits256.bytes(), 32);
    }
}
