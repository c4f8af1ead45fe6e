// src/generators/hash.rs
use std::fmt;
use std::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::Sha3_256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Hash algorithms accepted by the hashing endpoint.
///
/// `blake2b` is the 64-byte digest and `blake2s` the 32-byte digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Blake2b,
    Blake2s,
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_256 => "sha3-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    // Names are matched exactly, lowercase only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blake2b" => Ok(HashAlgorithm::Blake2b),
            "blake2s" => Ok(HashAlgorithm::Blake2s),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "sha3-256" => Ok(HashAlgorithm::Sha3_256),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Hex digest of the UTF-8 bytes of `text`.
pub fn hex_digest(algorithm: HashAlgorithm, text: &str) -> String {
    let bytes = text.as_bytes();
    match algorithm {
        HashAlgorithm::Blake2b => hex::encode(Blake2b512::digest(bytes)),
        HashAlgorithm::Blake2s => hex::encode(Blake2s256::digest(bytes)),
        HashAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
        HashAlgorithm::Sha224 => hex::encode(Sha224::digest(bytes)),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        HashAlgorithm::Sha3_256 => hex::encode(Sha3_256::digest(bytes)),
    }
}
