// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Password generation requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default 20)
    pub length: Option<usize>,
    /// Number of passwords to generate (default 5)
    pub quantity: Option<usize>,
    /// Include digits 0-9
    pub include_numbers: Option<bool>,
    /// Include lowercase letters
    pub include_lowercase: Option<bool>,
    /// Include uppercase letters
    pub include_uppercase: Option<bool>,
    /// Include the characters from `custom_symbols`
    pub include_symbols: Option<bool>,
    /// Draw from the full letter set when numbers and symbols are excluded
    pub begin_with_letter: Option<bool>,
    /// Strip the similar-looking characters i, l, o, I, O, 0 and 1
    pub no_similar_characters: Option<bool>,
    /// Reject passwords containing a repeated character
    pub no_duplicate_characters: Option<bool>,
    /// Reject passwords containing a sequential run of three characters
    pub no_sequential_characters: Option<bool>,
    /// Symbol characters to draw from when `include_symbols` is set
    pub custom_symbols: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated passwords (only present on success)
    pub passwords: Option<Vec<String>>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Hashing requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashRequest {
    /// Text to hash (UTF-8)
    pub text: String,
    /// One of: blake2b, blake2s, md5, sha224, sha256, sha384, sha512, sha3-256
    pub algorithm: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Hex digest (only present on success)
    pub digest: Option<String>,
    /// Algorithm that produced the digest
    pub algorithm: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// UUID generation requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UuidGenerationRequest {
    /// Number of UUIDs to generate
    pub quantity: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UuidGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated version-4 UUIDs (only present on success)
    pub uuids: Option<Vec<String>>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// QR code requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct QrGenerationRequest {
    /// Text to encode in the QR symbol
    pub data: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QrGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// PNG image as a base64 data URI (only present on success)
    pub image: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
