//! Error types for the docsig library.

use thiserror::Error;

/// The main error type for docsig operations.
#[derive(Error, Debug)]
pub enum SignError {
    /// Error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error encoding or decoding PKCS#8 private key material.
    #[error("PKCS#8 key error: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    /// Error encoding or decoding SubjectPublicKeyInfo public key material.
    #[error("public key encoding error: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    /// A key pair already exists for this signer identity.
    #[error("keys already exist for signer '{0}'")]
    AlreadyExists(String),

    /// No key pair exists for this signer identity.
    #[error("no keys found for signer '{0}'")]
    UnknownSigner(String),

    /// The signer identity is not usable as a storage key.
    #[error("invalid signer id '{0}': must be a single plain path component")]
    InvalidSignerId(String),

    /// Key material is present but could not be read or parsed.
    #[error("failed to load key material: {0}")]
    KeyLoad(String),

    /// A signed package is missing required fields or is not valid JSON.
    #[error("malformed signed package: {0}")]
    MalformedPackage(String),

    /// The document no longer matches the hash embedded at signing time.
    #[error("document has been modified: hash mismatch (expected {expected}, got {actual})")]
    TamperDetected { expected: String, actual: String },

    /// The cryptographic signature check failed.
    #[error("signature verification failed")]
    SignatureInvalid,

    /// Unexpected failure inside the cryptographic backend.
    #[error("cryptographic backend error: {0}")]
    Backend(String),
}

/// Result type alias for docsig operations.
pub type Result<T> = std::result::Result<T, SignError>;
