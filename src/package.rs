//! Signed package structures and JSON serialization.

use crate::canonical::SignedPayload;
use crate::error::{Result, SignError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Hash algorithm used for all digests.
pub const HASH_ALGORITHM: &str = "SHA-256";

/// Descriptive signing parameters embedded in the package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningInfo {
    pub algorithm: String,
    pub signature_type: String,
    pub key_type: String,
    pub key_size: u32,
    pub signature_format: String,
}

impl Default for SigningInfo {
    fn default() -> Self {
        Self {
            algorithm: HASH_ALGORITHM.to_string(),
            signature_type: "Digital Signature".to_string(),
            key_type: "RSA".to_string(),
            key_size: crate::keystore::KEY_BITS as u32,
            signature_format: "RSA-PSS".to_string(),
        }
    }
}

/// The persisted evidence object produced by signing.
///
/// Immutable once produced; it is the sole artifact presented later for
/// verification. Unknown fields are rejected on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedPackage {
    /// ISO-8601 UTC timestamp captured at signing time.
    pub timestamp: String,

    /// The RSA-PSS signature over the canonical payload digest (base64).
    pub signature: String,

    /// Name of the digest algorithm ("SHA-256").
    pub hash_algorithm: String,

    /// Identity whose key produced the signature.
    pub signer_id: String,

    /// The exact payload that was canonicalized and signed.
    pub signed_payload: SignedPayload,

    /// Hex SHA-256 of the raw document, for independent tamper detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash: Option<String>,

    /// Descriptive signing parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_info: Option<SigningInfo>,

    /// Caller-supplied metadata (original filename, content type, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl SignedPackage {
    /// Decode the signature field into raw bytes.
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.signature)
            .map_err(|e| SignError::MalformedPackage(format!("bad signature base64: {}", e)))
    }

    /// Check that every required field carries a value.
    pub fn validate(&self) -> Result<()> {
        let missing = |field: &str| {
            Err(SignError::MalformedPackage(format!(
                "missing required field: {}",
                field
            )))
        };
        if self.timestamp.is_empty() {
            return missing("timestamp");
        }
        if self.signature.is_empty() {
            return missing("signature");
        }
        if self.signer_id.is_empty() {
            return missing("signer_id");
        }
        if self.hash_algorithm != HASH_ALGORITHM {
            return Err(SignError::MalformedPackage(format!(
                "unsupported hash algorithm: {}",
                self.hash_algorithm
            )));
        }
        Ok(())
    }

    /// Parse a package from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SignError::MalformedPackage(e.to_string()))
    }

    /// Serialize the package to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Save the package to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a package from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
