//! Deterministic serialization of the signed payload.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// The logical content that gets hashed and signed: the document, the
/// handwritten-signature image, the signing timestamp, and the signer
/// identity.
///
/// Binary fields are carried as standard base64 so the canonical form is
/// plain text. Field declaration order is lexicographic and must stay that
/// way: serde_json emits struct fields in declaration order, and the
/// canonical bytes are part of the signature contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedPayload {
    /// Base64-encoded document bytes.
    pub document: String,
    /// Base64-encoded handwritten-signature image bytes.
    pub signature_image: String,
    /// Identity of the signer.
    pub signer_id: String,
    /// ISO-8601 UTC timestamp captured at signing time. Verification reuses
    /// this stored value verbatim, never the current clock.
    pub timestamp: String,
}

impl SignedPayload {
    /// Build a payload from raw document and signature-image bytes.
    pub fn new(
        document: &[u8],
        signature_image: &[u8],
        signer_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            document: STANDARD.encode(document),
            signature_image: STANDARD.encode(signature_image),
            signer_id: signer_id.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Serialize a payload into its canonical byte form.
///
/// Two payloads with equal field values always canonicalize to identical
/// bytes; any change to any field changes the output.
pub fn canonicalize(payload: &SignedPayload) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(payload)?)
}
