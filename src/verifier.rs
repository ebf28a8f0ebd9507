//! Signature verification functionality.

use crate::canonical::{canonicalize, SignedPayload};
use crate::error::{Result, SignError};
use crate::hash::{hash_bytes, DocumentHash};
use crate::keystore::KeyStore;
use crate::package::SignedPackage;
use serde::Serialize;
use tracing::debug;

/// Structured outcome of a verification attempt.
///
/// Verification never propagates an error: bad input, missing keys, and
/// cryptographic failures all land here as `valid: false` with a reason.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// Whether the signature is valid for the presented document.
    pub valid: bool,

    /// The signer identity, populated only on success.
    pub signer_id: Option<String>,

    /// The signing-time timestamp, populated only on success.
    pub timestamp: Option<String>,

    /// Diagnostic reason when verification did not succeed.
    pub error: Option<String>,
}

impl VerificationResult {
    fn ok(signer_id: String, timestamp: String) -> Self {
        Self {
            valid: true,
            signer_id: Some(signer_id),
            timestamp: Some(timestamp),
            error: None,
        }
    }

    fn rejected(reason: impl ToString) -> Self {
        Self {
            valid: false,
            signer_id: None,
            timestamp: None,
            error: Some(reason.to_string()),
        }
    }
}

/// Verifies signed packages against keys held by a [`KeyStore`].
#[derive(Debug)]
pub struct Verifier<'a, S: KeyStore> {
    store: &'a S,
}

impl<'a, S: KeyStore> Verifier<'a, S> {
    /// Create a verifier backed by the given key store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Verify that `package` binds `document` and `signature_image` to its
    /// embedded timestamp and signer identity.
    ///
    /// The canonical payload is rebuilt with the timestamp *stored in the
    /// package*; regenerating it would break every verification.
    pub fn verify(
        &self,
        document: &[u8],
        signature_image: &[u8],
        package: &SignedPackage,
    ) -> VerificationResult {
        let result = match self.check(document, signature_image, package) {
            Ok(()) => VerificationResult::ok(package.signer_id.clone(), package.timestamp.clone()),
            Err(e) => VerificationResult::rejected(e),
        };
        debug!(
            signer_id = package.signer_id.as_str(),
            valid = result.valid,
            "verified package"
        );
        result
    }

    /// Quick boolean check.
    pub fn is_valid(
        &self,
        document: &[u8],
        signature_image: &[u8],
        package: &SignedPackage,
    ) -> bool {
        self.verify(document, signature_image, package).valid
    }

    fn check(
        &self,
        document: &[u8],
        signature_image: &[u8],
        package: &SignedPackage,
    ) -> Result<()> {
        package.validate()?;

        if !self.store.exists(&package.signer_id) {
            return Err(SignError::UnknownSigner(package.signer_id.clone()));
        }
        let keypair = self.store.load(&package.signer_id)?;

        // Independent tamper check against the hash recorded at signing
        // time, reported distinctly from signature invalidity.
        if let Some(stored) = &package.document_hash {
            let expected = DocumentHash::from_hex(stored)?;
            let actual = hash_bytes(document);
            if actual != expected {
                return Err(SignError::TamperDetected {
                    expected: expected.to_hex(),
                    actual: actual.to_hex(),
                });
            }
        }

        let payload = SignedPayload::new(
            document,
            signature_image,
            package.signer_id.as_str(),
            package.timestamp.as_str(),
        );
        let canonical = canonicalize(&payload)?;
        let digest = hash_bytes(&canonical);
        let signature = package.signature_bytes()?;

        if keypair.verify_digest(digest.as_bytes(), &signature) {
            Ok(())
        } else {
            Err(SignError::SignatureInvalid)
        }
    }
}
