//! Document signing functionality.

use crate::canonical::{canonicalize, SignedPayload};
use crate::error::{Result, SignError};
use crate::hash::hash_bytes;
use crate::keystore::KeyStore;
use crate::package::{SignedPackage, SigningInfo, HASH_ALGORITHM};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Produces signed packages using keys held by a [`KeyStore`].
#[derive(Debug)]
pub struct Signer<'a, S: KeyStore> {
    store: &'a S,
    metadata: HashMap<String, String>,
}

impl<'a, S: KeyStore> Signer<'a, S> {
    /// Create a signer backed by the given key store.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata key-value pair to produced packages
    /// (e.g. original filename, content type).
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Sign a document together with a handwritten-signature image.
    ///
    /// The timestamp is captured here and becomes part of the signed
    /// content. Fails with [`SignError::UnknownSigner`] if `signer_id` has
    /// no key pair; persisting the returned package is up to the caller.
    pub fn sign(
        &self,
        document: &[u8],
        signature_image: &[u8],
        signer_id: &str,
    ) -> Result<SignedPackage> {
        if !self.store.exists(signer_id) {
            return Err(SignError::UnknownSigner(signer_id.to_string()));
        }
        let keypair = self.store.load(signer_id)?;

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let payload = SignedPayload::new(document, signature_image, signer_id, &timestamp);

        let canonical = canonicalize(&payload)?;
        let digest = hash_bytes(&canonical);
        let signature = keypair.sign_digest(digest.as_bytes())?;

        debug!(signer_id, timestamp = %timestamp, "signed document");

        Ok(SignedPackage {
            timestamp,
            signature: STANDARD.encode(signature),
            hash_algorithm: HASH_ALGORITHM.to_string(),
            signer_id: signer_id.to_string(),
            signed_payload: payload,
            document_hash: Some(hash_bytes(document).to_hex()),
            signing_info: Some(SigningInfo::default()),
            metadata: self.metadata.clone(),
        })
    }

    /// Sign a document read from a file.
    pub fn sign_file<P: AsRef<Path>>(
        &self,
        path: P,
        signature_image: &[u8],
        signer_id: &str,
    ) -> Result<SignedPackage> {
        let document = fs::read(path)?;
        self.sign(&document, signature_image, signer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystore::MemoryKeyStore;

    #[test]
    fn test_sign_produces_complete_package() {
        let store = MemoryKeyStore::new();
        store.create("alice").unwrap();

        let package = Signer::new(&store)
            .sign(b"hello world", b"test", "alice")
            .unwrap();

        assert_eq!(package.signer_id, "alice");
        assert_eq!(package.hash_algorithm, "SHA-256");
        assert!(!package.signature.is_empty());
        assert_eq!(package.signed_payload.signer_id, "alice");
        assert_eq!(package.signed_payload.timestamp, package.timestamp);
        assert_eq!(
            package.document_hash.as_deref(),
            Some(hash_bytes(b"hello world").to_hex().as_str())
        );
    }

    #[test]
    fn test_sign_unknown_signer() {
        let store = MemoryKeyStore::new();
        let err = Signer::new(&store)
            .sign(b"doc", b"img", "nobody")
            .unwrap_err();
        assert!(matches!(err, SignError::UnknownSigner(_)));
    }

    #[test]
    fn test_sign_with_metadata() {
        let store = MemoryKeyStore::new();
        store.create("alice").unwrap();

        let package = Signer::new(&store)
            .with_metadata("original_filename", "contract.pdf")
            .with_metadata("content_type", "application/pdf")
            .sign(b"doc", b"img", "alice")
            .unwrap();

        assert_eq!(
            package.metadata.get("original_filename"),
            Some(&"contract.pdf".to_string())
        );
        assert_eq!(
            package.metadata.get("content_type"),
            Some(&"application/pdf".to_string())
        );
    }

    #[test]
    fn test_signatures_are_probabilistic() {
        // PSS uses a random salt: two signatures over the same content differ,
        // but both verify.
        let store = MemoryKeyStore::new();
        store.create("alice").unwrap();
        let keypair = store.load("alice").unwrap();

        let payload = SignedPayload::new(b"doc", b"img", "alice", "2024-01-01T00:00:00Z");
        let digest = hash_bytes(&canonicalize(&payload).unwrap());

        let sig1 = keypair.sign_digest(digest.as_bytes()).unwrap();
        let sig2 = keypair.sign_digest(digest.as_bytes()).unwrap();
        assert_ne!(sig1, sig2);
        assert!(keypair.verify_digest(digest.as_bytes(), &sig1));
        assert!(keypair.verify_digest(digest.as_bytes(), &sig2));
    }
}
