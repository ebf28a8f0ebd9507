//! # docsig
//!
//! Non-repudiable document signing: binds a document plus an embedded
//! handwritten-signature image to a timestamp and a signer identity, and
//! lets any party verify that binding later.
//!
//! ## Features
//!
//! - **Per-user RSA key custody** — one immutable 2048-bit key pair per
//!   signer identity, stored as PEM (PKCS#8 / SubjectPublicKeyInfo)
//! - **Deterministic canonicalization** of the signed payload, so
//!   verification reproduces the signing-time digest byte for byte
//! - **RSA-PSS signatures** (MGF1-SHA256, maximum salt length) over a
//!   SHA-256 digest
//! - **Tamper detection** via an independent stored document hash
//! - **JSON packages** that are self-describing and portable
//!
//! ## Quick Start
//!
//! ### Create keys and sign
//!
//! ```rust
//! use docsig::{KeyStore, MemoryKeyStore, Signer};
//!
//! let store = MemoryKeyStore::new();
//! store.create("alice").unwrap();
//!
//! let document = b"Important document content";
//! let signature_image = b"...png bytes...";
//!
//! let package = Signer::new(&store)
//!     .with_metadata("original_filename", "contract.pdf")
//!     .sign(document, signature_image, "alice")
//!     .unwrap();
//!
//! println!("{}", package.to_json().unwrap());
//! ```
//!
//! ### Verify
//!
//! ```rust
//! use docsig::{KeyStore, MemoryKeyStore, Signer, Verifier};
//!
//! let store = MemoryKeyStore::new();
//! store.create("alice").unwrap();
//!
//! let document = b"Important document content";
//! let package = Signer::new(&store).sign(document, b"img", "alice").unwrap();
//!
//! let result = Verifier::new(&store).verify(document, b"img", &package);
//! assert!(result.valid);
//! assert_eq!(result.signer_id.as_deref(), Some("alice"));
//!
//! // Verification never panics or errors: a tampered document simply
//! // comes back invalid, with a reason.
//! let result = Verifier::new(&store).verify(b"forged content", b"img", &package);
//! assert!(!result.valid);
//! assert!(result.error.is_some());
//! ```

pub mod canonical;
pub mod error;
pub mod hash;
pub mod keystore;
pub mod package;
pub mod signer;
pub mod verifier;

// Re-export main types for convenience
pub use canonical::{canonicalize, SignedPayload};
pub use error::{Result, SignError};
pub use hash::{hash_bytes, DocumentHash};
pub use keystore::{FsKeyStore, KeyPair, KeyStore, MemoryKeyStore};
pub use package::{SignedPackage, SigningInfo, HASH_ALGORITHM};
pub use signer::Signer;
pub use verifier::{VerificationResult, Verifier};
