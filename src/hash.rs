//! SHA-256 hashing utilities for document signing.

use crate::error::{Result, SignError};
use sha2::{Digest, Sha256};

/// The size of a SHA-256 hash output in bytes.
pub const HASH_SIZE: usize = 32;

/// A SHA-256 hash of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHash([u8; HASH_SIZE]);

impl DocumentHash {
    /// Get the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Encode the hash as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Decode a hash from a hexadecimal string.
    ///
    /// Works on raw bytes: the input is untrusted and may not be ASCII, so
    /// slicing by character position is not an option.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.as_bytes();
        if digits.len() != HASH_SIZE * 2 {
            return Err(SignError::MalformedPackage(format!(
                "invalid hash length: expected {} hex characters, got {}",
                HASH_SIZE * 2,
                digits.len()
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        for (byte, pair) in arr.iter_mut().zip(digits.chunks_exact(2)) {
            match (hex_digit(pair[0]), hex_digit(pair[1])) {
                (Some(hi), Some(lo)) => *byte = hi << 4 | lo,
                _ => {
                    return Err(SignError::MalformedPackage(format!(
                        "invalid hex in document hash: {}",
                        s
                    )))
                }
            }
        }
        Ok(Self(arr))
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Compute the SHA-256 hash of a byte slice.
pub fn hash_bytes(data: &[u8]) -> DocumentHash {
    let digest: [u8; HASH_SIZE] = Sha256::digest(data).into();
    DocumentHash(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let data = b"Hello, World!";
        let hash = hash_bytes(data);

        // Verify hash is consistent
        let hash2 = hash_bytes(data);
        assert_eq!(hash, hash2);

        // Different data should produce different hash
        let hash3 = hash_bytes(b"Different data");
        assert_ne!(hash, hash3);
    }

    #[test]
    fn test_known_digest() {
        // SHA-256 of the empty string
        let hash = hash_bytes(b"");
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let data = b"Test data for hashing";
        let hash = hash_bytes(data);

        let encoded = hash.to_hex();
        let decoded = DocumentHash::from_hex(&encoded).unwrap();

        assert_eq!(hash, decoded);
    }

    #[test]
    fn test_hex_encoding() {
        let data = b"Test";
        let hash = hash_bytes(data);
        let hex = hash.to_hex();

        // Hex string should be 64 characters (32 bytes * 2)
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(DocumentHash::from_hex("abc").is_err());
        assert!(DocumentHash::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_non_ascii_hex_rejected() {
        // 64 bytes but not 64 ASCII characters; must error, not panic.
        let s = format!("a{}", "€".repeat(21));
        assert_eq!(s.len(), HASH_SIZE * 2);
        assert!(DocumentHash::from_hex(&s).is_err());
    }
}
