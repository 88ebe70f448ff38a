//! # Content Digest — SHA-256 over Typed Byte Sources
//!
//! Defines `ContentDigest` and the two digest entry points of the pipeline:
//!
//! - [`sha256_digest`] / [`sha256_hex`] over [`CanonicalBytes`] — used for
//!   the linked-backup digest, which is computed over a fresh canonical
//!   serialization because an embedded document has no wire bytes of its own.
//! - [`sha256_wire_hex`] over [`WireBytes`] — used for the self-declared
//!   integrity hash, which is defined over the literal received bytes.
//!
//! ## Security Invariant
//!
//! Neither function accepts a raw `&[u8]`. Every digest in a verification
//! report is traceable to exactly one of the two typed byte sources, so the
//! two hash semantics cannot be swapped by accident.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::wire::WireBytes;

/// The hash algorithm used to produce a content digest.
///
/// The certificate format pins SHA-256; the tag exists so digests are
/// self-describing in serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — the only algorithm the certificate format supports.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a new content digest from raw bytes and algorithm.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Compare against a declared hex digest, case-insensitively.
    ///
    /// The certificate format does not fix the hex case an issuer emits,
    /// so `ABCD…` and `abcd…` declare the same digest.
    pub fn matches_hex(&self, declared: &str) -> bool {
        self.to_hex().eq_ignore_ascii_case(declared.trim())
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

fn sha256_of(bytes: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, out)
}

/// Compute a SHA-256 content digest from canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    sha256_of(data.as_bytes())
}

/// Compute a SHA-256 hex string from canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}

/// Compute a SHA-256 hex string from the literal received bytes.
///
/// This is the digest the self-declared integrity hash is checked against.
/// It intentionally bypasses canonicalization: a byte-identical document is
/// the claim being verified.
pub fn sha256_wire_hex(data: &WireBytes) -> String {
    sha256_of(data.as_bytes()).to_hex()
}
