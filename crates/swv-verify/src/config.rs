//! # Verifier Configuration
//!
//! The process-wide immutable inputs of the pipeline: the two parsed schema
//! documents and the raw public key bytes. The host loads these once at
//! startup (file reading and PEM decoding are host responsibilities) and
//! the core never touches the filesystem or network afterwards.

use serde_json::Value;
use swv_crypto::Ed25519PublicKey;

/// Host-supplied configuration for [`CertificateVerifier`](crate::CertificateVerifier).
///
/// Constructed explicitly and consumed by `CertificateVerifier::new()`;
/// never ambient, never mutable after construction.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Parsed backup certificate schema document.
    pub backup_schema: Value,
    /// Parsed wipe certificate schema document.
    pub wipe_schema: Value,
    /// The pinned Ed25519 public key certificates are verified against.
    pub public_key: Ed25519PublicKey,
}

impl VerifierConfig {
    /// Assemble a configuration from parsed schemas and raw key bytes.
    pub fn new(backup_schema: Value, wipe_schema: Value, public_key_bytes: [u8; 32]) -> Self {
        Self {
            backup_schema,
            wipe_schema,
            public_key: Ed25519PublicKey::from_bytes(public_key_bytes),
        }
    }
}
