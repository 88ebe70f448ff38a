//! # Verification Pipeline
//!
//! The single entry point tying the checks together. A
//! [`CertificateVerifier`] is built once from a [`VerifierConfig`]
//! (compiling both schemas and pinning the public key) and then verifies
//! any number of certificates.
//!
//! ## Security Invariant
//!
//! Verification never short-circuits. Each applicable check runs to
//! completion and contributes its verdict and advisory errors to the
//! report independently, so a caller always sees the full failure
//! surface of a bad certificate, not just the first problem found.
//!
//! The only inputs that bypass the pipeline are ones the pipeline cannot
//! interpret at all: malformed JSON and a missing or unknown
//! `cert_type` discriminator. Both still produce a report, never an
//! error return.

use serde_json::Value;
use swv_core::{sha256_wire_hex, CertKind, WireBytes};
use swv_crypto::Ed25519PublicKey;
use swv_schema::{CertificateSchemas, SchemaError};
use tracing::{debug, info};

use crate::chain::check_linkage;
use crate::config::VerifierConfig;
use crate::hash::check_integrity_hash;
use crate::report::{ComputedDigests, VerificationReport};
use crate::signature::check_signature;
use crate::summary::CertSummary;

/// Optional top-level request field carrying the linked backup
/// certificate alongside the certificate under verification.
pub const LINKED_BACKUP_FIELD: &str = "linked_backup_cert";

/// Immutable verification engine: compiled schema pair plus pinned key.
pub struct CertificateVerifier {
    schemas: CertificateSchemas,
    public_key: Ed25519PublicKey,
}

impl CertificateVerifier {
    /// Compile the configured schemas and pin the public key.
    ///
    /// Fails only on an invalid schema document; nothing after
    /// construction can fail the verifier itself.
    pub fn new(config: VerifierConfig) -> Result<Self, SchemaError> {
        let schemas = CertificateSchemas::new(&config.backup_schema, &config.wipe_schema)?;
        info!(
            public_key = %config.public_key.to_hex(),
            "certificate verifier initialized"
        );
        Ok(Self {
            schemas,
            public_key: config.public_key,
        })
    }

    /// Verify a parsed certificate document against its literal wire
    /// bytes, optionally checking chain linkage against a supplied
    /// backup certificate.
    pub fn verify(
        &self,
        document: &Value,
        wire: &WireBytes,
        linked: Option<&Value>,
    ) -> VerificationReport {
        let kind = match CertKind::of(document) {
            Ok(k) => k,
            Err(err) => {
                debug!(%err, "cannot determine certificate kind");
                return VerificationReport::missing_discriminator(
                    err.to_string(),
                    ComputedDigests {
                        certificate_json_sha256: Some(sha256_wire_hex(wire)),
                        linked_backup_sha256: None,
                    },
                );
            }
        };
        debug!(kind = %kind, "verifying certificate");

        let mut errors = Vec::new();

        let violations = self.schemas.validate(document, kind);
        let schema_valid = violations.is_empty();
        for violation in &violations {
            errors.push(format!("Schema validation error {violation}"));
        }

        let hash = check_integrity_hash(document, kind, wire);
        if let Some(err) = hash.error.clone() {
            errors.push(err);
        }

        let sig = check_signature(document, &self.public_key);
        if let Some(err) = sig.error.clone() {
            errors.push(err);
        }

        let chain = check_linkage(document, linked, &self.schemas);
        errors.extend(chain.errors.iter().cloned());

        let report = VerificationReport {
            schema_valid,
            signature_valid: sig.signature_valid,
            hash_valid: hash.hash_valid,
            chain_valid: chain.chain_valid,
            cert_summary: CertSummary::extract(document, kind),
            computed: ComputedDigests {
                certificate_json_sha256: Some(hash.computed),
                linked_backup_sha256: chain.linked_backup_sha256,
            },
            errors,
        };
        info!(
            kind = %kind,
            schema_valid = report.schema_valid,
            signature_valid = ?report.signature_valid,
            hash_valid = ?report.hash_valid,
            chain_valid = ?report.chain_valid,
            error_count = report.errors.len(),
            "verification complete"
        );
        report
    }

    /// Parse and verify raw certificate bytes.
    ///
    /// The bytes as received are also the hash-check input, so this is
    /// the preferred entry point for wire traffic.
    pub fn verify_bytes(&self, raw: &[u8], linked: Option<&Value>) -> VerificationReport {
        let document: Value = match serde_json::from_slice(raw) {
            Ok(v) => v,
            Err(err) => {
                debug!(%err, "request body is not valid JSON");
                return VerificationReport::malformed_input(format!("Invalid JSON: {err}"));
            }
        };
        self.verify(&document, &WireBytes::from(raw), linked)
    }

    /// Verify a transport request that may embed the linked backup
    /// certificate under [`LINKED_BACKUP_FIELD`].
    ///
    /// The embedded field is stripped before any check runs; it is
    /// request framing, not certificate content.
    pub fn verify_request(&self, raw: &[u8]) -> VerificationReport {
        let mut document: Value = match serde_json::from_slice(raw) {
            Ok(v) => v,
            Err(err) => {
                debug!(%err, "request body is not valid JSON");
                return VerificationReport::malformed_input(format!("Invalid JSON: {err}"));
            }
        };

        let linked = document
            .as_object_mut()
            .and_then(|map| map.remove(LINKED_BACKUP_FIELD));

        // The hash check must see the certificate as the issuer emitted
        // it, so the stripped document is re-serialized for wire bytes
        // only when framing was actually removed.
        match linked {
            Some(linked_doc) => {
                let wire = match serde_json::to_vec(&document) {
                    Ok(bytes) => WireBytes::from(bytes),
                    Err(err) => {
                        return VerificationReport::malformed_input(format!("Invalid JSON: {err}"))
                    }
                };
                self.verify(&document, &wire, Some(&linked_doc))
            }
            None => self.verify(&document, &WireBytes::from(raw), None),
        }
    }
}
