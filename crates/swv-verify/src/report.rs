//! # Verification Report — The Aggregate Result
//!
//! One report per verification call, always returned, never thrown past.
//! The three nullable flags are tri-state: `Some(true)` / `Some(false)` /
//! `None` for "not applicable to this document" (no signature present, not
//! a backup certificate, no linked certificate supplied). `None` serializes
//! as JSON `null` — the fields are never omitted, so every report has the
//! same top-level shape.

use serde::{Deserialize, Serialize};

use crate::summary::CertSummary;

/// The digests the pipeline computed, reported for audit regardless of
/// whether the corresponding checks passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedDigests {
    /// SHA-256 hex of the literal received certificate bytes.
    pub certificate_json_sha256: Option<String>,
    /// SHA-256 hex of the canonical serialization of the linked backup
    /// certificate, when one was supplied.
    pub linked_backup_sha256: Option<String>,
}

/// The aggregate verdict of one verification call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the document conforms to its kind-selected schema. `false`
    /// when the discriminator is missing/unknown or the input was not JSON.
    pub schema_valid: bool,
    /// Signature verdict; `None` when the document carries no signature.
    pub signature_valid: Option<bool>,
    /// Integrity-hash verdict; `None` when not applicable (non-backup kind
    /// or no declared hash).
    pub hash_valid: Option<bool>,
    /// Chain-linkage verdict; `None` when no linkage or no linked document.
    pub chain_valid: Option<bool>,
    /// Key fields extracted from the document, best-effort.
    pub cert_summary: CertSummary,
    /// The digests computed during verification.
    pub computed: ComputedDigests,
    /// Human-readable error strings, in check order.
    pub errors: Vec<String>,
}

impl VerificationReport {
    /// Report for input that is not valid JSON: no check ran.
    pub fn malformed_input(error: String) -> Self {
        Self {
            schema_valid: false,
            signature_valid: None,
            hash_valid: None,
            chain_valid: None,
            cert_summary: CertSummary::default(),
            computed: ComputedDigests::default(),
            errors: vec![error],
        }
    }

    /// Report for a document whose `cert_type` discriminator is missing or
    /// unrecognized: no schema can be selected, so no other check ran. The
    /// wire digest is still reported for audit.
    pub fn missing_discriminator(error: String, computed: ComputedDigests) -> Self {
        Self {
            schema_valid: false,
            signature_valid: None,
            hash_valid: None,
            chain_valid: None,
            cert_summary: CertSummary::default(),
            computed,
            errors: vec![error],
        }
    }
}
