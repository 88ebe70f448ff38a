//! # Chain Linkage Check
//!
//! A wipe certificate may declare the backup certificate it operated on
//! via `linkage.backup_cert_id`. When the caller supplies that backup
//! certificate, this check confirms the declared id matches the linked
//! document's `cert_id`.
//!
//! ## Security Invariant
//!
//! The linked document is validated against the backup schema before the
//! id comparison. A matching id on a structurally bogus document is not
//! a valid link: the linkage claim is only as strong as the document it
//! points at.

use serde_json::Value;
use swv_core::{sha256_hex, CanonicalBytes, CertKind};
use swv_schema::CertificateSchemas;
use tracing::debug;

/// JSON pointer to the declared linkage id on the wipe certificate.
pub const LINKAGE_POINTER: &str = "/linkage/backup_cert_id";

/// Outcome of the chain linkage check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainCheck {
    /// `None` when no linked certificate was supplied or the document
    /// declares no linkage; otherwise the verdict.
    pub chain_valid: Option<bool>,
    /// Canonical digest of the linked backup, reported whenever a linked
    /// document was supplied, regardless of verdict.
    pub linked_backup_sha256: Option<String>,
    pub errors: Vec<String>,
}

impl ChainCheck {
    fn skipped() -> Self {
        Self {
            chain_valid: None,
            linked_backup_sha256: None,
            errors: Vec::new(),
        }
    }
}

/// Check the document's declared linkage against a supplied backup
/// certificate.
///
/// Without a linked document there is nothing to compare, so the check
/// is skipped entirely. With one, the linked digest is always computed
/// and reported, even when the comparison fails.
pub fn check_linkage(
    document: &Value,
    linked: Option<&Value>,
    schemas: &CertificateSchemas,
) -> ChainCheck {
    let linked = match linked {
        Some(l) => l,
        None => {
            debug!("no linked certificate supplied, skipping chain check");
            return ChainCheck::skipped();
        }
    };

    let linked_digest = CanonicalBytes::new(linked)
        .ok()
        .map(|c| sha256_hex(&c));

    let declared = match document.pointer(LINKAGE_POINTER).and_then(Value::as_str) {
        Some(id) => id,
        None => {
            debug!("document declares no linkage, chain check inconclusive");
            return ChainCheck {
                chain_valid: None,
                linked_backup_sha256: linked_digest,
                errors: Vec::new(),
            };
        }
    };

    // Precondition: the linked document must itself be a valid backup
    // certificate before its cert_id means anything.
    let violations = schemas.validate(linked, CertKind::Backup);
    if !violations.is_empty() {
        let detail = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        debug!("linked certificate failed backup schema validation");
        return ChainCheck {
            chain_valid: Some(false),
            linked_backup_sha256: linked_digest,
            errors: vec![format!(
                "Chain linkage validation failed: linked backup certificate failed schema validation ({detail})"
            )],
        };
    }

    let linked_id = linked.get("cert_id").and_then(Value::as_str).unwrap_or("");
    if declared != linked_id {
        debug!(declared, linked_id, "chain linkage id mismatch");
        return ChainCheck {
            chain_valid: Some(false),
            linked_backup_sha256: linked_digest,
            errors: vec![format!(
                "Chain linkage validation failed: backup_cert_id mismatch: declared '{declared}', linked certificate has '{linked_id}'"
            )],
        };
    }

    debug!(declared, "chain linkage verified");
    ChainCheck {
        chain_valid: Some(true),
        linked_backup_sha256: linked_digest,
        errors: Vec::new(),
    }
}
