//! # Integrity Hash Check
//!
//! Backup certificates declare a SHA-256 digest of themselves in
//! `metadata.certificate_json_sha256`. The check recomputes the digest over
//! the **literal received bytes** — not any re-serialization — and compares
//! case-insensitively against the declared value.
//!
//! The byte source is deliberately different from the chain-linkage digest
//! (which hashes a canonical re-serialization, because an embedded document
//! has no wire bytes of its own). See DESIGN.md for the recorded decision.

use serde_json::Value;
use swv_core::{sha256_wire_hex, CertKind, WireBytes};
use tracing::debug;

/// JSON Pointer to the self-declared integrity hash.
pub const INTEGRITY_HASH_POINTER: &str = "/metadata/certificate_json_sha256";

/// Outcome of the integrity hash check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashCheck {
    /// `None` when the check does not apply (non-backup kind, or no
    /// declared hash); otherwise whether declared and computed agree.
    pub hash_valid: Option<bool>,
    /// SHA-256 hex of the received bytes, always computed for audit.
    pub computed: String,
    /// Advisory message on mismatch.
    pub error: Option<String>,
}

/// Recompute the wire digest and compare it against the declared hash.
///
/// Only backup certificates carry the declared hash; for any other kind
/// the verdict is `None` but the computed digest is still reported.
pub fn check_integrity_hash(document: &Value, kind: CertKind, wire: &WireBytes) -> HashCheck {
    let computed = sha256_wire_hex(wire);

    if kind != CertKind::Backup {
        return HashCheck {
            hash_valid: None,
            computed,
            error: None,
        };
    }

    let declared = match document.pointer(INTEGRITY_HASH_POINTER).and_then(Value::as_str) {
        Some(d) => d,
        None => {
            debug!("no declared integrity hash, skipping hash check");
            return HashCheck {
                hash_valid: None,
                computed,
                error: None,
            };
        }
    };

    if computed.eq_ignore_ascii_case(declared.trim()) {
        debug!("integrity hash matches declared value");
        HashCheck {
            hash_valid: Some(true),
            computed,
            error: None,
        }
    } else {
        let error = format!(
            "Certificate hash mismatch: declared {declared}, computed {computed}"
        );
        HashCheck {
            hash_valid: Some(false),
            computed,
            error: Some(error),
        }
    }
}
