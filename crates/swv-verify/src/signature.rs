//! # Signature Check
//!
//! Verifies the Ed25519 signature block against the pinned public key.
//!
//! ## Pinning
//!
//! The certificate format supports exactly one algorithm and one key id.
//! A signature block declaring anything else is rejected deterministically,
//! before any cryptographic work — an unexpected algorithm is a format
//! violation, not a crypto failure.
//!
//! ## Failure Collapse
//!
//! Every failure mode — wrong algorithm, wrong key id, malformed base64,
//! canonicalization failure, cryptographic mismatch — collapses to
//! `Some(false)` with the same advisory message. The caller cannot
//! distinguish "malformed signature" from "wrong signature"; the
//! distinction would only help an attacker probing the verifier.

use serde_json::Value;
use swv_core::CanonicalBytes;
use swv_crypto::{verify_with_public_key, Ed25519PublicKey, Ed25519Signature};
use tracing::debug;

/// The only signature algorithm the certificate format supports.
pub const EXPECTED_ALGORITHM: &str = "Ed25519";
/// The pinned signing key identifier.
pub const EXPECTED_PUBKEY_ID: &str = "sih_root_v1";
/// The canonicalization scheme tag issuers stamp into the signature block.
pub const CANONICALIZATION_SCHEME: &str = "RFC8785_JSON";

/// Name of the signature field within the certificate document.
pub const SIGNATURE_FIELD: &str = "signature";

const ADVISORY: &str = "Invalid Ed25519 signature";

/// Outcome of the signature check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCheck {
    /// `None` when the document carries no signature field; otherwise the
    /// collapsed verdict.
    pub signature_valid: Option<bool>,
    /// The single advisory message, present iff the verdict is `Some(false)`.
    pub error: Option<String>,
}

impl SignatureCheck {
    fn unsigned() -> Self {
        Self {
            signature_valid: None,
            error: None,
        }
    }

    fn valid() -> Self {
        Self {
            signature_valid: Some(true),
            error: None,
        }
    }

    fn invalid() -> Self {
        Self {
            signature_valid: Some(false),
            error: Some(ADVISORY.to_string()),
        }
    }
}

/// Check the document's signature block against the pinned public key.
///
/// An absent `signature` field is not an error: unsigned certificates
/// verify with `signature_valid = None`.
pub fn check_signature(document: &Value, public_key: &Ed25519PublicKey) -> SignatureCheck {
    let block = match document.get(SIGNATURE_FIELD) {
        Some(b) => b,
        None => {
            debug!("no signature field present, skipping signature check");
            return SignatureCheck::unsigned();
        }
    };

    if verify_block(document, block, public_key) {
        SignatureCheck::valid()
    } else {
        SignatureCheck::invalid()
    }
}

/// The actual verification path; any `false` is collapsed by the caller.
fn verify_block(document: &Value, block: &Value, public_key: &Ed25519PublicKey) -> bool {
    // Algorithm and key-id pinning: deterministic rejection, no crypto.
    if block.get("alg").and_then(Value::as_str) != Some(EXPECTED_ALGORITHM) {
        debug!("signature algorithm is not the pinned value");
        return false;
    }
    if block.get("pubkey_id").and_then(Value::as_str) != Some(EXPECTED_PUBKEY_ID) {
        debug!("signature pubkey_id is not the pinned value");
        return false;
    }

    let sig_b64 = match block.get("sig").and_then(Value::as_str) {
        Some(s) => s,
        None => return false,
    };
    let signature = match Ed25519Signature::from_base64(sig_b64) {
        Ok(s) => s,
        Err(_) => {
            debug!("signature is not valid base64 of 64 bytes");
            return false;
        }
    };

    // Verify over the canonical serialization of the document with the
    // signature field removed, matching the issuer's signing input.
    let mut unsigned = match document.as_object() {
        Some(map) => map.clone(),
        None => return false,
    };
    unsigned.remove(SIGNATURE_FIELD);

    let canonical = match CanonicalBytes::new(&Value::Object(unsigned)) {
        Ok(c) => c,
        Err(_) => return false,
    };

    let ok = verify_with_public_key(&canonical, &signature, public_key).is_ok();
    debug!(signature_valid = ok, "signature verification complete");
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use swv_crypto::Ed25519KeyPair;

    fn signed_doc(kp: &Ed25519KeyPair) -> Value {
        let mut doc = json!({
            "cert_type": "backup",
            "cert_id": "backup_001",
            "created_at": "2023-01-01T00:00:00Z"
        });
        let canonical = CanonicalBytes::new(&doc).unwrap();
        let sig = kp.sign(&canonical);
        doc.as_object_mut().unwrap().insert(
            SIGNATURE_FIELD.to_string(),
            json!({
                "alg": EXPECTED_ALGORITHM,
                "pubkey_id": EXPECTED_PUBKEY_ID,
                "sig": sig.to_base64(),
                "canonicalization": CANONICALIZATION_SCHEME
            }),
        );
        doc
    }

    #[test]
    fn test_valid_signature() {
        let kp = Ed25519KeyPair::generate();
        let doc = signed_doc(&kp);
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, Some(true));
        assert_eq!(check.error, None);
    }

    #[test]
    fn test_unsigned_document() {
        let kp = Ed25519KeyPair::generate();
        let doc = json!({"cert_type": "backup", "cert_id": "x"});
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, None);
        assert_eq!(check.error, None);
    }

    #[test]
    fn test_tampered_content_fails() {
        let kp = Ed25519KeyPair::generate();
        let mut doc = signed_doc(&kp);
        doc["cert_id"] = json!("tampered_id");
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, Some(false));
        assert_eq!(check.error.as_deref(), Some(ADVISORY));
    }

    #[test]
    fn test_wrong_algorithm_rejected_without_crypto() {
        let kp = Ed25519KeyPair::generate();
        let mut doc = signed_doc(&kp);
        doc["signature"]["alg"] = json!("RSA");
        // The sig bytes are still valid — pinning alone must reject.
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, Some(false));
    }

    #[test]
    fn test_wrong_pubkey_id_rejected() {
        let kp = Ed25519KeyPair::generate();
        let mut doc = signed_doc(&kp);
        doc["signature"]["pubkey_id"] = json!("wrong_key");
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, Some(false));
    }

    #[test]
    fn test_malformed_base64_collapses_to_false() {
        let kp = Ed25519KeyPair::generate();
        let mut doc = signed_doc(&kp);
        doc["signature"]["sig"] = json!("not-base64!!");
        let check = check_signature(&doc, &kp.public_key());
        assert_eq!(check.signature_valid, Some(false));
        // Same advisory as a cryptographic mismatch.
        assert_eq!(check.error.as_deref(), Some(ADVISORY));
    }

    #[test]
    fn test_wrong_key_fails() {
        let kp = Ed25519KeyPair::generate();
        let other = Ed25519KeyPair::generate();
        let doc = signed_doc(&kp);
        let check = check_signature(&doc, &other.public_key());
        assert_eq!(check.signature_valid, Some(false));
    }
}
