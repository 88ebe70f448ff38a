//! # Certificate Summary Extraction
//!
//! Pulls the handful of display fields out of a certificate document,
//! best-effort: extraction succeeds even for documents that failed schema
//! validation, substituting "unknown" for anything missing. The summary is
//! the only place the core reads kind-specific content fields (wipe policy,
//! backup destination).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use swv_core::CertKind;

const UNKNOWN: &str = "unknown";

/// Key fields of a certificate, for human-facing result display.
///
/// All fields are optional and omitted from serialization when absent, so
/// a discriminator-failure report carries an empty summary object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertSummary {
    /// The certificate's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_id: Option<String>,
    /// The kind discriminator value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_type: Option<String>,
    /// The device the operation ran against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    /// Wipe certificates: "{nist_level} - {method}".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_method: Option<String>,
    /// Backup certificates: "{type} ({label})".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl CertSummary {
    /// Extract the summary for a document of known kind.
    pub fn extract(document: &Value, kind: CertKind) -> Self {
        let get = |ptr: &str| {
            document
                .pointer(ptr)
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN)
                .to_string()
        };

        let mut summary = Self {
            cert_id: Some(get("/cert_id")),
            cert_type: Some(kind.as_str().to_string()),
            device_model: Some(get("/device/model")),
            policy_method: None,
            destination: None,
        };

        match kind {
            CertKind::Wipe => {
                summary.policy_method = Some(format!(
                    "{} - {}",
                    get("/policy/nist_level"),
                    get("/policy/method")
                ));
            }
            CertKind::Backup => {
                let label = document
                    .pointer("/destination/label")
                    .and_then(Value::as_str)
                    .unwrap_or("unlabeled");
                summary.destination =
                    Some(format!("{} ({})", get("/destination/type"), label));
            }
        }
        summary
    }
}
