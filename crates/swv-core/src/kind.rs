//! # Certificate Kind — The `cert_type` Discriminator
//!
//! Every certificate declares its kind in the `cert_type` field. The kind
//! selects which schema applies and which kind-specific checks run: backup
//! certificates carry a self-declared integrity hash, wipe certificates may
//! declare chain linkage to a companion backup certificate.
//!
//! A missing or unrecognized discriminator short-circuits the pipeline —
//! no schema can be selected, so no other check runs.

use serde_json::Value;

use crate::error::KindError;

/// Field name of the kind discriminator.
pub const CERT_TYPE_FIELD: &str = "cert_type";

/// The two supported certificate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertKind {
    /// An encrypted-backup operation certificate.
    Backup,
    /// A data-sanitization (wipe) operation certificate.
    Wipe,
}

impl CertKind {
    /// Returns the wire-format discriminator value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backup => "backup",
            Self::Wipe => "wipe",
        }
    }

    /// Read the kind from a parsed certificate document.
    ///
    /// # Errors
    ///
    /// `KindError::Missing` if `cert_type` is absent or not a string;
    /// `KindError::Unknown` if it is a string but not a supported kind.
    pub fn of(document: &Value) -> Result<Self, KindError> {
        let cert_type = document
            .get(CERT_TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or(KindError::Missing)?;
        match cert_type {
            "backup" => Ok(Self::Backup),
            "wipe" => Ok(Self::Wipe),
            other => Err(KindError::Unknown(other.to_string())),
        }
    }
}

impl std::fmt::Display for CertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
