//! # Schema Validation
//!
//! Compiles the backup and wipe certificate schemas once and validates
//! parsed documents against whichever one the `cert_type` discriminator
//! selects. Selection itself lives in `swv_core::CertKind` — a document
//! with no usable discriminator never reaches this module.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use swv_core::CertKind;
use thiserror::Error;

/// Error building the compiled schema pair.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A supplied schema document is not a valid JSON Schema.
    #[error("invalid {kind} schema: {reason}")]
    InvalidSchema {
        /// Which certificate kind's schema failed to compile.
        kind: CertKind,
        /// Reason the schema could not be compiled.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the document.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "at root: {}", self.message)
        } else {
            write!(f, "at {}: {}", self.instance_path, self.message)
        }
    }
}

/// The compiled backup/wipe schema pair.
///
/// ## Thread Safety
///
/// `CertificateSchemas` is `Send + Sync` — the compiled validators are
/// immutable after construction and can be shared across worker threads
/// without locking.
#[derive(Debug)]
pub struct CertificateSchemas {
    backup: Validator,
    wipe: Validator,
}

impl CertificateSchemas {
    /// Compile both schemas from host-supplied parsed schema documents.
    ///
    /// The `jsonschema` crate honors the draft each schema declares in its
    /// `$schema` field (the stock certificate schemas declare draft-07).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` naming the kind whose schema
    /// failed to compile.
    pub fn new(backup_schema: &Value, wipe_schema: &Value) -> Result<Self, SchemaError> {
        let backup = compile(backup_schema, CertKind::Backup)?;
        let wipe = compile(wipe_schema, CertKind::Wipe)?;
        Ok(Self { backup, wipe })
    }

    /// Validate a parsed certificate document against the schema for `kind`.
    ///
    /// Returns the full list of violations; empty means valid. Does not
    /// halt on the first error.
    pub fn validate(&self, document: &Value, kind: CertKind) -> Vec<Violation> {
        let validator = match kind {
            CertKind::Backup => &self.backup,
            CertKind::Wipe => &self.wipe,
        };
        validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// True when the document has no violations against the schema for `kind`.
    pub fn is_valid(&self, document: &Value, kind: CertKind) -> bool {
        let validator = match kind {
            CertKind::Backup => &self.backup,
            CertKind::Wipe => &self.wipe,
        };
        validator.is_valid(document)
    }
}

fn compile(schema: &Value, kind: CertKind) -> Result<Validator, SchemaError> {
    jsonschema::options()
        .build(schema)
        .map_err(|e| SchemaError::InvalidSchema {
            kind,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_schemas() -> CertificateSchemas {
        let backup = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "cert_type": {"const": "backup"},
                "cert_id": {"type": "string"},
                "created_at": {"type": "string"},
                "device": {
                    "type": "object",
                    "properties": {
                        "model": {"type": "string"},
                        "serial": {"type": "string"}
                    },
                    "required": ["model", "serial"]
                }
            },
            "required": ["cert_type", "cert_id", "created_at", "device"]
        });
        let wipe = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "cert_type": {"const": "wipe"},
                "cert_id": {"type": "string"},
                "created_at": {"type": "string"},
                "device": {
                    "type": "object",
                    "properties": {
                        "model": {"type": "string"},
                        "serial": {"type": "string"}
                    },
                    "required": ["model", "serial"]
                }
            },
            "required": ["cert_type", "cert_id", "created_at", "device"]
        });
        CertificateSchemas::new(&backup, &wipe).expect("test schemas should compile")
    }

    #[test]
    fn test_valid_backup_certificate() {
        let schemas = test_schemas();
        let cert = json!({
            "cert_type": "backup",
            "cert_id": "backup_123",
            "created_at": "2023-12-05T14:30:22Z",
            "device": {"model": "Test SSD", "serial": "ABC123"}
        });
        assert!(schemas.validate(&cert, CertKind::Backup).is_empty());
        assert!(schemas.is_valid(&cert, CertKind::Backup));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let schemas = test_schemas();
        let cert = json!({"cert_type": "backup", "cert_id": "backup_123"});
        let violations = schemas.validate(&cert, CertKind::Backup);
        assert!(!violations.is_empty());
        // Both missing fields are reported, not just the first.
        assert!(violations.iter().any(|v| v.message.contains("created_at")));
        assert!(violations.iter().any(|v| v.message.contains("device")));
    }

    #[test]
    fn test_nested_violation_carries_path() {
        let schemas = test_schemas();
        let cert = json!({
            "cert_type": "backup",
            "cert_id": "backup_123",
            "created_at": "2023-12-05T14:30:22Z",
            "device": {"model": "Test SSD"}
        });
        let violations = schemas.validate(&cert, CertKind::Backup);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "/device");
        assert!(violations[0].message.contains("serial"));
    }

    #[test]
    fn test_kind_selects_schema() {
        let schemas = test_schemas();
        let wipe = json!({
            "cert_type": "wipe",
            "cert_id": "wipe_456",
            "created_at": "2023-12-05T15:00:30Z",
            "device": {"model": "Test SSD", "serial": "ABC123"}
        });
        assert!(schemas.validate(&wipe, CertKind::Wipe).is_empty());
        // The same document fails the backup schema on the cert_type const.
        assert!(!schemas.validate(&wipe, CertKind::Backup).is_empty());
    }

    #[test]
    fn test_violation_display() {
        let v = Violation {
            instance_path: "/device".to_string(),
            message: "\"serial\" is a required property".to_string(),
        };
        assert_eq!(v.to_string(), "at /device: \"serial\" is a required property");

        let root = Violation {
            instance_path: String::new(),
            message: "not an object".to_string(),
        };
        assert_eq!(root.to_string(), "at root: not an object");
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let bad = json!({"type": "not-a-real-type"});
        let ok = json!({"type": "object"});
        let err = CertificateSchemas::new(&bad, &ok).unwrap_err();
        assert!(err.to_string().contains("backup"));
    }
}
