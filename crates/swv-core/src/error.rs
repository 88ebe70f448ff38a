//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the verification core. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! None of these errors escape a verification call: every check in the
//! pipeline resolves to a tri-state outcome and an advisory string, so a
//! failure in one check can never abort a sibling check. The error types
//! here exist for construction-time failures (bad schema, bad key) and
//! for the internals of the individual checks.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The value is not representable as canonical JSON (e.g. a map with
    /// non-string keys, or a non-finite float arriving through a
    /// `Serialize` impl rather than a parsed document).
    #[error("value is not representable as canonical JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Error in cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key parsing or construction failed.
    #[error("key error: {0}")]
    KeyError(String),
}

/// Error selecting the certificate kind from the discriminator field.
///
/// Either case short-circuits the whole pipeline: no schema can be
/// selected, so no other check runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// The document has no `cert_type` field (or it is not a string).
    #[error("Missing 'cert_type' field")]
    Missing,

    /// The `cert_type` value is not a supported certificate kind.
    #[error("Unknown certificate type: {0}")]
    Unknown(String),
}
