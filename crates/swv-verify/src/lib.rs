//! # swv-verify — The Certificate Verification Pipeline
//!
//! Composes the four independent certificate checks into one verification
//! call per document:
//!
//! - **Schema** ([`CertificateSchemas`](swv_schema::CertificateSchemas)) —
//!   structural conformance against the kind-selected schema.
//! - **Integrity hash** ([`hash`]) — SHA-256 over the literal received
//!   bytes vs the backup certificate's self-declared digest.
//! - **Signature** ([`signature`]) — Ed25519 over the canonical,
//!   signature-stripped document against the pinned key.
//! - **Chain linkage** ([`chain`]) — a wipe certificate's declared
//!   reference to its companion backup certificate.
//!
//! ## The Hard Invariant
//!
//! All checks run to completion, always. A schema failure never skips the
//! signature check; a hash mismatch never suppresses the chain check. Every
//! check resolves to a tri-state outcome (`Some(true)` / `Some(false)` /
//! `None` for inapplicable) plus advisory error strings, and the aggregate
//! [`VerificationReport`] is always returned for any syntactically valid
//! JSON input — never an `Err`.
//!
//! ## Concurrency
//!
//! [`CertificateVerifier`] is immutable after construction (compiled schema
//! pair + public key) and `Send + Sync`; verification calls are pure,
//! bounded computations that may run fully in parallel.

pub mod chain;
pub mod config;
pub mod hash;
pub mod pipeline;
pub mod report;
pub mod signature;
pub mod summary;

pub use chain::ChainCheck;
pub use config::VerifierConfig;
pub use hash::HashCheck;
pub use pipeline::{CertificateVerifier, LINKED_BACKUP_FIELD};
pub use report::{ComputedDigests, VerificationReport};
pub use signature::{
    SignatureCheck, CANONICALIZATION_SCHEME, EXPECTED_ALGORITHM, EXPECTED_PUBKEY_ID,
};
pub use summary::CertSummary;
