//! # swv-schema — Certificate Schema Validation
//!
//! Runtime validation of certificate documents against the fixed
//! backup/wipe JSON Schema pair.
//!
//! ## SchemaSource Contract
//!
//! The core does not read schema files. The host process loads and parses
//! the two schema documents however it likes (disk, embedded, config
//! service) and hands them to [`CertificateSchemas::new`] once at startup.
//! Compilation happens there; validation afterwards is read-only and
//! lock-free.
//!
//! ## Violation Reporting
//!
//! Validation never halts on the first error: every violation is collected
//! with its JSON-pointer instance path and message, so a certificate with
//! three missing sections reports all three.
//!
//! ## Crate Policy
//!
//! - Depends only on `swv-core` internally.
//! - Schema validation is a trust boundary: a document that fails here is
//!   still run through the other checks (best-effort, independent), but the
//!   aggregate report marks it structurally invalid.

pub mod validate;

pub use validate::{CertificateSchemas, SchemaError, Violation};
