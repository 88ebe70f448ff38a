//! # swv-core — Foundational Types for the SecureWipe Verification Core
//!
//! This crate is the bedrock of the certificate verification pipeline. It
//! defines the type-system primitives that make the cross-implementation
//! byte-compatibility guarantees hold by construction. Every other crate in
//! the workspace depends on `swv-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** The bytes a certificate signature covers
//!    are produced exclusively by `CanonicalBytes::new()`: recursive key
//!    sort, compact separators, UTF-8 with non-ASCII emitted literally.
//!    No raw `serde_json::to_vec()` for signature input. Ever.
//!
//! 2. **`WireBytes` newtype.** The self-declared integrity hash of a backup
//!    certificate is defined over the exact bytes received on the transport,
//!    not a re-serialization. `WireBytes` keeps the two byte sources apart
//!    at the type level.
//!
//! 3. **`CertKind` discriminator.** One enum, two variants, exhaustive
//!    `match` everywhere. A certificate with a missing or unrecognized
//!    `cert_type` never reaches schema selection.
//!
//! 4. **Digest functions accept newtypes, not `&[u8]`.** `sha256_hex()`
//!    takes `&CanonicalBytes`, `sha256_wire_hex()` takes `&WireBytes` —
//!    mixing up the two byte sources is a compile error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `swv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod kind;
pub mod wire;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, sha256_wire_hex, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, CryptoError, KindError};
pub use kind::CertKind;
pub use wire::WireBytes;
