//! # swv-crypto — Ed25519 Primitives
//!
//! Provides the asymmetric-signature building blocks for certificate
//! verification:
//!
//! - **Ed25519 verification** over `CanonicalBytes` (the only valid input
//!   type, enforcing canonicalization correctness at compile time).
//! - **`Ed25519Signature`** in the issuer's wire format: standard base64.
//! - **`Ed25519KeyPair`** for key generation and issuer-parity signing in
//!   tests. Production verification never signs.
//!
//! ## Crate Policy
//!
//! - Depends only on `swv-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   `CanonicalBytes`, real Ed25519.
//! - Private keys are never serialized or logged.

pub mod ed25519;

pub use ed25519::{verify, verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
