//! # Canonical Serialization — Deterministic Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for the
//! bytes an Ed25519 certificate signature covers.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which sorts object keys
//! recursively and serializes with compact separators. Any function that
//! verifies a signature must accept `&CanonicalBytes`, so a non-canonical
//! byte sequence can never reach the verifier.
//!
//! ## Issuer Compatibility
//!
//! The output must match the issuing signer byte-for-byte, or every valid
//! signature is rejected. The fixed points are:
//!
//! 1. **Sorted object keys** — byte-wise lexicographic over the UTF-8 key.
//! 2. **Compact separators** — `:` and `,` only, no insignificant whitespace.
//!    Whitespace inside string literals is significant and preserved.
//! 3. **serde_json number formatting** — the signer serializes through
//!    serde_json, so e.g. `15.0` stays `15.0`. Do not substitute an
//!    ECMAScript-style number formatter here; it would silently break every
//!    signature over a document containing a float.
//! 4. **UTF-8 output, non-ASCII emitted literally** (no `\uXXXX` escapes),
//!    matching Python's `ensure_ascii=False` on the issuer side.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by the canonicalization pipeline: recursive
/// key sort, compact separators, UTF-8.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object members appear in byte-wise key order at every nesting level.
/// - Array element order is preserved.
/// - The byte sequence contains no whitespace outside string literals.
///
/// The inner `Vec<u8>` is private, so downstream code cannot violate these
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All signature
    /// verification in the pipeline must flow through this constructor.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::Encoding` if the value cannot be
    /// represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let sorted = sort_keys(value);
        let s = serde_json::to_string(&sorted)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for signing or verification.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively rebuild a JSON value with object members in sorted key order.
///
/// Scalars pass through unchanged: their canonical form is whatever
/// serde_json emits for them, matching the issuer. Arrays keep element
/// order. Objects are rebuilt through a `BTreeMap` so the result is sorted
/// regardless of how the input map is ordered.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_keys).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_keys_flat() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn test_key_order_insensitive() {
        let a = serde_json::from_str::<Value>(r#"{"b":1,"a":2}"#).unwrap();
        let b = serde_json::from_str::<Value>(r#"{"a":2,"b":1}"#).unwrap();
        let ca = CanonicalBytes::new(&a).unwrap();
        let cb = CanonicalBytes::new(&b).unwrap();
        assert_eq!(ca, cb);
        assert_eq!(ca.as_bytes(), br#"{"a":2,"b":1}"#);
    }

    #[test]
    fn test_nested_objects_sorted() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_array_order_preserved() {
        let data = serde_json::json!(["z", "a", "m"]);
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"["z","a","m"]"#);
    }

    #[test]
    fn test_no_insignificant_whitespace() {
        let data = serde_json::json!({
            "device": {"model": "Samsung SSD 980 PRO 1TB"},
            "count": 1543
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        // Whitespace appears only inside the string literal.
        let outside: String = {
            let mut out = String::new();
            let mut in_string = false;
            let mut escaped = false;
            for c in s.chars() {
                if in_string {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        in_string = false;
                    }
                } else if c == '"' {
                    in_string = true;
                } else {
                    out.push(c);
                }
            }
            out
        };
        assert!(!outside.chars().any(char::is_whitespace));
        assert!(s.contains("Samsung SSD 980 PRO 1TB"));
    }

    #[test]
    fn test_float_formatting_preserved() {
        // The issuer serializes through serde_json; 15.0 must stay 15.0.
        let data = serde_json::json!({"coverage": {"mode": "percent", "percent": 15.0}});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"coverage":{"mode":"percent","percent":15.0}}"#);
    }

    #[test]
    fn test_golden_certificate_fragment() {
        // Golden vector matching the issuing signer's output.
        let data = serde_json::json!({
            "cert_type": "backup",
            "cert_id": "backup_001",
            "created_at": "2023-01-01T00:00:00Z"
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(
            s,
            r#"{"cert_id":"backup_001","cert_type":"backup","created_at":"2023-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn test_empty_object() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
    }

    #[test]
    fn test_null_bool_passthrough() {
        let data = serde_json::json!({"containerized": false, "note": null});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"containerized":false,"note":null}"#);
    }

    #[test]
    fn test_unicode_emitted_literally() {
        // Matches the issuer's ensure_ascii=False: non-ASCII passes through
        // as UTF-8, not \u escapes.
        let data = serde_json::json!({"operator": "Ren\u{00e9}e"});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, "{\"operator\":\"Ren\u{00e9}e\"}");
        assert!(!s.contains("\\u"));
    }

    #[test]
    fn test_large_integer() {
        let data = serde_json::json!({"capacity_bytes": 1000204886016u64});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"capacity_bytes":1000204886016}"#);
    }

    #[test]
    fn test_len_and_is_empty() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": 1})).unwrap();
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), cb.as_bytes().len());
    }
}
