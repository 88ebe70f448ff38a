//! # Wire Bytes — The Literal Transport Byte Sequence
//!
//! The self-declared integrity hash of a backup certificate
//! (`metadata.certificate_json_sha256`) is defined over the exact bytes the
//! verifier received, not over any re-serialization. `WireBytes` keeps that
//! byte source distinct from [`CanonicalBytes`](crate::CanonicalBytes) at
//! the type level, so the hash check and the signature check can never be
//! fed each other's input.

/// The exact byte sequence a certificate arrived as.
///
/// Constructed by the host transport from the request body, file contents,
/// or CLI argument. The verification core never re-derives these bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireBytes(Vec<u8>);

impl WireBytes {
    /// Wrap the received bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Access the raw received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the received byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the received byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for WireBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for WireBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for WireBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes_preserve_input() {
        let raw = br#"{ "cert_type" : "backup" }"#;
        let wire = WireBytes::from(&raw[..]);
        // Formatting quirks of the received document are preserved.
        assert_eq!(wire.as_bytes(), raw);
        assert_eq!(wire.len(), raw.len());
        assert!(!wire.is_empty());
    }
}
