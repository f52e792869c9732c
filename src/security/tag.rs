//! Authentication tags for payload verification.
//!
//! A tag is the full, untruncated output of the store's keyed hash over the
//! canonical payload. Its length depends on the chosen algorithm.

use std::fmt;
use subtle::ConstantTimeEq;

/// A MAC over a canonical payload.
///
/// Equality is constant-time: `==` on two tags never exits early on the first
/// differing byte.
#[derive(Clone)]
pub struct AuthenticationTag {
    bytes: Vec<u8>,
}

impl AuthenticationTag {
    /// Creates a tag from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes of the tag.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the tag length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-length tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the tag and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Constant-time comparison against supplied tag bytes.
    ///
    /// The only early exit is a length mismatch, which depends on the
    /// algorithm (public) rather than on tag contents. Equal-length inputs
    /// are always compared in full.
    #[must_use]
    pub fn constant_time_eq(&self, supplied: &[u8]) -> bool {
        self.bytes.as_slice().ct_eq(supplied).into()
    }
}

impl PartialEq for AuthenticationTag {
    fn eq(&self, other: &Self) -> bool {
        self.constant_time_eq(&other.bytes)
    }
}

impl Eq for AuthenticationTag {}

impl fmt::Debug for AuthenticationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display prefix for identification
        match self.bytes.as_slice() {
            [a, b, ..] => write!(f, "Tag({a:02x}{b:02x}...)"),
            _ => write!(f, "Tag(<{} bytes>)", self.bytes.len()),
        }
    }
}
