//! Secret key material for payload authentication.
//!
//! [`SecretKey`] holds the caller's key bytes. Its `Debug` and `Display`
//! output never include key material, and the bytes are wiped on drop.
//! Rotation and storage are the caller's job.

use crate::security::error::{AuthError, AuthResult};
use core::fmt;
use subtle::ConstantTimeEq;

/// Recommended key length in bytes (256 bits).
pub const RECOMMENDED_KEY_SIZE: usize = 32;

/// A secret key for HMAC computation.
///
/// Any non-empty length is accepted; HMAC hashes keys longer than the digest
/// block size and pads shorter ones.
///
/// # Example
///
/// ```
/// use signed_values::security::SecretKey;
///
/// let key = SecretKey::from("k1");
/// assert_eq!(key.len(), 2);
/// assert!(!format!("{key:?}").contains("k1"));
/// ```
#[derive(Clone)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Creates a key from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Generates `len` bytes of key material from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidKey`](crate::security::AuthErrorKind::InvalidKey)
    /// error if `len` is zero or the entropy source fails.
    pub fn generate(len: usize) -> AuthResult<Self> {
        if len == 0 {
            return Err(AuthError::invalid_key().with_context("zero-length key requested"));
        }
        let mut bytes = vec![0u8; len];
        getrandom::fill(&mut bytes).map_err(|e| {
            AuthError::invalid_key().with_context(format!("entropy source failed: {e}"))
        })?;
        Ok(Self { bytes })
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the key has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for SecretKey {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for SecretKey {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes>)", self.bytes.len())
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        // Best-effort wipe; the optimizer is not strictly prevented from
        // eliding it.
        for byte in &mut self.bytes {
            *byte = 0;
        }
        core::hint::black_box(&mut self.bytes);
    }
}
