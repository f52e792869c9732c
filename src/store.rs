//! The signed value store.
//!
//! [`SignedValueStore`] owns a [`Values`] map, a keyed hash built from the
//! caller's secret key and [`HashFactory`], and a [`CodecConfig`]. Two
//! operations move data across the trust boundary:
//!
//! - [`encode`](SignedValueStore::encode): canonical payload + full-length
//!   MAC, each in transport text form.
//! - [`decode`](SignedValueStore::decode): transport-decode both parts,
//!   recompute the MAC, compare in constant time, and only then parse the
//!   payload and replace the map.
//!
//! # Ordering
//!
//! ```text
//!  tag text ──► transport decode ─┐
//!                                 ├─► MAC(payload) == tag ? ──► parse ──► replace values
//!  payload text ► transport decode┘        │ no
//!                                          └──► AuthenticationFailed (values untouched)
//! ```
//!
//! Nothing in the payload is inspected before the tag comparison succeeds.
//!
//! The store has no internal locking. Share one instance across threads only
//! behind the caller's own mutual exclusion; separate instances with the same
//! key need no coordination.

use crate::codec::query;
use crate::config::CodecConfig;
use crate::security::hash::{HashFactory, compute_mac};
use crate::security::{AuthError, AuthResult, AuthenticationTag, HmacSha256, SecretKey};
use crate::values::Values;
use core::fmt;

/// Transport-encoded output of [`SignedValueStore::encode`].
///
/// The tag and payload are separate artifacts; they may travel in different
/// fields (e.g. two cookies) as long as both come back together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedPayload {
    tag: String,
    payload: String,
}

impl SignedPayload {
    /// Creates a pair from already-encoded text.
    #[must_use]
    pub fn new(tag: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: payload.into(),
        }
    }

    /// The encoded authentication tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The encoded canonical payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Splits into `(tag, payload)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.tag, self.payload)
    }
}

/// A key-value map that can be authenticated, exported, and verified back in.
///
/// # Example
///
/// ```
/// use signed_values::{HmacSha256, SignedValueStore};
///
/// let mut sender = SignedValueStore::new("k1", HmacSha256)?;
/// sender.set("user", "42");
/// let signed = sender.encode();
///
/// let mut receiver = SignedValueStore::new("k1", HmacSha256)?;
/// receiver.decode(signed.tag(), signed.payload())?;
/// assert_eq!(receiver.get("user"), "42");
///
/// let mut stranger = SignedValueStore::new("k2", HmacSha256)?;
/// let err = stranger.decode(signed.tag(), signed.payload()).unwrap_err();
/// assert!(err.is_authentication_failure());
/// # Ok::<(), signed_values::AuthError>(())
/// ```
pub struct SignedValueStore<F: HashFactory = HmacSha256> {
    values: Values,
    factory: F,
    /// Accumulator already seeded with the secret key. Every MAC starts from
    /// a clone of it; the raw key bytes are dropped after construction.
    keyed: F::Accumulator,
    config: CodecConfig,
}

impl<F: HashFactory> SignedValueStore<F> {
    /// Creates an empty store keyed with `key` using `factory`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidKey`](crate::AuthErrorKind::InvalidKey) error for
    /// an empty key or a key the factory rejects.
    ///
    /// The empty-key check is stricter than HMAC itself, which is defined
    /// for a zero-length key: a store keyed with no secret would accept
    /// tags anyone can compute, so it is refused here rather than left to
    /// the factory.
    pub fn new(key: impl Into<SecretKey>, factory: F) -> AuthResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(AuthError::invalid_key().with_context("empty secret key"));
        }
        let keyed = factory.keyed(key.as_bytes())?;

        #[cfg(feature = "tracing-integration")]
        tracing::debug!(
            algorithm = factory.algorithm(),
            key_len = key.len(),
            "signed value store created"
        );

        Ok(Self {
            values: Values::new(),
            factory,
            keyed,
            config: CodecConfig::default(),
        })
    }

    /// Replaces the encoding conventions.
    #[must_use]
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the encoding conventions.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Returns the keyed-hash algorithm name.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.factory.algorithm()
    }

    /// Replaces all values for `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.set(key, value);
    }

    /// Appends `value` to the values for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.add(key, value);
    }

    /// Removes `key` and all its values.
    pub fn del(&mut self, key: &str) {
        self.values.del(key);
    }

    /// Returns the first value for `key`, or `""`.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key)
    }

    /// Returns every value for `key` in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get_all(key)
    }

    /// Read-only view of the whole map.
    #[must_use]
    pub const fn values(&self) -> &Values {
        &self.values
    }

    fn compute_mac(&self, message: &[u8]) -> AuthenticationTag {
        let tag = compute_mac(&self.keyed, message);
        debug_assert_eq!(
            tag.len(),
            self.factory.tag_len(),
            "{} produced a tag of unexpected length",
            self.factory.algorithm()
        );
        tag
    }

    /// Serializes and authenticates the current values.
    ///
    /// Deterministic: an unchanged store encodes to the same pair every time.
    #[must_use]
    pub fn encode(&self) -> SignedPayload {
        let payload = query::encode(&self.values, self.config.space);
        let tag = self.compute_mac(payload.as_bytes());

        #[cfg(feature = "tracing-integration")]
        tracing::debug!(
            entries = self.values.len(),
            payload_len = payload.len(),
            "signed values encoded"
        );

        let transport = self.config.transport;
        SignedPayload {
            tag: transport.encode(tag.as_bytes()),
            payload: transport.encode(payload.as_bytes()),
        }
    }

    /// Verifies a tag/payload pair and returns the parsed values without
    /// touching the store.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` if either part is not valid transport text
    /// - `AuthenticationFailed` if the tag does not match
    /// - `MalformedPayload` if an authenticated payload does not parse
    pub fn verify(&self, tag: impl AsRef<[u8]>, payload: impl AsRef<[u8]>) -> AuthResult<Values> {
        let transport = self.config.transport;
        let supplied_tag = transport
            .decode(tag)
            .map_err(|e| AuthError::malformed_input().with_context(format!("tag: {e}")))?;
        let payload = transport
            .decode(payload)
            .map_err(|e| AuthError::malformed_input().with_context(format!("payload: {e}")))?;

        let expected = self.compute_mac(&payload);
        if !expected.constant_time_eq(&supplied_tag) {
            return Err(AuthError::authentication_failed());
        }

        Ok(query::parse_bytes(&payload)?)
    }

    /// Verifies a tag/payload pair and, on success, replaces the values.
    ///
    /// On any error the current values are left exactly as they were, and
    /// the store stays usable.
    ///
    /// # Errors
    ///
    /// As [`verify`](Self::verify).
    pub fn decode(&mut self, tag: impl AsRef<[u8]>, payload: impl AsRef<[u8]>) -> AuthResult<()> {
        match self.verify(tag, payload) {
            Ok(values) => {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(entries = values.len(), "signed values decoded");

                self.values = values;
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(kind = ?err.kind(), "signed values rejected");

                Err(err)
            }
        }
    }
}

impl<F: HashFactory + fmt::Debug> fmt::Debug for SignedValueStore<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedValueStore")
            .field("values", &self.values)
            .field("factory", &self.factory)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
