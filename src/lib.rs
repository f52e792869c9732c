//! Signed values: HMAC-authenticated key/value payloads.
//!
//! # Overview
//!
//! A [`SignedValueStore`] holds a flat multi-valued string map. It can be
//! exported as two transport-safe strings, a tag and a payload, and imported
//! again by any holder of the same secret key. Any change to either string is
//! detected before a single byte of the payload is parsed. This is the core of
//! signed cookies, signed URL parameters, and similar stateless tokens.
//!
//! # Core Guarantees
//!
//! - **Canonical payloads**: equal maps always serialize identically
//! - **Full-length tags**: the digest is never truncated
//! - **Verify before parse**: payload contents are untrusted until the tag matches
//! - **Constant-time comparison**: no early exit on the first differing byte
//! - **No partial updates**: a failed decode leaves the store unchanged
//!
//! # Module Structure
//!
//! - [`values`]: ordered multi-valued string map
//! - [`codec`]: canonical query encoding and transport (base64) encoding
//! - [`security`]: secret keys, keyed-hash strategies, tags, errors
//! - [`store`]: the [`SignedValueStore`] itself
//! - [`config`]: encoding conventions shared by both ends
//!
//! Key rotation, key storage, expiry and transport are the caller's concern.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod codec;
pub mod config;
pub mod security;
pub mod store;
pub mod values;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use codec::{CodecError, SpaceEncoding, TransportEncoding};
#[cfg(feature = "config-file")]
pub use config::ConfigError;
pub use config::CodecConfig;
pub use security::{
    AuthError, AuthErrorKind, AuthResult, AuthenticationTag, HashFactory, HmacSha256, HmacSha384,
    HmacSha512, MacAccumulator, SecretKey,
};
pub use store::{SignedPayload, SignedValueStore};
pub use values::Values;
