//! Keyed-hash strategies.
//!
//! The store never picks a hash algorithm itself. A [`HashFactory`] is
//! injected at construction and turns the secret key into a keyed
//! [`MacAccumulator`]; each MAC computation starts from a fresh clone of that
//! keyed state, feeds the whole message, and returns the full digest.
//!
//! HMAC over SHA-256, SHA-384 and SHA-512 is provided. Callers needing a
//! different construction implement [`HashFactory`] for their own type.

use crate::security::error::{AuthError, AuthResult};
use crate::security::tag::AuthenticationTag;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// A keyed-hash state that absorbs a message and yields its tag.
pub trait MacAccumulator: Clone {
    /// Absorbs `bytes`.
    fn update(&mut self, bytes: &[u8]);

    /// Consumes the state and returns the untruncated digest.
    fn finalize(self) -> Vec<u8>;
}

/// Produces keyed [`MacAccumulator`]s for a fixed algorithm.
pub trait HashFactory {
    /// The keyed state this factory produces.
    type Accumulator: MacAccumulator;

    /// Human-readable algorithm name (for logs and diagnostics).
    fn algorithm(&self) -> &'static str;

    /// Output length of the finalized digest, in bytes.
    fn tag_len(&self) -> usize;

    /// Keys a fresh accumulator with `key`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidKey`](crate::security::AuthErrorKind::InvalidKey)
    /// error if the algorithm rejects the key.
    fn keyed(&self, key: &[u8]) -> AuthResult<Self::Accumulator>;
}

/// Computes the tag of `message` starting from the keyed state `keyed`.
///
/// `keyed` itself is left untouched, so the result depends only on the key
/// and the message.
pub fn compute_mac<A: MacAccumulator>(keyed: &A, message: &[u8]) -> AuthenticationTag {
    let mut mac = keyed.clone();
    mac.update(message);
    AuthenticationTag::from_bytes(mac.finalize())
}

macro_rules! hmac_factory {
    ($(#[$meta:meta])* $name:ident, $digest:ty, $label:literal, $len:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl HashFactory for $name {
            type Accumulator = Hmac<$digest>;

            fn algorithm(&self) -> &'static str {
                $label
            }

            fn tag_len(&self) -> usize {
                $len
            }

            fn keyed(&self, key: &[u8]) -> AuthResult<Self::Accumulator> {
                <Hmac<$digest> as KeyInit>::new_from_slice(key)
                    .map_err(|_| AuthError::invalid_key().with_context($label))
            }
        }

        impl MacAccumulator for Hmac<$digest> {
            fn update(&mut self, bytes: &[u8]) {
                Mac::update(self, bytes);
            }

            fn finalize(self) -> Vec<u8> {
                Mac::finalize(self).into_bytes().to_vec()
            }
        }
    };
}

hmac_factory!(
    /// HMAC-SHA-256 (32-byte tags).
    HmacSha256,
    Sha256,
    "HMAC-SHA-256",
    32
);

hmac_factory!(
    /// HMAC-SHA-384 (48-byte tags).
    HmacSha384,
    Sha384,
    "HMAC-SHA-384",
    48
);

hmac_factory!(
    /// HMAC-SHA-512 (64-byte tags).
    HmacSha512,
    Sha512,
    "HMAC-SHA-512",
    64
);
