//! Keys, keyed hashes, and tags for payload authentication.
//!
//! # Design Principles
//!
//! 1. **Caller picks the algorithm**: the hash is an injected [`HashFactory`]
//! 2. **No ambient keys**: keys must be explicitly provided
//! 3. **Fail-safe defaults**: invalid or mismatched input fails closed
//! 4. **Constant-time verification**: tag comparison never short-circuits on content
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    SignedValueStore                      │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │            SecretKey + HashFactory                  │ │
//! │  │  • keyed once at construction                       │ │
//! │  │  • key bytes redacted from Debug, wiped on drop     │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! │                          │                               │
//! │                          ▼                               │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │                  compute_mac                        │ │
//! │  │  • fresh accumulator per message                    │ │
//! │  │  • full digest, never truncated                     │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! │                          │                               │
//! │                          ▼                               │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │               AuthenticationTag                     │ │
//! │  │  • constant-time equality                           │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod hash;
pub mod key;
pub mod tag;

pub use error::{AuthError, AuthErrorKind, AuthResult};
pub use hash::{HashFactory, HmacSha256, HmacSha384, HmacSha512, MacAccumulator, compute_mac};
pub use key::{RECOMMENDED_KEY_SIZE, SecretKey};
pub use tag::AuthenticationTag;
