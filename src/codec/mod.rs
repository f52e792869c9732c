//! Canonical and transport encodings for signed payloads.
//!
//! - [`query`]: the canonical `key=value&...` form that is authenticated
//! - [`transport`]: the base64 text form the tag and payload travel in

pub mod error;
pub mod query;
pub mod transport;

pub use error::CodecError;
pub use query::SpaceEncoding;
pub use transport::TransportEncoding;
