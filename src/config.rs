//! Encoding conventions shared by the two ends of a signed exchange.
//!
//! The transport form and the space convention are an external contract:
//! whoever verifies a payload must use the same [`CodecConfig`] as whoever
//! produced it. The defaults are URL-safe padded base64 and `+` for space.
//!
//! With the `config-file` feature a config can be read from TOML:
//!
//! ```toml
//! transport = "url_safe_no_pad"
//! space = "percent20"
//! ```

use crate::codec::{SpaceEncoding, TransportEncoding};
use serde::{Deserialize, Serialize};

/// Text conventions for encoded payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Base64 variant for the tag and payload.
    pub transport: TransportEncoding,
    /// How spaces are written in the canonical payload.
    pub space: SpaceEncoding,
}

impl CodecConfig {
    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transport: TransportEncoding::UrlSafe,
            space: SpaceEncoding::Plus,
        }
    }

    /// Sets the transport encoding.
    #[must_use]
    pub const fn with_transport(mut self, transport: TransportEncoding) -> Self {
        self.transport = transport;
        self
    }

    /// Sets the space convention.
    #[must_use]
    pub const fn with_space(mut self, space: SpaceEncoding) -> Self {
        self.space = space;
        self
    }

    /// Parses a configuration from TOML text. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML or unknown fields.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Error loading a [`CodecConfig`].
#[cfg(feature = "config-file")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text was invalid.
    #[error("invalid codec config: {0}")]
    Parse(#[from] toml::de::Error),
}
