//! Transport-safe text form for tags and payloads.
//!
//! Both artifacts of an encoded store are raw bytes; this module turns them
//! into base64 text for cookies, headers, or URL parameters and back. Decoding
//! is strict: non-canonical padding or trailing bits are rejected.

use crate::codec::CodecError;
use base64::Engine as _;
use base64::engine::{GeneralPurpose, general_purpose};
use serde::{Deserialize, Serialize};

/// Base64 alphabet and padding convention shared by both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportEncoding {
    /// URL-safe alphabet with `=` padding.
    #[default]
    UrlSafe,
    /// URL-safe alphabet without padding.
    UrlSafeNoPad,
    /// Standard alphabet with `=` padding.
    Standard,
}

impl TransportEncoding {
    fn engine(self) -> GeneralPurpose {
        match self {
            Self::UrlSafe => general_purpose::URL_SAFE,
            Self::UrlSafeNoPad => general_purpose::URL_SAFE_NO_PAD,
            Self::Standard => general_purpose::STANDARD,
        }
    }

    /// Returns the configuration name of this encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UrlSafe => "url_safe",
            Self::UrlSafeNoPad => "url_safe_no_pad",
            Self::Standard => "standard",
        }
    }

    /// Encodes raw bytes as text.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        self.engine().encode(bytes)
    }

    /// Decodes text produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Transport`] if `text` is not valid in this
    /// encoding.
    pub fn decode(self, text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
        Ok(self.engine().decode(text)?)
    }
}

/// Encodes bytes with the default ([`TransportEncoding::UrlSafe`]) encoding.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    TransportEncoding::default().encode(bytes)
}

/// Decodes text with the default ([`TransportEncoding::UrlSafe`]) encoding.
///
/// # Errors
///
/// Returns [`CodecError::Transport`] on invalid input.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    TransportEncoding::default().decode(text)
}
