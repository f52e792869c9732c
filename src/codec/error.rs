//! Codec error types.

use thiserror::Error;

/// Error produced while decoding a transport string or a canonical query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A `%` was not followed by two hex digits.
    #[error("invalid percent escape at byte {offset}")]
    InvalidEscape {
        /// Byte offset of the offending `%` within the query.
        offset: usize,
    },
    /// An unescaped key or value is not valid UTF-8.
    #[error("unescaped component is not valid UTF-8")]
    InvalidUtf8,
    /// A `;` appeared in the query; only `&` separates pairs.
    #[error("invalid semicolon separator at byte {offset}")]
    Semicolon {
        /// Byte offset of the `;` within the query.
        offset: usize,
    },
    /// The transport text form could not be decoded.
    #[error("invalid transport encoding: {0}")]
    Transport(String),
}

impl CodecError {
    /// Returns `true` if the error came from the transport layer rather than
    /// the query syntax.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Transport(err.to_string())
    }
}
