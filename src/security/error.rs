//! Security-related error types.
//!
//! This module defines the error returned by store construction and by the
//! decode side of the authenticate/verify protocol.

use crate::codec::CodecError;
use core::fmt;

/// The kind of authentication error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// The supplied tag or payload is not valid transport encoding.
    MalformedInput,
    /// The payload authenticated but is not valid canonical query syntax.
    MalformedPayload,
    /// Recomputed tag does not match the supplied tag.
    AuthenticationFailed,
    /// The provided key is unusable (e.g., empty).
    InvalidKey,
}

/// An error from authentication operations.
///
/// # Example
///
/// ```
/// use signed_values::security::{AuthError, AuthErrorKind};
///
/// let err = AuthError::authentication_failed().with_context("session cookie");
///
/// assert!(err.is_authentication_failure());
/// assert!(err.to_string().contains("session cookie"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    /// The kind of error.
    kind: AuthErrorKind,
    /// Optional context about what was being authenticated.
    context: Option<String>,
}

impl AuthError {
    /// Creates a new authentication error with the given kind.
    #[must_use]
    pub const fn new(kind: AuthErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Creates a malformed input error.
    #[must_use]
    pub const fn malformed_input() -> Self {
        Self::new(AuthErrorKind::MalformedInput)
    }

    /// Creates a malformed payload error.
    #[must_use]
    pub const fn malformed_payload() -> Self {
        Self::new(AuthErrorKind::MalformedPayload)
    }

    /// Creates an authentication failure error.
    #[must_use]
    pub const fn authentication_failed() -> Self {
        Self::new(AuthErrorKind::AuthenticationFailed)
    }

    /// Creates an invalid key error.
    #[must_use]
    pub const fn invalid_key() -> Self {
        Self::new(AuthErrorKind::InvalidKey)
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// Returns `true` if the tag did not match.
    #[must_use]
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self.kind, AuthErrorKind::AuthenticationFailed)
    }

    /// Returns `true` if the input could not be transport-decoded.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self.kind, AuthErrorKind::MalformedInput)
    }

    /// Returns `true` if an authenticated payload failed to parse.
    #[must_use]
    pub const fn is_malformed_payload(&self) -> bool {
        matches!(self.kind, AuthErrorKind::MalformedPayload)
    }

    /// Returns `true` if this error is due to an invalid key.
    #[must_use]
    pub const fn is_invalid_key(&self) -> bool {
        matches!(self.kind, AuthErrorKind::InvalidKey)
    }

    /// Adds context to the error.
    #[must_use]
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// Returns the error context, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            AuthErrorKind::MalformedInput => "malformed transport encoding",
            AuthErrorKind::MalformedPayload => "malformed payload",
            AuthErrorKind::AuthenticationFailed => "authentication verification failed",
            AuthErrorKind::InvalidKey => "invalid authentication key",
        };

        write!(f, "{msg}")?;

        if let Some(ctx) = &self.context {
            write!(f, ": {ctx}")?;
        }

        Ok(())
    }
}

impl std::error::Error for AuthError {}

impl From<CodecError> for AuthError {
    fn from(e: CodecError) -> Self {
        let kind = if e.is_transport() {
            AuthErrorKind::MalformedInput
        } else {
            AuthErrorKind::MalformedPayload
        };
        Self::new(kind).with_context(e.to_string())
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
