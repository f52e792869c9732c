//! Canonical query-string encoding of [`Values`].
//!
//! The canonical form is `key=value` pairs joined by `&`, keys in byte-wise
//! ascending order, values of one key in insertion order. Every byte outside
//! `A-Z a-z 0-9 - _ . ~` is percent-escaped with uppercase hex digits, except
//! space, which follows the configured [`SpaceEncoding`].
//!
//! Parsing is strict: a bad escape, a `;` separator, or a component that does
//! not unescape to UTF-8 is an error. Nothing is dropped or truncated.

use crate::codec::CodecError;
use crate::values::Values;
use serde::{Deserialize, Serialize};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// How the encoder writes a space character.
///
/// The parser accepts both forms regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceEncoding {
    /// Space becomes `+` (form encoding).
    #[default]
    Plus,
    /// Space becomes `%20`.
    Percent20,
}

const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

/// Percent-escapes `component` onto `out`.
pub fn escape_into(component: &str, space: SpaceEncoding, out: &mut String) {
    for &b in component.as_bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else if b == b' ' && space == SpaceEncoding::Plus {
            out.push('+');
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(b & 0x0F)]));
        }
    }
}

/// Percent-escapes a single key or value.
#[must_use]
pub fn escape(component: &str, space: SpaceEncoding) -> String {
    let mut out = String::with_capacity(component.len());
    escape_into(component, space, &mut out);
    out
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Reverses [`escape`]. `+` decodes to space.
///
/// `base` is added to reported offsets so errors point into the full query.
fn unescape_at(component: &str, base: usize) -> Result<String, CodecError> {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                let (Some(hi), Some(lo)) = (hi, lo) else {
                    return Err(CodecError::InvalidEscape { offset: base + i });
                };
                out.push((hi << 4) | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| CodecError::InvalidUtf8)
}

/// Reverses [`escape`] for a single key or value.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEscape`] for a `%` not followed by two hex
/// digits and [`CodecError::InvalidUtf8`] if the unescaped bytes are not
/// UTF-8.
pub fn unescape(component: &str) -> Result<String, CodecError> {
    unescape_at(component, 0)
}

/// Serializes `values` into canonical query form.
///
/// Two maps with equal contents always produce the same string.
#[must_use]
pub fn encode(values: &Values, space: SpaceEncoding) -> String {
    let mut out = String::new();
    for (key, vs) in values.iter() {
        for v in vs {
            if !out.is_empty() {
                out.push('&');
            }
            escape_into(key, space, &mut out);
            out.push('=');
            escape_into(v, space, &mut out);
        }
    }
    out
}

/// Parses a canonical query back into [`Values`].
///
/// Repeated keys become additional values for that key. Empty segments are
/// skipped, and a segment without `=` is a key with an empty value. The empty
/// string parses to an empty map.
///
/// # Errors
///
/// Any malformed segment fails the whole parse.
pub fn parse(query: &str) -> Result<Values, CodecError> {
    let mut values = Values::new();
    let mut offset = 0;
    for segment in query.split('&') {
        let start = offset;
        offset += segment.len() + 1;
        if segment.is_empty() {
            continue;
        }
        if let Some(pos) = segment.find(';') {
            return Err(CodecError::Semicolon { offset: start + pos });
        }
        let (raw_key, raw_value, value_start) = match segment.split_once('=') {
            Some((k, v)) => (k, v, start + k.len() + 1),
            None => (segment, "", start + segment.len()),
        };
        let key = unescape_at(raw_key, start)?;
        let value = unescape_at(raw_value, value_start)?;
        values.add(key, value);
    }
    Ok(values)
}

/// Parses a canonical query held as raw bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidUtf8`] if `bytes` is not UTF-8, otherwise as
/// [`parse`].
pub fn parse_bytes(bytes: &[u8]) -> Result<Values, CodecError> {
    let query = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
    parse(query)
}
