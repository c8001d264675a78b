//! The construction boundary.
//!
//! Everything that turns unvalidated input into [`AsciiText`] lives here:
//! the buffer and text validators, the literal contract, and the [`ascii!`]
//! macro. Each scans its input exactly once; no other code path can
//! establish the ASCII invariant.
//!
//! [`ascii!`]: crate::ascii

use bytes::Bytes;

use crate::error::ValidationError;
use crate::text::AsciiText;

impl AsciiText {
    /// Validate a byte buffer, wrapping it without copying on success.
    ///
    /// Scans the buffer once and reports the lowest index holding a byte
    /// above `0x7F`.
    pub fn from_bytes(buf: Bytes) -> Result<AsciiText, ValidationError> {
        match first_non_ascii(buf.as_ref()) {
            None => Ok(AsciiText::wrap(buf)),
            Some(position) => Err(ValidationError { position }),
        }
    }

    /// Validate a borrowed byte slice, copying it on success.
    pub fn from_slice(bytes: &[u8]) -> Result<AsciiText, ValidationError> {
        match first_non_ascii(bytes) {
            None => Ok(AsciiText::wrap(Bytes::copy_from_slice(bytes))),
            Some(position) => Err(ValidationError { position }),
        }
    }

    /// Validate generic text, copying its content on success.
    ///
    /// The reported position counts characters of the source text, not
    /// bytes. Code points in `0x80..=0xFF` are out of range even though
    /// single-byte encodings can carry them.
    pub fn from_text(s: &str) -> Result<AsciiText, ValidationError> {
        match s.chars().position(|c| !c.is_ascii()) {
            None => Ok(AsciiText::wrap(Bytes::copy_from_slice(s.as_bytes()))),
            Some(position) => Err(ValidationError { position }),
        }
    }

    /// Wrap a static byte slice, panicking on a byte above `0x7F`.
    ///
    /// Intended for literals: in a `const` context the panic rejects the
    /// build, which is how the [`ascii!`] macro uses it.
    ///
    /// [`ascii!`]: crate::ascii
    pub const fn from_static(bytes: &'static [u8]) -> AsciiText {
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] > 0x7F {
                panic!("from_static: byte outside the ASCII range");
            }
            i += 1;
        }
        AsciiText {
            bytes: Bytes::from_static(bytes),
        }
    }
}

/// Index of the first byte above `0x7F`, if any.
fn first_non_ascii(bytes: &[u8]) -> Option<usize> {
    if bytes.is_ascii() {
        return None;
    }
    bytes.iter().position(|&b| b > 0x7F)
}

/// Validate a literal, returning its bytes unchanged.
///
/// This is the identical predicate as [`AsciiText::from_bytes`], evaluable
/// at compile time so build tooling can reject a bad literal before normal
/// execution.
pub const fn validate_literal(text: &str) -> Result<&[u8], ValidationError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] > 0x7F {
            return Err(ValidationError { position: i });
        }
        i += 1;
    }
    Ok(bytes)
}

/// Construct an [`AsciiText`] from a string literal, rejecting non-ASCII
/// content at compile time.
///
/// ```
/// use ascii_text::ascii;
///
/// let t = ascii!("nyan");
/// assert_eq!(t.len(), 4);
/// ```
#[macro_export]
macro_rules! ascii {
    ($lit:expr) => {{
        const _: () = match $crate::validate_literal($lit) {
            Ok(_) => (),
            Err(_) => panic!("ascii!: literal contains a non-ASCII character"),
        };
        $crate::AsciiText::from_static($lit.as_bytes())
    }};
}

// ============================================================
// Tests
// ============================================================
