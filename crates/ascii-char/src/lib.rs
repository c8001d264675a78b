//! Validated 7-bit ASCII code units.
//!
//! This crate provides [`AsciiChar`], a single byte known to lie in the
//! ASCII range `0..=0x7F`. Construction is fallible at the boundary and
//! infallible everywhere else: once a value exists, no operation on it can
//! leave the range.
//!
//! # Examples
//!
//! ```
//! use ascii_char::AsciiChar;
//!
//! let c = AsciiChar::from_byte(b'c').unwrap();
//! assert_eq!(c.to_char(), 'c');
//! assert!(AsciiChar::from_byte(0xFF).is_err());
//! ```

#![warn(missing_docs)]

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A single 7-bit ASCII code unit.
///
/// Ordering, equality, and hashing follow the numeric byte value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiChar(u8);

impl AsciiChar {
    /// The NUL character, `0x00`.
    pub const NUL: Self = Self(0x00);

    /// The line feed character, `0x0A`.
    pub const LINE_FEED: Self = Self(0x0A);

    /// The space character, `0x20`.
    pub const SPACE: Self = Self(0x20);

    /// The highest ASCII code unit, `0x7F` (DEL).
    pub const MAX: Self = Self(0x7F);

    /// Create a code unit from a byte.
    ///
    /// Fails for bytes above `0x7F`.
    pub const fn from_byte(b: u8) -> Result<Self, OutOfRangeError> {
        if b <= 0x7F {
            Ok(Self(b))
        } else {
            Err(OutOfRangeError { code: b as u32 })
        }
    }

    /// Create a code unit from a `char`.
    ///
    /// Fails for code points above `U+007F`. Code points in `0x80..=0xFF`
    /// are rejected even though single-byte encodings can carry them.
    pub const fn from_char(c: char) -> Result<Self, OutOfRangeError> {
        if (c as u32) <= 0x7F {
            Ok(Self(c as u8))
        } else {
            Err(OutOfRangeError { code: c as u32 })
        }
    }

    /// Wrap a byte already known to be ASCII.
    ///
    /// This is the fast path for bytes covered by a buffer-level scan.
    ///
    /// # Safety
    ///
    /// `b` must be at most `0x7F`.
    #[must_use]
    pub const unsafe fn from_byte_unchecked(b: u8) -> Self {
        debug_assert!(b <= 0x7F);
        Self(b)
    }

    /// Get the numeric code unit.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Get the code unit as a `char`.
    #[must_use]
    pub const fn to_char(self) -> char {
        self.0 as char
    }
}

/// Error returned when a byte or code point lies outside the ASCII range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("code point {code:#x} is outside the ASCII range")]
pub struct OutOfRangeError {
    /// The rejected code point.
    pub code: u32,
}

// ============================================================
// Trait Implementations
// ============================================================

impl fmt::Display for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_char())
    }
}

impl TryFrom<u8> for AsciiChar {
    type Error = OutOfRangeError;

    fn try_from(b: u8) -> Result<Self, OutOfRangeError> {
        Self::from_byte(b)
    }
}

impl TryFrom<char> for AsciiChar {
    type Error = OutOfRangeError;

    fn try_from(c: char) -> Result<Self, OutOfRangeError> {
        Self::from_char(c)
    }
}

impl From<AsciiChar> for u8 {
    fn from(c: AsciiChar) -> u8 {
        c.to_byte()
    }
}

impl From<AsciiChar> for char {
    fn from(c: AsciiChar) -> char {
        c.to_char()
    }
}

impl Serialize for AsciiChar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

impl<'de> Deserialize<'de> for AsciiChar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Self::from_char(c).map_err(serde::de::Error::custom)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        let c = AsciiChar::from_byte(b'a').unwrap();
        assert_eq!(c.to_byte(), b'a');
        assert_eq!(c.to_char(), 'a');

        assert_eq!(AsciiChar::from_byte(0x7F), Ok(AsciiChar::MAX));
        assert_eq!(
            AsciiChar::from_byte(0x80),
            Err(OutOfRangeError { code: 0x80 })
        );
        assert_eq!(
            AsciiChar::from_byte(0xFF),
            Err(OutOfRangeError { code: 0xFF })
        );
    }

    #[test]
    fn test_from_char() {
        assert_eq!(AsciiChar::from_char('~').unwrap().to_byte(), b'~');
        // One character, but outside the range even as a Latin-1 byte.
        assert_eq!(
            AsciiChar::from_char('é'),
            Err(OutOfRangeError { code: 0xE9 })
        );
        assert_eq!(
            AsciiChar::from_char('世'),
            Err(OutOfRangeError { code: 0x4E16 })
        );
    }

    #[test]
    fn test_ordering() {
        let a = AsciiChar::from_byte(b'a').unwrap();
        let b = AsciiChar::from_byte(b'b').unwrap();
        assert!(a < b);
        assert!(AsciiChar::NUL < AsciiChar::MAX);
    }

    #[test]
    fn test_conversions() {
        let c = AsciiChar::try_from('n').unwrap();
        assert_eq!(u8::from(c), b'n');
        assert_eq!(char::from(c), 'n');
        assert!(AsciiChar::try_from(0xC3u8).is_err());
    }

    #[test]
    fn test_display_debug() {
        let c = AsciiChar::from_byte(b'x').unwrap();
        assert_eq!(format!("{c}"), "x");
        assert_eq!(format!("{c:?}"), "'x'");
    }

    #[test]
    fn test_error_display() {
        let err = AsciiChar::from_byte(0xFF).unwrap_err();
        assert_eq!(err.to_string(), "code point 0xff is outside the ASCII range");
    }
}
