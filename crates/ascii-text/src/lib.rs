//! Validated ASCII text over an immutable byte buffer.
//!
//! # Types
//!
//! - `AsciiText` - immutable ASCII string with structural sharing
//! - `AsciiChar` - a single validated code unit (re-exported from
//!   `ascii-char`)
//!
//! # Overview
//!
//! Raw bytes and generic text enter through the validators in [`validate`];
//! everything past that boundary is total. Structural operations (slicing,
//! splitting, grouping) share the underlying buffer, and higher-order
//! operations are typed over [`AsciiChar`], so no operation can introduce a
//! byte outside the range and nothing is ever re-validated.
//!
//! # Examples
//!
//! ```
//! use ascii_text::{ascii, AsciiText};
//!
//! let t = AsciiText::from_text("nyan~~nyan").unwrap();
//! let parts = t.split(|c| c.to_char() == '~');
//! assert_eq!(parts.len(), 3);
//!
//! let greeting = ascii!("hello");
//! assert_eq!(greeting.as_str(), "hello");
//! ```

#![warn(missing_docs)]
#![allow(unsafe_code)] // zero-copy str views require unsafe

pub mod error;
pub mod text;
pub mod validate;

pub use ascii_char::{AsciiChar, OutOfRangeError};
pub use bytes::Bytes;
pub use error::ValidationError;
pub use text::{AsciiText, Chars};
pub use validate::validate_literal;
