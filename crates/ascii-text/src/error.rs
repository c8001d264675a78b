//! Validation errors for the construction boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a byte buffer or text value fails ASCII validation.
///
/// `position` is the index of the first offending unit: a byte index for
/// `AsciiText::from_bytes`, a character index for `AsciiText::from_text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("non-ASCII unit at index {position}")]
pub struct ValidationError {
    /// Index of the first unit outside the ASCII range.
    pub position: usize,
}
