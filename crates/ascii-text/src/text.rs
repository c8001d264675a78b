//! ASCII text type
//!
//! An immutable sequence of ASCII code units backed by a shared byte buffer.
//!
//! # Overview
//!
//! The `AsciiText` type wraps a [`Bytes`] buffer whose every byte is known
//! to be at most `0x7F`. The invariant is established once, by the
//! validators in [`crate::validate`], and preserved by construction
//! everywhere else: structural operations only remove, reorder, or
//! duplicate existing code units, and higher-order operations are typed
//! over [`AsciiChar`].
//!
//! # Examples
//!
//! ```
//! use ascii_text::AsciiText;
//!
//! let t = AsciiText::from_text("catboy").unwrap();
//! assert_eq!(t.len(), 6);
//! assert_eq!(t.take(3).as_str(), "cat");
//! ```

use std::fmt;
use std::str::FromStr;

use ascii_char::AsciiChar;
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

// ============================================================
// Core AsciiText Type
// ============================================================

/// Immutable ASCII string.
///
/// Equality, ordering, and hashing follow the underlying code units.
/// Cloning and slicing share the underlying buffer; no operation mutates a
/// buffer in place.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiText {
    pub(crate) bytes: Bytes,
}

impl AsciiText {
    /// Create the empty text.
    #[inline]
    pub const fn empty() -> Self {
        AsciiText { bytes: Bytes::new() }
    }

    /// Wrap a buffer whose bytes have already been validated.
    #[inline]
    pub(crate) fn wrap(bytes: Bytes) -> Self {
        AsciiText { bytes }
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// View the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// View the text as a `str` slice without copying.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte is at most 0x7F, which is valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Return the underlying buffer without copying or validation.
    #[inline]
    pub fn to_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Consume the text, returning the underlying buffer.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Copy the text out as an owned `String`.
    #[inline]
    pub fn to_text(&self) -> String {
        self.as_str().to_string()
    }

    /// Iterate over the code units.
    #[inline]
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            iter: self.as_bytes().iter(),
        }
    }

    #[inline]
    fn char_at(&self, i: usize) -> AsciiChar {
        // SAFETY: bytes of a validated buffer are ASCII.
        unsafe { AsciiChar::from_byte_unchecked(self.bytes[i]) }
    }

    // --------------------------------------------------------
    // Construction
    // --------------------------------------------------------

    /// Create a one-character text.
    #[inline]
    pub fn singleton(c: AsciiChar) -> Self {
        Self::wrap(Bytes::copy_from_slice(&[c.to_byte()]))
    }

    /// Create a text from a slice of code units.
    pub fn pack(chars: &[AsciiChar]) -> Self {
        let result: Vec<u8> = chars.iter().map(|c| c.to_byte()).collect();
        Self::wrap(Bytes::from(result))
    }

    /// Convert the text to a vector of code units.
    pub fn unpack(&self) -> Vec<AsciiChar> {
        self.chars().collect()
    }

    /// Prepend a character.
    pub fn cons(c: AsciiChar, t: &AsciiText) -> AsciiText {
        let mut result = Vec::with_capacity(1 + t.len());
        result.push(c.to_byte());
        result.extend_from_slice(t.as_bytes());
        Self::wrap(Bytes::from(result))
    }

    /// Append a character.
    pub fn snoc(t: &AsciiText, c: AsciiChar) -> AsciiText {
        let mut result = Vec::with_capacity(t.len() + 1);
        result.extend_from_slice(t.as_bytes());
        result.push(c.to_byte());
        Self::wrap(Bytes::from(result))
    }

    /// Append two texts.
    pub fn append(a: &AsciiText, b: &AsciiText) -> AsciiText {
        if a.is_empty() {
            return b.clone();
        }
        if b.is_empty() {
            return a.clone();
        }
        let mut result = Vec::with_capacity(a.len() + b.len());
        result.extend_from_slice(a.as_bytes());
        result.extend_from_slice(b.as_bytes());
        Self::wrap(Bytes::from(result))
    }

    /// Repeat a character `n` times. Non-positive counts yield the empty
    /// text.
    pub fn replicate(n: isize, c: AsciiChar) -> AsciiText {
        if n <= 0 {
            return AsciiText::empty();
        }
        Self::wrap(Bytes::from(vec![c.to_byte(); n as usize]))
    }

    /// Build a text from a seed by repeated application of a step function.
    pub fn unfoldr<S, F>(seed: S, mut f: F) -> AsciiText
    where
        F: FnMut(S) -> Option<(AsciiChar, S)>,
    {
        let mut result = Vec::new();
        let mut seed = seed;
        while let Some((c, next)) = f(seed) {
            result.push(c.to_byte());
            seed = next;
        }
        Self::wrap(Bytes::from(result))
    }

    /// Build a text from a seed, producing at most `n` characters.
    ///
    /// The second component is `Some(seed)` when generation stopped because
    /// the bound was reached, and `None` when the step function finished on
    /// its own.
    pub fn unfoldr_n<S, F>(n: usize, seed: S, mut f: F) -> (AsciiText, Option<S>)
    where
        F: FnMut(S) -> Option<(AsciiChar, S)>,
    {
        let mut result = Vec::with_capacity(n);
        let mut seed = seed;
        for _ in 0..n {
            match f(seed) {
                Some((c, next)) => {
                    result.push(c.to_byte());
                    seed = next;
                }
                None => return (Self::wrap(Bytes::from(result)), None),
            }
        }
        (Self::wrap(Bytes::from(result)), Some(seed))
    }

    /// Get the first character and the remainder.
    #[inline]
    pub fn uncons(&self) -> Option<(AsciiChar, AsciiText)> {
        if self.is_empty() {
            None
        } else {
            Some((self.char_at(0), Self::wrap(self.bytes.slice(1..))))
        }
    }

    /// Get the last character and the preceding text.
    #[inline]
    pub fn unsnoc(&self) -> Option<(AsciiText, AsciiChar)> {
        if self.is_empty() {
            None
        } else {
            let last = self.char_at(self.len() - 1);
            Some((Self::wrap(self.bytes.slice(..self.len() - 1)), last))
        }
    }

    // --------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------

    /// Get the first character.
    #[inline]
    pub fn head(&self) -> Option<AsciiChar> {
        if self.is_empty() {
            None
        } else {
            Some(self.char_at(0))
        }
    }

    /// Get the last character.
    #[inline]
    pub fn last(&self) -> Option<AsciiChar> {
        if self.is_empty() {
            None
        } else {
            Some(self.char_at(self.len() - 1))
        }
    }

    /// Get all but the first character.
    #[inline]
    pub fn tail(&self) -> Option<AsciiText> {
        if self.is_empty() {
            None
        } else {
            Some(Self::wrap(self.bytes.slice(1..)))
        }
    }

    /// Get all but the last character.
    #[inline]
    pub fn init(&self) -> Option<AsciiText> {
        if self.is_empty() {
            None
        } else {
            Some(Self::wrap(self.bytes.slice(..self.len() - 1)))
        }
    }

    // --------------------------------------------------------
    // Transformations
    // --------------------------------------------------------

    /// Apply a character function to each code unit.
    pub fn map<F>(&self, f: F) -> AsciiText
    where
        F: Fn(AsciiChar) -> AsciiChar,
    {
        let result: Vec<u8> = self.chars().map(|c| f(c).to_byte()).collect();
        Self::wrap(Bytes::from(result))
    }

    /// Reverse the text.
    pub fn reverse(&self) -> AsciiText {
        let result: Vec<u8> = self.as_bytes().iter().rev().copied().collect();
        Self::wrap(Bytes::from(result))
    }

    /// Insert a separator between code units.
    pub fn intersperse(sep: AsciiChar, t: &AsciiText) -> AsciiText {
        if t.len() <= 1 {
            return t.clone();
        }
        let bytes = t.as_bytes();
        let mut result = Vec::with_capacity(bytes.len() * 2 - 1);
        for (i, &b) in bytes.iter().enumerate() {
            if i > 0 {
                result.push(sep.to_byte());
            }
            result.push(b);
        }
        Self::wrap(Bytes::from(result))
    }

    /// Join texts with a separator.
    pub fn intercalate(sep: &AsciiText, ts: &[AsciiText]) -> AsciiText {
        if ts.is_empty() {
            return AsciiText::empty();
        }
        let total_len: usize =
            ts.iter().map(|t| t.len()).sum::<usize>() + sep.len() * (ts.len() - 1);
        let mut result = Vec::with_capacity(total_len);
        for (i, t) in ts.iter().enumerate() {
            if i > 0 {
                result.extend_from_slice(sep.as_bytes());
            }
            result.extend_from_slice(t.as_bytes());
        }
        Self::wrap(Bytes::from(result))
    }

    /// Left-to-right scan. The result is one unit longer than the input.
    pub fn scanl<F>(&self, init: AsciiChar, f: F) -> AsciiText
    where
        F: Fn(AsciiChar, AsciiChar) -> AsciiChar,
    {
        let mut result = Vec::with_capacity(self.len() + 1);
        let mut acc = init;
        result.push(acc.to_byte());
        for c in self.chars() {
            acc = f(acc, c);
            result.push(acc.to_byte());
        }
        Self::wrap(Bytes::from(result))
    }

    /// Accumulating map, threading state left to right.
    pub fn map_accum_l<S, F>(&self, init: S, mut f: F) -> (S, AsciiText)
    where
        F: FnMut(S, AsciiChar) -> (S, AsciiChar),
    {
        let mut result = Vec::with_capacity(self.len());
        let mut acc = init;
        for c in self.chars() {
            let (next, out) = f(acc, c);
            acc = next;
            result.push(out.to_byte());
        }
        (acc, Self::wrap(Bytes::from(result)))
    }

    // --------------------------------------------------------
    // Folds
    // --------------------------------------------------------

    /// Left fold over code units.
    pub fn foldl<B, F>(&self, init: B, f: F) -> B
    where
        F: Fn(B, AsciiChar) -> B,
    {
        self.chars().fold(init, |acc, c| f(acc, c))
    }

    /// Right fold over code units.
    pub fn foldr<B, F>(&self, init: B, f: F) -> B
    where
        F: Fn(AsciiChar, B) -> B,
    {
        self.chars().rev().fold(init, |acc, c| f(c, acc))
    }

    /// Concatenate a list of texts.
    pub fn concat(ts: &[AsciiText]) -> AsciiText {
        let total_len: usize = ts.iter().map(|t| t.len()).sum();
        let mut result = Vec::with_capacity(total_len);
        for t in ts {
            result.extend_from_slice(t.as_bytes());
        }
        Self::wrap(Bytes::from(result))
    }

    /// Map each character to a text and concatenate.
    pub fn concat_map<F>(&self, f: F) -> AsciiText
    where
        F: Fn(AsciiChar) -> AsciiText,
    {
        let results: Vec<AsciiText> = self.chars().map(f).collect();
        Self::concat(&results)
    }

    /// Check if any character satisfies a predicate.
    pub fn any<F>(&self, f: F) -> bool
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.chars().any(f)
    }

    /// Check if all characters satisfy a predicate.
    pub fn all<F>(&self, f: F) -> bool
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.chars().all(f)
    }

    /// Find the maximum character.
    pub fn maximum(&self) -> Option<AsciiChar> {
        self.chars().max()
    }

    /// Find the minimum character.
    pub fn minimum(&self) -> Option<AsciiChar> {
        self.chars().min()
    }

    // --------------------------------------------------------
    // Substrings
    // --------------------------------------------------------

    #[inline]
    fn clamp_count(&self, n: isize) -> usize {
        if n < 0 {
            0
        } else {
            (n as usize).min(self.len())
        }
    }

    /// Take the first `n` characters.
    ///
    /// Counts are clamped to `[0, len]`; negative and over-long counts
    /// never error.
    #[inline]
    pub fn take(&self, n: isize) -> AsciiText {
        Self::wrap(self.bytes.slice(..self.clamp_count(n)))
    }

    /// Take the last `n` characters.
    #[inline]
    pub fn take_end(&self, n: isize) -> AsciiText {
        Self::wrap(self.bytes.slice(self.len() - self.clamp_count(n)..))
    }

    /// Drop the first `n` characters.
    ///
    /// Counts are clamped to `[0, len]`; negative and over-long counts
    /// never error.
    #[inline]
    pub fn drop(&self, n: isize) -> AsciiText {
        Self::wrap(self.bytes.slice(self.clamp_count(n)..))
    }

    /// Drop the last `n` characters.
    #[inline]
    pub fn drop_end(&self, n: isize) -> AsciiText {
        Self::wrap(self.bytes.slice(..self.len() - self.clamp_count(n)))
    }

    /// Split at position `n`, equivalent to `(take(n), drop(n))`.
    #[inline]
    pub fn split_at(&self, n: isize) -> (AsciiText, AsciiText) {
        (self.take(n), self.drop(n))
    }

    /// Take characters while the predicate holds.
    pub fn take_while<F>(&self, f: F) -> AsciiText
    where
        F: Fn(AsciiChar) -> bool,
    {
        let n = self.chars().take_while(|&c| f(c)).count();
        Self::wrap(self.bytes.slice(..n))
    }

    /// Drop characters while the predicate holds.
    pub fn drop_while<F>(&self, f: F) -> AsciiText
    where
        F: Fn(AsciiChar) -> bool,
    {
        let n = self.chars().take_while(|&c| f(c)).count();
        Self::wrap(self.bytes.slice(n..))
    }

    /// Longest prefix satisfying the predicate, plus the rest.
    pub fn span<F>(&self, f: F) -> (AsciiText, AsciiText)
    where
        F: Fn(AsciiChar) -> bool,
    {
        let n = self.chars().take_while(|&c| f(c)).count();
        (
            Self::wrap(self.bytes.slice(..n)),
            Self::wrap(self.bytes.slice(n..)),
        )
    }

    /// Split at the first character satisfying the predicate.
    pub fn break_on<F>(&self, f: F) -> (AsciiText, AsciiText)
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.span(|c| !f(c))
    }

    // --------------------------------------------------------
    // Splitting
    // --------------------------------------------------------

    /// Split on every character satisfying the predicate.
    ///
    /// Adjacent separators produce empty components between them: a text
    /// with k separator occurrences yields exactly k + 1 components. The
    /// empty text yields no components at all.
    pub fn split<F>(&self, f: F) -> Vec<AsciiText>
    where
        F: Fn(AsciiChar) -> bool,
    {
        if self.is_empty() {
            return Vec::new();
        }
        let mut result = Vec::new();
        let mut start = 0;
        for (i, c) in self.chars().enumerate() {
            if f(c) {
                result.push(Self::wrap(self.bytes.slice(start..i)));
                start = i + 1;
            }
        }
        result.push(Self::wrap(self.bytes.slice(start..)));
        result
    }

    /// Group maximal runs of equal characters. The empty text yields an
    /// empty list.
    pub fn group(&self) -> Vec<AsciiText> {
        self.group_by(|a, b| a == b)
    }

    /// Group maximal runs of characters related to the run's first
    /// character by the supplied equivalence.
    pub fn group_by<F>(&self, eq: F) -> Vec<AsciiText>
    where
        F: Fn(AsciiChar, AsciiChar) -> bool,
    {
        let mut result = Vec::new();
        let mut start = 0;
        while start < self.len() {
            let head = self.char_at(start);
            let mut end = start + 1;
            while end < self.len() && eq(head, self.char_at(end)) {
                end += 1;
            }
            result.push(Self::wrap(self.bytes.slice(start..end)));
            start = end;
        }
        result
    }

    /// All prefixes, shortest first. The empty text yields one component.
    pub fn inits(&self) -> Vec<AsciiText> {
        (0..=self.len())
            .map(|i| Self::wrap(self.bytes.slice(..i)))
            .collect()
    }

    /// All suffixes, longest first. The empty text yields one component.
    pub fn tails(&self) -> Vec<AsciiText> {
        (0..=self.len())
            .map(|i| Self::wrap(self.bytes.slice(i..)))
            .collect()
    }

    /// Split on newlines.
    pub fn lines(&self) -> Vec<AsciiText> {
        self.split(|c| c == AsciiChar::LINE_FEED)
    }

    /// Split on runs of whitespace, dropping empty components.
    pub fn words(&self) -> Vec<AsciiText> {
        let bytes = self.as_bytes();
        let mut result = Vec::new();
        let mut start = None;
        for (i, &b) in bytes.iter().enumerate() {
            if b.is_ascii_whitespace() {
                if let Some(s) = start {
                    result.push(Self::wrap(self.bytes.slice(s..i)));
                    start = None;
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            result.push(Self::wrap(self.bytes.slice(s..)));
        }
        result
    }

    /// Join texts with newlines.
    pub fn unlines(ts: &[AsciiText]) -> AsciiText {
        Self::intercalate(&Self::singleton(AsciiChar::LINE_FEED), ts)
    }

    /// Join texts with spaces.
    pub fn unwords(ts: &[AsciiText]) -> AsciiText {
        Self::intercalate(&Self::singleton(AsciiChar::SPACE), ts)
    }

    // --------------------------------------------------------
    // Predicates
    // --------------------------------------------------------

    /// Check if `self` starts `t`.
    pub fn is_prefix_of(&self, t: &AsciiText) -> bool {
        if self.len() > t.len() {
            return false;
        }
        self.as_bytes() == &t.as_bytes()[..self.len()]
    }

    /// Check if `self` ends `t`.
    pub fn is_suffix_of(&self, t: &AsciiText) -> bool {
        if self.len() > t.len() {
            return false;
        }
        self.as_bytes() == &t.as_bytes()[t.len() - self.len()..]
    }

    /// Check if `self` occurs contiguously anywhere in `t`.
    pub fn is_infix_of(&self, t: &AsciiText) -> bool {
        if self.len() > t.len() {
            return false;
        }
        let needle = self.as_bytes();
        let haystack = t.as_bytes();
        for i in 0..=(haystack.len() - needle.len()) {
            if &haystack[i..i + needle.len()] == needle {
                return true;
            }
        }
        false
    }

    /// Strip a prefix, returning the remainder only if `prefix` starts the
    /// text.
    ///
    /// Stripping the whole text leaves an empty remainder; a non-empty
    /// prefix never matches the empty text.
    pub fn strip_prefix(&self, prefix: &AsciiText) -> Option<AsciiText> {
        if prefix.is_prefix_of(self) {
            Some(self.drop(prefix.len() as isize))
        } else {
            None
        }
    }

    /// Strip a suffix, returning the remainder only if `suffix` ends the
    /// text.
    pub fn strip_suffix(&self, suffix: &AsciiText) -> Option<AsciiText> {
        if suffix.is_suffix_of(self) {
            Some(self.drop_end(suffix.len() as isize))
        } else {
            None
        }
    }

    // --------------------------------------------------------
    // Search
    // --------------------------------------------------------

    /// Keep the characters satisfying a predicate.
    pub fn filter<F>(&self, f: F) -> AsciiText
    where
        F: Fn(AsciiChar) -> bool,
    {
        let result: Vec<u8> = self
            .chars()
            .filter(|&c| f(c))
            .map(AsciiChar::to_byte)
            .collect();
        Self::wrap(Bytes::from(result))
    }

    /// Check if a character occurs in the text.
    pub fn elem(&self, c: AsciiChar) -> bool {
        self.as_bytes().contains(&c.to_byte())
    }

    /// Check if a character does NOT occur in the text.
    pub fn not_elem(&self, c: AsciiChar) -> bool {
        !self.elem(c)
    }

    /// Find the first character satisfying a predicate, left to right.
    pub fn find<F>(&self, f: F) -> Option<AsciiChar>
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.chars().find(|&c| f(c))
    }

    /// Partition the characters by a predicate.
    pub fn partition<F>(&self, f: F) -> (AsciiText, AsciiText)
    where
        F: Fn(AsciiChar) -> bool,
    {
        let mut yes = Vec::new();
        let mut no = Vec::new();
        for c in self.chars() {
            if f(c) {
                yes.push(c.to_byte());
            } else {
                no.push(c.to_byte());
            }
        }
        (
            Self::wrap(Bytes::from(yes)),
            Self::wrap(Bytes::from(no)),
        )
    }

    // --------------------------------------------------------
    // Indexing
    // --------------------------------------------------------

    /// Get the character at an index.
    #[inline]
    pub fn index(&self, i: usize) -> Option<AsciiChar> {
        if i < self.len() {
            Some(self.char_at(i))
        } else {
            None
        }
    }

    /// Find the index of the first occurrence of a character.
    pub fn elem_index(&self, c: AsciiChar) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == c.to_byte())
    }

    /// Find all indices of a character.
    pub fn elem_indices(&self, c: AsciiChar) -> Vec<usize> {
        self.as_bytes()
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == c.to_byte())
            .map(|(i, _)| i)
            .collect()
    }

    /// Find the index of the first character satisfying a predicate, left
    /// to right.
    pub fn find_index<F>(&self, f: F) -> Option<usize>
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.chars().position(|c| f(c))
    }

    /// Find all indices of characters satisfying a predicate.
    pub fn find_indices<F>(&self, f: F) -> Vec<usize>
    where
        F: Fn(AsciiChar) -> bool,
    {
        self.chars()
            .enumerate()
            .filter(|&(_, c)| f(c))
            .map(|(i, _)| i)
            .collect()
    }

    /// Count occurrences of a character.
    pub fn count(&self, c: AsciiChar) -> usize {
        self.as_bytes().iter().filter(|&&b| b == c.to_byte()).count()
    }

    // --------------------------------------------------------
    // Zipping
    // --------------------------------------------------------

    /// Pair characters positionally, truncating to the shorter input.
    pub fn zip(a: &AsciiText, b: &AsciiText) -> Vec<(AsciiChar, AsciiChar)> {
        a.chars().zip(b.chars()).collect()
    }

    /// Combine two texts positionally with a character function,
    /// truncating to the shorter input.
    pub fn zip_with<F>(f: F, a: &AsciiText, b: &AsciiText) -> AsciiText
    where
        F: Fn(AsciiChar, AsciiChar) -> AsciiChar,
    {
        let result: Vec<u8> = a
            .chars()
            .zip(b.chars())
            .map(|(x, y)| f(x, y).to_byte())
            .collect();
        Self::wrap(Bytes::from(result))
    }
}

// ============================================================
// Iteration
// ============================================================

/// Iterator over the code units of an [`AsciiText`].
#[derive(Clone)]
pub struct Chars<'a> {
    iter: std::slice::Iter<'a, u8>,
}

impl Iterator for Chars<'_> {
    type Item = AsciiChar;

    #[inline]
    fn next(&mut self) -> Option<AsciiChar> {
        // SAFETY: the bytes come from a validated buffer.
        self.iter
            .next()
            .map(|&b| unsafe { AsciiChar::from_byte_unchecked(b) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<AsciiChar> {
        // SAFETY: the bytes come from a validated buffer.
        self.iter
            .next_back()
            .map(|&b| unsafe { AsciiChar::from_byte_unchecked(b) })
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl<'a> IntoIterator for &'a AsciiText {
    type Item = AsciiChar;
    type IntoIter = Chars<'a>;

    #[inline]
    fn into_iter(self) -> Chars<'a> {
        self.chars()
    }
}

impl FromIterator<AsciiChar> for AsciiText {
    fn from_iter<I: IntoIterator<Item = AsciiChar>>(iter: I) -> Self {
        let result: Vec<u8> = iter.into_iter().map(|c| c.to_byte()).collect();
        Self::wrap(Bytes::from(result))
    }
}

// ============================================================
// Trait Implementations
// ============================================================

impl fmt::Debug for AsciiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiText({:?})", self.as_str())
    }
}

impl fmt::Display for AsciiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsciiText {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, ValidationError> {
        Self::from_text(s)
    }
}

impl TryFrom<&str> for AsciiText {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, ValidationError> {
        Self::from_text(s)
    }
}

impl TryFrom<&[u8]> for AsciiText {
    type Error = ValidationError;

    fn try_from(bytes: &[u8]) -> Result<Self, ValidationError> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<Bytes> for AsciiText {
    type Error = ValidationError;

    fn try_from(bytes: Bytes) -> Result<Self, ValidationError> {
        Self::from_bytes(bytes)
    }
}

impl From<AsciiChar> for AsciiText {
    fn from(c: AsciiChar) -> Self {
        Self::singleton(c)
    }
}

impl From<AsciiText> for Bytes {
    fn from(t: AsciiText) -> Bytes {
        t.into_bytes()
    }
}

impl From<AsciiText> for String {
    fn from(t: AsciiText) -> String {
        t.to_text()
    }
}

impl AsRef<[u8]> for AsciiText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for AsciiText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for AsciiText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AsciiText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_text(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> AsciiText {
        AsciiText::from_text(s).unwrap()
    }

    fn c(ch: char) -> AsciiChar {
        AsciiChar::from_char(ch).unwrap()
    }

    #[test]
    fn test_empty() {
        let e = AsciiText::empty();
        assert!(e.is_empty());
        assert_eq!(e.len(), 0);
        assert_eq!(e, AsciiText::default());
    }

    #[test]
    fn test_pack_unpack() {
        let chars = vec![c('c'), c('a'), c('t')];
        let text = AsciiText::pack(&chars);
        assert_eq!(text.as_str(), "cat");
        assert_eq!(text.unpack(), chars);
    }

    #[test]
    fn test_singleton() {
        let s = AsciiText::singleton(c('x'));
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), Some(c('x')));
    }

    #[test]
    fn test_cons_snoc() {
        let base = t("ello");
        assert_eq!(AsciiText::cons(c('h'), &base).as_str(), "hello");
        assert_eq!(AsciiText::snoc(&base, c('!')).as_str(), "ello!");
    }

    #[test]
    fn test_append() {
        assert_eq!(AsciiText::append(&t("cat"), &t("boy")).as_str(), "catboy");
        assert_eq!(AsciiText::append(&t(""), &t("nyan")).as_str(), "nyan");
        assert_eq!(AsciiText::append(&t("nyan"), &t("")).as_str(), "nyan");
    }

    #[test]
    fn test_replicate() {
        assert_eq!(AsciiText::replicate(3, c('a')).as_str(), "aaa");
        assert_eq!(AsciiText::replicate(0, c('a')).as_str(), "");
        assert_eq!(AsciiText::replicate(-5, c('a')).as_str(), "");
    }

    #[test]
    fn test_uncons_unsnoc() {
        let (h, rest) = t("hello").uncons().unwrap();
        assert_eq!(h, c('h'));
        assert_eq!(rest.as_str(), "ello");

        let (init, l) = t("hello").unsnoc().unwrap();
        assert_eq!(init.as_str(), "hell");
        assert_eq!(l, c('o'));

        assert!(AsciiText::empty().uncons().is_none());
        assert!(AsciiText::empty().unsnoc().is_none());
    }

    #[test]
    fn test_head_last_tail_init() {
        let text = t("hello");
        assert_eq!(text.head(), Some(c('h')));
        assert_eq!(text.last(), Some(c('o')));
        assert_eq!(text.tail().unwrap().as_str(), "ello");
        assert_eq!(text.init().unwrap().as_str(), "hell");

        assert_eq!(AsciiText::empty().head(), None);
        assert!(AsciiText::empty().tail().is_none());
    }

    #[test]
    fn test_map() {
        let rot1 = t("abc").map(|ch| AsciiChar::from_byte(ch.to_byte() + 1).unwrap());
        assert_eq!(rot1.as_str(), "bcd");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(t("hello").reverse().as_str(), "olleh");
        assert_eq!(AsciiText::empty().reverse(), AsciiText::empty());
    }

    #[test]
    fn test_intersperse() {
        assert_eq!(AsciiText::intersperse(c(','), &t("abc")).as_str(), "a,b,c");
        assert_eq!(AsciiText::intersperse(c(','), &t("a")).as_str(), "a");
    }

    #[test]
    fn test_intercalate() {
        let parts = [t("nyan"), t(""), t("nyan")];
        assert_eq!(
            AsciiText::intercalate(&t("~"), &parts).as_str(),
            "nyan~~nyan"
        );
        assert_eq!(AsciiText::intercalate(&t("~"), &[]).as_str(), "");
    }

    #[test]
    fn test_scanl() {
        let maxed = t("abab").scanl(c('a'), |acc, ch| acc.max(ch));
        assert_eq!(maxed.as_str(), "aabbb");
        assert_eq!(AsciiText::empty().scanl(c('z'), |acc, _| acc).as_str(), "z");
    }

    #[test]
    fn test_map_accum_l() {
        let (total, out) = t("abc").map_accum_l(0usize, |n, ch| (n + 1, ch.max(c('b'))));
        assert_eq!(total, 3);
        assert_eq!(out.as_str(), "bbc");
    }

    #[test]
    fn test_folds() {
        let text = t("abc");
        let sum: u32 = text.foldl(0u32, |acc, ch| acc + u32::from(ch.to_byte()));
        assert_eq!(sum, 97 + 98 + 99);

        let backwards = text.foldr(String::new(), |ch, mut acc| {
            acc.push(ch.to_char());
            acc
        });
        assert_eq!(backwards, "cba");

        assert!(text.all(|ch| ch >= c('a')));
        assert!(text.any(|ch| ch == c('b')));
        assert!(!text.any(|ch| ch == c('z')));
        assert_eq!(text.maximum(), Some(c('c')));
        assert_eq!(text.minimum(), Some(c('a')));
        assert_eq!(AsciiText::empty().maximum(), None);
    }

    #[test]
    fn test_concat() {
        assert_eq!(
            AsciiText::concat(&[t("cat"), t(""), t("boy")]).as_str(),
            "catboy"
        );
        let doubled = t("ab").concat_map(|ch| AsciiText::pack(&[ch, ch]));
        assert_eq!(doubled.as_str(), "aabb");
    }

    #[test]
    fn test_unfoldr() {
        let abc = AsciiText::unfoldr(b'a', |b| {
            if b > b'c' {
                None
            } else {
                Some((AsciiChar::from_byte(b).unwrap(), b + 1))
            }
        });
        assert_eq!(abc.as_str(), "abc");
    }

    #[test]
    fn test_unfoldr_n() {
        let step = |b: u8| {
            if b > b'z' {
                None
            } else {
                Some((AsciiChar::from_byte(b).unwrap(), b + 1))
            }
        };

        // Stopped by the bound: the live seed comes back.
        let (text, rest) = AsciiText::unfoldr_n(3, b'a', step);
        assert_eq!(text.as_str(), "abc");
        assert_eq!(rest, Some(b'd'));

        // Stopped naturally: no seed.
        let (text, rest) = AsciiText::unfoldr_n(100, b'x', step);
        assert_eq!(text.as_str(), "xyz");
        assert_eq!(rest, None);

        let (text, rest) = AsciiText::unfoldr_n(0, b'a', step);
        assert!(text.is_empty());
        assert_eq!(rest, Some(b'a'));
    }

    #[test]
    fn test_take_drop() {
        let text = t("catboy");
        assert_eq!(text.take(3).as_str(), "cat");
        assert_eq!(text.take(-100).as_str(), "");
        assert_eq!(text.take(1000).as_str(), "catboy");

        assert_eq!(text.drop(3).as_str(), "boy");
        assert_eq!(text.drop(-100).as_str(), "catboy");
        assert_eq!(text.drop(1000).as_str(), "");

        assert_eq!(text.take_end(3).as_str(), "boy");
        assert_eq!(text.drop_end(3).as_str(), "cat");
        assert_eq!(text.take_end(-1).as_str(), "");
        assert_eq!(text.drop_end(1000).as_str(), "");
    }

    #[test]
    fn test_split_at() {
        let text = t("catboy");
        let (a, b) = text.split_at(3);
        assert_eq!(a.as_str(), "cat");
        assert_eq!(b.as_str(), "boy");

        let (a, b) = text.split_at(-2);
        assert_eq!(a.as_str(), "");
        assert_eq!(b.as_str(), "catboy");

        let (a, b) = text.split_at(99);
        assert_eq!(a.as_str(), "catboy");
        assert_eq!(b.as_str(), "");
    }

    #[test]
    fn test_take_while_span() {
        let text = t("aabcc");
        let is_a = |ch: AsciiChar| ch == c('a');
        assert_eq!(text.take_while(is_a).as_str(), "aa");
        assert_eq!(text.drop_while(is_a).as_str(), "bcc");

        let (pre, rest) = text.span(is_a);
        assert_eq!(pre.as_str(), "aa");
        assert_eq!(rest.as_str(), "bcc");

        let (pre, rest) = text.break_on(|ch| ch == c('b'));
        assert_eq!(pre.as_str(), "aa");
        assert_eq!(rest.as_str(), "bcc");
    }

    #[test]
    fn test_split() {
        let is_tilde = |ch: AsciiChar| ch == c('~');

        let parts = t("nyan~~nyan").split(is_tilde);
        let strs: Vec<&str> = parts.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["nyan", "", "nyan"]);

        // No separators: one component.
        assert_eq!(t("catboy").split(is_tilde).len(), 1);

        // Leading and trailing separators produce empty edge components.
        let parts = t("~a~").split(is_tilde);
        let strs: Vec<&str> = parts.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["", "a", ""]);
    }

    #[test]
    fn test_split_empty() {
        // The empty text yields no components, unlike inits/tails.
        let parts = AsciiText::empty().split(|ch| ch == c('~'));
        assert!(parts.is_empty());
    }

    #[test]
    fn test_group() {
        let groups = t("aabbbc").group();
        let strs: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
        assert_eq!(strs, vec!["aa", "bbb", "c"]);

        assert!(AsciiText::empty().group().is_empty());
    }

    #[test]
    fn test_group_by() {
        // Runs of characters strictly above the run head.
        let groups = t("abcba").group_by(|head, ch| ch > head);
        let strs: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
        assert_eq!(strs, vec!["abcb", "a"]);
    }

    #[test]
    fn test_inits_tails() {
        let inits = t("ab").inits();
        let strs: Vec<&str> = inits.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["", "a", "ab"]);

        let tails = t("ab").tails();
        let strs: Vec<&str> = tails.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["ab", "b", ""]);

        // The empty text keeps its base component here, unlike split.
        assert_eq!(AsciiText::empty().inits().len(), 1);
        assert_eq!(AsciiText::empty().tails().len(), 1);
    }

    #[test]
    fn test_lines_words() {
        let lines = t("hello\nworld").lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), "hello");
        assert_eq!(lines[1].as_str(), "world");

        let words = t("  cat  boy ").words();
        let strs: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        assert_eq!(strs, vec!["cat", "boy"]);

        assert_eq!(AsciiText::unlines(&[t("a"), t("b")]).as_str(), "a\nb");
        assert_eq!(AsciiText::unwords(&[t("a"), t("b")]).as_str(), "a b");
    }

    #[test]
    fn test_predicates() {
        let hello = t("hello");
        assert!(t("hel").is_prefix_of(&hello));
        assert!(t("llo").is_suffix_of(&hello));
        assert!(t("ell").is_infix_of(&hello));
        assert!(!t("llo").is_prefix_of(&hello));
        assert!(t("").is_prefix_of(&hello));
        assert!(!t("helloo").is_prefix_of(&hello));
    }

    #[test]
    fn test_strip() {
        assert_eq!(t("nyan").strip_prefix(&t("nyan")), Some(AsciiText::empty()));
        assert_eq!(t("catboy").strip_prefix(&t("nyan")), None);
        assert_eq!(t("catboy").strip_prefix(&t("cat")).unwrap().as_str(), "boy");

        assert_eq!(t("catboy").strip_suffix(&t("boy")).unwrap().as_str(), "cat");
        assert_eq!(t("nyan").strip_suffix(&t("nyan")), Some(AsciiText::empty()));

        // Empty text never contains a non-empty prefix or suffix.
        assert_eq!(AsciiText::empty().strip_prefix(&t("a")), None);
        assert_eq!(AsciiText::empty().strip_suffix(&t("a")), None);
    }

    #[test]
    fn test_filter_find() {
        let text = t("cat99boy");
        let digits = text.filter(|ch| ch.to_byte().is_ascii_digit());
        assert_eq!(digits.as_str(), "99");

        assert_eq!(text.find(|ch| ch.to_byte().is_ascii_digit()), Some(c('9')));
        assert_eq!(text.find_index(|ch| ch.to_byte().is_ascii_digit()), Some(3));
        assert_eq!(text.find(|ch| ch == c('z')), None);

        assert!(text.elem(c('b')));
        assert!(text.not_elem(c('z')));
    }

    #[test]
    fn test_partition() {
        let (digits, rest) = t("cat99boy").partition(|ch| ch.to_byte().is_ascii_digit());
        assert_eq!(digits.as_str(), "99");
        assert_eq!(rest.as_str(), "catboy");
    }

    #[test]
    fn test_index() {
        let text = t("nyan");
        assert_eq!(text.index(0), Some(c('n')));
        assert_eq!(text.index(3), Some(c('n')));
        assert_eq!(text.index(4), None);
    }

    #[test]
    fn test_elem_index() {
        let text = t("hello");
        assert_eq!(text.elem_index(c('l')), Some(2));
        assert_eq!(text.elem_indices(c('l')), vec![2, 3]);
        assert_eq!(text.elem_index(c('z')), None);
        assert_eq!(
            text.find_indices(|ch| ch > c('k')),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(t("hello").count(c('l')), 2);
        assert_eq!(t("hello").count(c('z')), 0);
    }

    #[test]
    fn test_zip() {
        let pairs = AsciiText::zip(&t("catboy"), &t("nyan"));
        assert_eq!(
            pairs,
            vec![
                (c('c'), c('n')),
                (c('a'), c('y')),
                (c('t'), c('a')),
                (c('b'), c('n')),
            ]
        );

        let maxed = AsciiText::zip_with(|x, y| x.max(y), &t("az"), &t("za"));
        assert_eq!(maxed.as_str(), "zz");
    }

    #[test]
    fn test_chars_iteration() {
        let text = t("cat");
        let collected: Vec<char> = text.chars().map(AsciiChar::to_char).collect();
        assert_eq!(collected, vec!['c', 'a', 't']);

        let back: Vec<char> = text.chars().rev().map(AsciiChar::to_char).collect();
        assert_eq!(back, vec!['t', 'a', 'c']);

        assert_eq!(text.chars().len(), 3);

        let rebuilt: AsciiText = text.chars().collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_structural_sharing() {
        // Slices alias the source allocation.
        let text = t("catboy");
        assert_eq!(
            text.drop(3).as_bytes().as_ptr(),
            text.as_bytes()[3..].as_ptr()
        );
        assert_eq!(text.take(3).as_bytes().as_ptr(), text.as_bytes().as_ptr());
    }

    #[test]
    fn test_display_debug() {
        let text = t("nyan");
        assert_eq!(format!("{text}"), "nyan");
        assert_eq!(format!("{text:?}"), "AsciiText(\"nyan\")");
    }

    #[test]
    fn test_ordering() {
        assert!(t("cat") < t("catboy"));
        assert!(t("cat") < t("dog"));
        assert_eq!(t("cat"), t("cat"));
    }

    #[test]
    fn test_conversions() {
        let text: AsciiText = "nyan".parse().unwrap();
        assert_eq!(String::from(text.clone()), "nyan");
        assert_eq!(Bytes::from(text.clone()), Bytes::from_static(b"nyan"));
        assert!("née".parse::<AsciiText>().is_err());

        let single = AsciiText::from(c('x'));
        assert_eq!(single.as_str(), "x");

        let binding = t("cat");
        let r: &str = binding.as_str();
        assert_eq!(r, "cat");
    }
}
