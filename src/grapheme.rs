//! Grapheme-cluster aware measurement and indexing of string slices.
//!
//! A grapheme cluster is a user-perceived character. It may be made of several
//! Unicode scalars, for example:
//! - `é` written as `e` followed by U+0301 COMBINING ACUTE ACCENT,
//! - a flag such as `🇩🇪`, built from two regional-indicator scalars,
//! - a family emoji such as `👨‍👩‍👧‍👦`, built from scalars joined by U+200D ZERO
//!   WIDTH JOINER,
//! - the pair `\r\n`.
//!
//! Each of these counts as one cluster, whatever its size in bytes or code
//! units. `\r\n` is the only ASCII sequence for which cluster counting and
//! byte counting disagree.
//!
//! Ordinals passed to the functions below are cluster ordinals, not byte or
//! code-unit offsets. Every call walks the string from the start; use a
//! [`ClusterCursor`] or [`ClusterMap`] for repeated queries on one string.

use crate::core::{ClusterAccess, ClusterRange, Encoding, EncodingTally};
use crate::cursor::{ClusterCursor, ClusterMap};
use crate::error::{TextError, TextResult};
use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `text`.
///
/// # Examples
///
/// ```
/// use sortext::grapheme::cluster_count;
///
/// assert_eq!(cluster_count("\u{e9}"), 1);
/// assert_eq!(cluster_count("e\u{301}"), 1);
/// assert_eq!(cluster_count("🇩🇪🇺🇸!"), 3);
/// assert_eq!(cluster_count("\r\n"), 1);
/// ```
pub fn cluster_count(text: &str) -> usize {
    // Within ASCII only CR LF forms a multi-scalar cluster.
    if text.is_ascii() {
        return text.len() - text.matches("\r\n").count();
    }
    text.graphemes(true).count()
}

/// Number of Unicode scalar values in `text`.
pub fn scalar_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of UTF-16 code units in `text`. Scalars outside the Basic
/// Multilingual Plane count twice.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Exact number of bytes needed to store `text` in `encoding`.
///
/// [`Encoding::Ascii`] yields 0 when `text` holds any scalar at or above
/// U+0080.
///
/// # Examples
///
/// ```
/// use sortext::core::Encoding;
/// use sortext::grapheme::byte_len;
///
/// assert_eq!(byte_len("🇺🇸\r\n", Encoding::Utf8), 10);
/// assert_eq!(byte_len("🇺🇸\r\n", Encoding::Utf16), 12);
/// assert_eq!(byte_len("🇺🇸\r\n", Encoding::Utf32), 16);
/// assert_eq!(byte_len("🇺🇸\r\n", Encoding::Ascii), 0);
/// assert_eq!(byte_len("\r\n", Encoding::Ascii), 2);
/// ```
pub fn byte_len(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => text.len(),
        Encoding::Ascii if text.is_ascii() => text.len(),
        Encoding::Ascii => 0,
        _ => EncodingTally::of(text).byte_len(encoding),
    }
}

/// Upper bound on [`byte_len`], computed in constant time from the UTF-8
/// length of `text`. Never smaller than the exact length.
pub fn max_byte_len(text: &str, encoding: Encoding) -> usize {
    text.len().saturating_mul(encoding.max_bytes_per_utf8_byte())
}

/// Clusters of `text` in `range`, clamped to the end of the text.
///
/// # Examples
///
/// ```
/// use sortext::grapheme::substring;
///
/// let flags = "🇩🇪🇺🇸🇫🇷🇮🇹";
/// assert_eq!(substring(flags, 1..3), "🇺🇸🇫🇷");
/// assert_eq!(substring(flags, 1..=3), "🇺🇸🇫🇷🇮🇹");
/// assert_eq!(substring(flags, ..1), "🇩🇪");
/// assert_eq!(substring(flags, 3..), "🇮🇹");
/// assert_eq!(substring(flags, 2..40), "🇫🇷🇮🇹");
/// ```
pub fn substring(text: &str, range: impl Into<ClusterRange>) -> &str {
    ClusterCursor::new(text).substring(range)
}

/// The first `n` clusters of `text`.
pub fn prefix(text: &str, n: usize) -> &str {
    ClusterCursor::new(text).prefix(n)
}

/// The last `n` clusters of `text`.
pub fn suffix(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    // Walk from the back instead of counting everything first.
    let start = text
        .grapheme_indices(true)
        .rev()
        .nth(n - 1)
        .map_or(0, |(offset, _)| offset);
    &text[start..]
}

/// Leading clusters of `text` for which `predicate` holds.
pub fn prefix_while<P>(text: &str, predicate: P) -> &str
where
    P: FnMut(&str) -> bool,
{
    ClusterCursor::new(text).infix_while(0, predicate)
}

/// Up to `max_len` clusters of `text` starting at cluster `from`.
///
/// `None` takes the rest of the text. A `from` at or past the end yields the
/// empty string, as does `max_len == Some(0)`.
///
/// # Examples
///
/// ```
/// use sortext::grapheme::infix;
///
/// let text = "Hello, playground";
/// assert_eq!(infix(text, 7, None), "playground");
/// assert_eq!(infix(text, 7, Some(4)), "play");
/// assert_eq!(infix(text, 16, Some(10)), "d");
/// assert_eq!(infix(text, 30, None), "");
/// ```
pub fn infix(text: &str, from: usize, max_len: Option<usize>) -> &str {
    ClusterCursor::new(text).infix(from, max_len)
}

/// Consecutive clusters of `text` starting at cluster `from` for which
/// `predicate` holds.
///
/// # Examples
///
/// ```
/// use sortext::grapheme::infix_while;
///
/// assert_eq!(infix_while("3742961", 1, |c| c != "6"), "7429");
/// ```
pub fn infix_while<P>(text: &str, from: usize, predicate: P) -> &str
where
    P: FnMut(&str) -> bool,
{
    ClusterCursor::new(text).infix_while(from, predicate)
}

/// Returns a copy of `text` with up to `max_len` clusters at cluster `from`
/// replaced by `replacement`. A `from` past the end appends `replacement`.
///
/// # Examples
///
/// ```
/// use sortext::grapheme::replace;
///
/// assert_eq!(replace("🏠🏡🏠🏡🏠", 3, 1, "🐴"), "🏠🏡🏠🐴🏠");
/// assert_eq!(replace("\u{e9}Aﬃ🏡🏠", 2, 2, "e"), "\u{e9}Ae🏠");
/// assert_eq!(replace("ab", 9, 3, "c"), "abc");
/// ```
pub fn replace(text: &str, from: usize, max_len: usize, replacement: &str) -> String {
    ClusterCursor::new(text).replace(from, max_len, replacement)
}

/// The single cluster of `text` at `ordinal`.
///
/// # Errors
///
/// Returns [`TextError::OrdinalOutOfRange`] when `ordinal` is not less than
/// the cluster count.
pub fn cluster_at(text: &str, ordinal: usize) -> TextResult<&str> {
    ClusterCursor::new(text).cluster_at(ordinal)
}

/// Converts a signed cluster ordinal.
///
/// # Errors
///
/// Returns [`TextError::NegativeOrdinal`] for negative values.
pub fn checked_ordinal(value: i64) -> TextResult<usize> {
    usize::try_from(value).map_err(|_| TextError::NegativeOrdinal { value })
}

/// Converts a signed cluster length.
///
/// # Errors
///
/// Returns [`TextError::NegativeLength`] for negative values.
pub fn checked_length(value: i64) -> TextResult<usize> {
    usize::try_from(value).map_err(|_| TextError::NegativeLength { value })
}

/// Grapheme-cluster operations as methods on `str`.
///
/// Method names avoid the inherent `str` methods they would otherwise shadow.
///
/// ```
/// use sortext::grapheme::GraphemeExt;
///
/// let family = "🇩🇪👨‍👩‍👧‍👦🇺🇸";
/// assert_eq!(family.cluster_count(), 3);
/// assert_eq!(family.cluster_at(1), Ok("👨‍👩‍👧‍👦"));
/// assert_eq!(family.infix(2, None), "🇺🇸");
/// ```
pub trait GraphemeExt {
    fn cluster_count(&self) -> usize;
    fn scalar_count(&self) -> usize;
    fn utf16_len(&self) -> usize;
    fn byte_len(&self, encoding: Encoding) -> usize;
    fn max_byte_len(&self, encoding: Encoding) -> usize;
    fn cluster_substring(&self, range: impl Into<ClusterRange>) -> &str;
    fn cluster_prefix(&self, n: usize) -> &str;
    fn cluster_suffix(&self, n: usize) -> &str;
    fn infix(&self, from: usize, max_len: Option<usize>) -> &str;
    fn infix_while<P: FnMut(&str) -> bool>(&self, from: usize, predicate: P) -> &str;
    fn replace_clusters(&self, from: usize, max_len: usize, replacement: &str) -> String;
    fn cluster_at(&self, ordinal: usize) -> TextResult<&str>;
    fn cluster_cursor(&self) -> ClusterCursor<'_>;
    fn cluster_map(&self) -> ClusterMap<'_>;
}

impl GraphemeExt for str {
    fn cluster_count(&self) -> usize {
        cluster_count(self)
    }

    fn scalar_count(&self) -> usize {
        scalar_count(self)
    }

    fn utf16_len(&self) -> usize {
        utf16_len(self)
    }

    fn byte_len(&self, encoding: Encoding) -> usize {
        byte_len(self, encoding)
    }

    fn max_byte_len(&self, encoding: Encoding) -> usize {
        max_byte_len(self, encoding)
    }

    fn cluster_substring(&self, range: impl Into<ClusterRange>) -> &str {
        substring(self, range)
    }

    fn cluster_prefix(&self, n: usize) -> &str {
        prefix(self, n)
    }

    fn cluster_suffix(&self, n: usize) -> &str {
        suffix(self, n)
    }

    fn infix(&self, from: usize, max_len: Option<usize>) -> &str {
        infix(self, from, max_len)
    }

    fn infix_while<P: FnMut(&str) -> bool>(&self, from: usize, predicate: P) -> &str {
        infix_while(self, from, predicate)
    }

    fn replace_clusters(&self, from: usize, max_len: usize, replacement: &str) -> String {
        replace(self, from, max_len, replacement)
    }

    fn cluster_at(&self, ordinal: usize) -> TextResult<&str> {
        cluster_at(self, ordinal)
    }

    fn cluster_cursor(&self) -> ClusterCursor<'_> {
        ClusterCursor::new(self)
    }

    fn cluster_map(&self) -> ClusterMap<'_> {
        ClusterMap::new(self)
    }
}
