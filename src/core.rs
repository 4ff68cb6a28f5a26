//! Core traits and types for sortext.
//!
//! This module defines:
//! - [`Direction`]: ascending or descending verdicts of a sort descriptor.
//! - [`Encoding`] and [`EncodingTally`]: exact and estimated storage lengths.
//! - [`ClusterIndex`] and [`ClusterRange`]: grapheme-cluster addressing.
//! - [`ClusterAccess`]: the trait every cluster walker implements. All indexed
//!   string operations are provided methods of this trait.

use crate::error::{TextError, TextResult};
use cuneiform::cuneiform;
use std::cmp::Ordering;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Ordering direction of a sort descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Applies the direction to an ascending verdict.
    ///
    /// Descending inverts the verdict, so `Equal` stays `Equal`.
    #[inline(always)]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Storage encodings understood by [`crate::grapheme::byte_len`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
    /// Seven-bit ASCII. Text with any non-ASCII scalar has length 0.
    Ascii,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Utf8,
        Encoding::Utf16,
        Encoding::Utf32,
        Encoding::Ascii,
    ];

    /// Upper bound on the bytes this encoding needs per UTF-8 byte of input.
    ///
    /// A 1-byte UTF-8 scalar takes 2 bytes in UTF-16 and 4 in UTF-32; every
    /// longer UTF-8 sequence needs no more than that per input byte.
    #[inline(always)]
    pub const fn max_bytes_per_utf8_byte(self) -> usize {
        match self {
            Encoding::Utf8 | Encoding::Ascii => 1,
            Encoding::Utf16 => 2,
            Encoding::Utf32 => 4,
        }
    }
}

/// Per-encoding counters gathered in a single pass over the scalars of a string.
// Cache-aligned, the tally is updated once per scalar.
#[cuneiform]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingTally {
    pub scalars: usize,
    pub utf8_bytes: usize,
    pub utf16_units: usize,
    pub non_ascii: usize,
}

impl EncodingTally {
    pub fn of(text: &str) -> Self {
        let mut tally = EncodingTally {
            scalars: 0,
            utf8_bytes: 0,
            utf16_units: 0,
            non_ascii: 0,
        };

        text.chars().for_each(|c| {
            tally.scalars += 1;
            tally.utf8_bytes += c.len_utf8();
            tally.utf16_units += c.len_utf16();
            if !c.is_ascii() {
                tally.non_ascii += 1;
            }
        });

        tally
    }

    /// Exact number of bytes needed to store the tallied text in `encoding`.
    pub fn byte_len(&self, encoding: Encoding) -> usize {
        match encoding {
            Encoding::Utf8 => self.utf8_bytes,
            Encoding::Utf16 => self.utf16_units * 2,
            Encoding::Utf32 => self.scalars * 4,
            Encoding::Ascii if self.non_ascii > 0 => 0,
            Encoding::Ascii => self.utf8_bytes,
        }
    }
}

/// A position on a grapheme cluster boundary.
///
/// `ordinal` counts the clusters before the boundary; `byte_offset` is the
/// matching UTF-8 offset into the string the index was derived from. Values
/// are only produced by cluster walkers, so the offset never splits a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterIndex {
    ordinal: usize,
    byte_offset: usize,
}

impl ClusterIndex {
    pub(crate) const START: ClusterIndex = ClusterIndex {
        ordinal: 0,
        byte_offset: 0,
    };

    #[inline(always)]
    pub(crate) fn new(ordinal: usize, byte_offset: usize) -> Self {
        ClusterIndex {
            ordinal,
            byte_offset,
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

/// Range of grapheme-cluster ordinals.
///
/// Every form is normalized by [`ClusterRange::ordinals`] into a start ordinal
/// and an exclusive end ordinal (`None` meaning the end of the string).
///
/// The standard range types convert into this one, so `1..4`, `1..=4`, `..4`,
/// `..=4`, `6..` and `..` can be passed wherever a `ClusterRange` is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterRange {
    /// `start..end`
    Between(usize, usize),
    /// `start..=end`
    Through(usize, usize),
    /// `..end`
    UpTo(usize),
    /// `..=end`
    UpThrough(usize),
    /// `start..`
    From(usize),
    /// `..`
    Full,
}

impl ClusterRange {
    pub fn ordinals(self) -> (usize, Option<usize>) {
        match self {
            ClusterRange::Between(start, end) => (start, Some(end)),
            ClusterRange::Through(start, end) => (start, Some(end.saturating_add(1))),
            ClusterRange::UpTo(end) => (0, Some(end)),
            ClusterRange::UpThrough(end) => (0, Some(end.saturating_add(1))),
            ClusterRange::From(start) => (start, None),
            ClusterRange::Full => (0, None),
        }
    }
}

impl From<Range<usize>> for ClusterRange {
    fn from(range: Range<usize>) -> Self {
        ClusterRange::Between(range.start, range.end)
    }
}

impl From<RangeInclusive<usize>> for ClusterRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        ClusterRange::Through(start, end)
    }
}

impl From<RangeTo<usize>> for ClusterRange {
    fn from(range: RangeTo<usize>) -> Self {
        ClusterRange::UpTo(range.end)
    }
}

impl From<RangeToInclusive<usize>> for ClusterRange {
    fn from(range: RangeToInclusive<usize>) -> Self {
        ClusterRange::UpThrough(range.end)
    }
}

impl From<RangeFrom<usize>> for ClusterRange {
    fn from(range: RangeFrom<usize>) -> Self {
        ClusterRange::From(range.start)
    }
}

impl From<RangeFull> for ClusterRange {
    fn from(_: RangeFull) -> Self {
        ClusterRange::Full
    }
}

/// A walker that resolves grapheme-cluster ordinals to boundaries of one string.
///
/// Implementors only provide [`text`](ClusterAccess::text) and
/// [`locate`](ClusterAccess::locate); every indexed operation is built on
/// those two.
///
/// Two error policies apply:
/// - The substring family (`substring`, `prefix`, `suffix`, `infix`,
///   `infix_while`, `replace`) clamps out-of-range ordinals and lengths to the
///   end of the string and never fails.
/// - Single-cluster access ([`cluster_at`](ClusterAccess::cluster_at)) fails
///   with [`TextError::OrdinalOutOfRange`].
///
/// # Examples
///
/// ```
/// use sortext::core::ClusterAccess;
/// use sortext::cursor::ClusterMap;
///
/// let mut map = ClusterMap::new("🏠🏡🏠🏡🏠");
/// assert_eq!(map.infix(1, Some(2)), "🏡🏠");
/// assert_eq!(map.replace(3, 1, "🐴"), "🏠🏡🏠🐴🏠");
/// assert!(map.cluster_at(5).is_err());
/// ```
pub trait ClusterAccess<'a> {
    /// The string being walked.
    fn text(&self) -> &'a str;

    /// Returns the boundary before cluster `ordinal`.
    ///
    /// Ordinals past the last cluster resolve to the end boundary, whose
    /// ordinal is the cluster count.
    fn locate(&mut self, ordinal: usize) -> ClusterIndex;

    /// Number of grapheme clusters in the text.
    fn cluster_count(&mut self) -> usize {
        self.locate(usize::MAX).ordinal()
    }

    /// Clusters in `range`, clamped to the end of the text.
    ///
    /// An inverted range yields the empty string.
    fn substring(&mut self, range: impl Into<ClusterRange>) -> &'a str {
        let text = self.text();
        let (lo, hi) = range.into().ordinals();

        let start = self.locate(lo).byte_offset();
        let end = match hi {
            Some(hi) => self.locate(hi).byte_offset(),
            None => text.len(),
        };

        if end < start {
            trace!(lo, ?hi, "inverted cluster range, yielding empty string");
            return "";
        }
        &text[start..end]
    }

    /// The first `n` clusters.
    fn prefix(&mut self, n: usize) -> &'a str {
        self.substring(ClusterRange::UpTo(n))
    }

    /// The last `n` clusters.
    fn suffix(&mut self, n: usize) -> &'a str {
        let count = self.cluster_count();
        self.substring(ClusterRange::From(count.saturating_sub(n)))
    }

    /// Up to `max_len` clusters starting at ordinal `from`; the rest of the
    /// text when `max_len` is `None`.
    fn infix(&mut self, from: usize, max_len: Option<usize>) -> &'a str {
        let text = self.text();
        let start = self.locate(from);
        if start.ordinal() < from {
            trace!(from, count = start.ordinal(), "infix start past end, clamped");
            return "";
        }

        let end = match max_len {
            Some(len) => self.locate(from.saturating_add(len)).byte_offset(),
            None => text.len(),
        };
        &text[start.byte_offset()..end]
    }

    /// Consecutive clusters starting at ordinal `from` for which `predicate`
    /// holds.
    fn infix_while<P>(&mut self, from: usize, mut predicate: P) -> &'a str
    where
        P: FnMut(&str) -> bool,
    {
        let text = self.text();
        let start = self.locate(from).byte_offset();
        let rest = &text[start..];

        // `start` is a cluster boundary, so segmenting `rest` on its own
        // yields the same clusters as segmenting the whole text.
        let taken = rest
            .grapheme_indices(true)
            .find(|&(_, cluster)| !predicate(cluster))
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..taken]
    }

    /// Returns a new string with up to `max_len` clusters at ordinal `from`
    /// replaced by `replacement`.
    ///
    /// When `from` is past the end nothing is removed and `replacement` is
    /// appended.
    fn replace(&mut self, from: usize, max_len: usize, replacement: &str) -> String {
        let text = self.text();
        let start = self.locate(from).byte_offset();
        let end = self.locate(from.saturating_add(max_len)).byte_offset();

        let mut spliced = String::with_capacity(text.len() - (end - start) + replacement.len());
        spliced.push_str(&text[..start]);
        spliced.push_str(replacement);
        spliced.push_str(&text[end..]);
        spliced
    }

    /// The single cluster at `ordinal`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::OrdinalOutOfRange`] when `ordinal` is not less
    /// than the cluster count.
    fn cluster_at(&mut self, ordinal: usize) -> TextResult<&'a str> {
        let text = self.text();
        let start = self.locate(ordinal);
        let end = self.locate(ordinal.saturating_add(1));

        if start.ordinal() != ordinal || end.ordinal() == start.ordinal() {
            return Err(TextError::OrdinalOutOfRange {
                ordinal,
                count: end.ordinal(),
            });
        }
        Ok(&text[start.byte_offset()..end.byte_offset()])
    }
}
