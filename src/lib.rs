//! # Sortext
//!
//! `sortext` is a small library with two independent parts:
//!
//! - **Sort descriptors**: comparators built from key extractors, combined left to
//!   right into one ordering over arbitrary record types.
//! - **Grapheme-aware strings**: counting, measuring and slicing text by
//!   user-perceived characters (grapheme clusters) instead of bytes or code units.
//!
//! ## Key Features
//!
//! - **Multi-key ordering**: [`combine()`] evaluates descriptors in order and the
//!   first one that tells two records apart wins. An empty combination is the
//!   identity comparator.
//! - **Optional keys**: [`lift`] turns any key comparator into one over `Option`
//!   keys where an absent key sorts first.
//! - **Cluster indexing**: [`grapheme::infix`], [`grapheme::replace`] and friends
//!   address text by cluster ordinals and never split a cluster.
//! - **Storage lengths**: exact byte lengths under UTF-8, UTF-16, UTF-32 and
//!   ASCII, plus a constant-time upper bound.
//! - **Cursor reuse**: [`cursor::ClusterCursor`] and [`cursor::ClusterMap`] avoid
//!   re-walking a string for every indexed query.
//!
//! ## Usage
//!
//! ### Sorting records
//!
//! ```rust
//! use sortext::prelude::*;
//!
//! struct Person {
//!     first: &'static str,
//!     last: &'static str,
//!     year: u16,
//! }
//!
//! let mut people = vec![
//!     Person { first: "Ava", last: "Barnes", year: 2000 },
//!     Person { first: "Robert", last: "Barnes", year: 1985 },
//!     Person { first: "Ava", last: "Barnes", year: 1998 },
//! ];
//!
//! let ordering = combine![
//!     sort_descriptor_ref_by(|p: &Person| p.last, natural_compare, Direction::Ascending),
//!     sort_descriptor_ref_by(|p: &Person| p.first, natural_compare, Direction::Ascending),
//!     sort_descriptor(|p: &Person| p.year, Direction::Ascending),
//! ];
//! sort_in_place(&mut people, ordering);
//!
//! let years: Vec<u16> = people.iter().map(|p| p.year).collect();
//! assert_eq!(years, vec![1998, 2000, 1985]);
//! ```
//!
//! ### Indexing text
//!
//! ```rust
//! use sortext::prelude::*;
//!
//! let text = "0123🇩🇪🇺🇸🇫🇷DEF";
//! assert_eq!(text.cluster_count(), 10);
//! assert_eq!(text.infix(4, Some(2)), "🇩🇪🇺🇸");
//! assert_eq!(text.replace_clusters(5, 2, "-"), "0123🇩🇪-DEF");
//! assert_eq!(text.byte_len(Encoding::Ascii), 0);
//! ```
//!
//! ## Error Policy
//!
//! Substring-style operations clamp out-of-range ordinals and lengths to the end
//! of the text. Single-cluster access fails with [`TextError::OrdinalOutOfRange`].
//! Ordinals and lengths are unsigned; signed inputs go through
//! [`grapheme::checked_ordinal`] and [`grapheme::checked_length`].

pub mod algo;
pub mod core;
pub mod cursor;
pub mod descriptor;
pub mod error;
pub mod grapheme;

pub use crate::algo::{sort_in_place, sorted, sorted_indices};
pub use crate::core::{ClusterAccess, ClusterIndex, ClusterRange, Direction, Encoding};
pub use crate::descriptor::{
    SortDescriptor, combine, lift, natural_compare, reverse, sort_descriptor, sort_descriptor_by,
    sort_descriptor_ref, sort_descriptor_ref_by,
};
pub use crate::error::{TextError, TextResult};

/// Combines sort descriptors given as separate arguments.
///
/// `combine![a, b, c]` is equivalent to `combine(vec![a, b, c])`.
#[macro_export]
macro_rules! combine {
    ($($descriptor:expr),* $(,)?) => {
        $crate::descriptor::combine(::std::vec![$($descriptor),*])
    };
}

pub mod prelude {
    pub use crate::algo::{sort_in_place, sorted, sorted_indices};
    // The crate-root `combine` names both the function and the macro.
    pub use crate::combine;
    pub use crate::core::{ClusterAccess, ClusterIndex, ClusterRange, Direction, Encoding};
    pub use crate::cursor::{ClusterCursor, ClusterMap};
    pub use crate::descriptor::{
        SortDescriptor, lift, natural_compare, reverse, sort_descriptor, sort_descriptor_by,
        sort_descriptor_ref, sort_descriptor_ref_by,
    };
    pub use crate::error::{TextError, TextResult};
    pub use crate::grapheme::GraphemeExt;
}
