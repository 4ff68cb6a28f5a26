//! Composable multi-key sort descriptors.
//!
//! A sort descriptor is a comparator over whole records, built from a key
//! extractor and an ordering direction. Descriptors are combined left to
//! right: the first one that tells two records apart decides their order.
//!
//! ```
//! use sortext::core::Direction;
//! use sortext::descriptor::{combine, sort_descriptor, sort_descriptor_ref};
//!
//! struct Person {
//!     last: String,
//!     year: u16,
//! }
//!
//! let mut people = vec![
//!     Person { last: "Young".into(), year: 2002 },
//!     Person { last: "Barnes".into(), year: 2000 },
//!     Person { last: "Barnes".into(), year: 1985 },
//! ];
//!
//! let by_last_then_year = combine(vec![
//!     sort_descriptor_ref(|p: &Person| p.last.as_str(), Direction::Ascending),
//!     sort_descriptor(|p: &Person| p.year, Direction::Descending),
//! ]);
//! people.sort_by(&by_last_then_year);
//!
//! let years: Vec<u16> = people.iter().map(|p| p.year).collect();
//! assert_eq!(years, vec![2000, 1985, 2002]);
//! ```

use crate::core::Direction;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// A boxed comparator over records of type `T`.
pub type SortDescriptor<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;

/// Builds a descriptor that orders records by the natural ordering of an
/// owned key.
pub fn sort_descriptor<'a, T, K, F>(key: F, direction: Direction) -> SortDescriptor<'a, T>
where
    T: 'a,
    K: Ord + 'a,
    F: Fn(&T) -> K + Send + Sync + 'a,
{
    Box::new(move |a: &T, b: &T| direction.apply(key(a).cmp(&key(b))))
}

/// Builds a descriptor that orders records by an owned key using `compare`.
///
/// Use this when the key has no natural total order, or a different one is
/// wanted. Wrap `compare` in [`lift`] when the key is optional.
pub fn sort_descriptor_by<'a, T, K, F, C>(
    key: F,
    compare: C,
    direction: Direction,
) -> SortDescriptor<'a, T>
where
    T: 'a,
    K: 'a,
    F: Fn(&T) -> K + Send + Sync + 'a,
    C: Fn(&K, &K) -> Ordering + Send + Sync + 'a,
{
    Box::new(move |a: &T, b: &T| direction.apply(compare(&key(a), &key(b))))
}

/// Like [`sort_descriptor`], for keys borrowed from the record.
pub fn sort_descriptor_ref<'a, T, K, F>(key: F, direction: Direction) -> SortDescriptor<'a, T>
where
    T: 'a,
    K: Ord + ?Sized + 'a,
    F: Fn(&T) -> &K + Send + Sync + 'a,
{
    Box::new(move |a: &T, b: &T| direction.apply(key(a).cmp(key(b))))
}

/// Like [`sort_descriptor_by`], for keys borrowed from the record.
pub fn sort_descriptor_ref_by<'a, T, K, F, C>(
    key: F,
    compare: C,
    direction: Direction,
) -> SortDescriptor<'a, T>
where
    T: 'a,
    K: ?Sized + 'a,
    F: Fn(&T) -> &K + Send + Sync + 'a,
    C: Fn(&K, &K) -> Ordering + Send + Sync + 'a,
{
    Box::new(move |a: &T, b: &T| direction.apply(compare(key(a), key(b))))
}

/// Lifts a comparator over `K` to one over `Option<K>`.
///
/// An absent key sorts before any present key; two absent keys are equal.
///
/// ```
/// use sortext::descriptor::lift;
/// use std::cmp::Ordering;
///
/// let compare = lift(|a: &u8, b: &u8| a.cmp(b));
/// assert_eq!(compare(&None, &Some(0)), Ordering::Less);
/// assert_eq!(compare(&Some(0), &None), Ordering::Greater);
/// assert_eq!(compare(&None, &None), Ordering::Equal);
/// assert_eq!(compare(&Some(2), &Some(1)), Ordering::Greater);
/// ```
pub fn lift<K, C>(compare: C) -> impl Fn(&Option<K>, &Option<K>) -> Ordering + Send + Sync
where
    C: Fn(&K, &K) -> Ordering + Send + Sync,
{
    move |a: &Option<K>, b: &Option<K>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

/// Combines descriptors into one.
///
/// The descriptors are evaluated in order and the first verdict other than
/// `Equal` is returned. An empty sequence yields a descriptor that reports
/// every pair as `Equal`. See also the [`combine!`](crate::combine!) macro.
pub fn combine<'a, T, I>(descriptors: I) -> SortDescriptor<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = SortDescriptor<'a, T>>,
{
    let descriptors: Vec<SortDescriptor<'a, T>> = descriptors.into_iter().collect();
    Box::new(move |a: &T, b: &T| {
        descriptors
            .iter()
            .map(|descriptor| descriptor(a, b))
            .find(|&ordering| ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}

/// Inverts every verdict of `descriptor`.
pub fn reverse<'a, T: 'a>(descriptor: SortDescriptor<'a, T>) -> SortDescriptor<'a, T> {
    Box::new(move |a: &T, b: &T| descriptor(a, b).reverse())
}

/// Locale-independent "natural" ordering of text.
///
/// Letters compare case-insensitively and runs of ASCII digits compare by
/// numeric value, so `"file9"` sorts before `"file10"`. Strings that are
/// equal under those rules fall back to plain ordering, keeping the result a
/// total order.
///
/// ```
/// use sortext::descriptor::natural_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_compare("file9", "file10"), Ordering::Less);
/// assert_eq!(natural_compare("Apple", "banana"), Ordering::Less);
/// assert_eq!(natural_compare("a", "A"), Ordering::Greater);
/// ```
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                compare_digit_runs(&mut left, &mut right)
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                l.to_lowercase().cmp(r.to_lowercase())
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn compare_digit_runs(
    left: &mut Peekable<Chars<'_>>,
    right: &mut Peekable<Chars<'_>>,
) -> Ordering {
    let l = take_digits(left);
    let r = take_digits(right);

    // Leading zeros carry no value.
    let l = l.trim_start_matches('0');
    let r = r.trim_start_matches('0');

    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}
