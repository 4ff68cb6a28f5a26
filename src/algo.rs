//! Sorting entry points driven by a comparator.
//!
//! All entry points are stable: records the comparator reports as `Equal`
//! keep their input order.
//!
//! - [`sorted_indices`] computes the sorted permutation without touching the
//!   input.
//! - [`sort_in_place`] applies that permutation with swaps only, so records
//!   need not be `Clone`.
//! - [`sorted`] returns a sorted copy.

use std::cmp::Ordering;
use tracing::debug;

/// Returns the indices that would order `items` under `compare`.
///
/// # Examples
///
/// ```
/// use sortext::algo::sorted_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = sorted_indices(&data, |a: &&str, b: &&str| a.cmp(b));
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn sorted_indices<T, C>(items: &[T], compare: C) -> Vec<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| compare(&items[a], &items[b]));

    debug!(len = items.len(), "computed sorted permutation");
    indices
}

/// Sorts `items` in place under `compare`.
///
/// # Examples
///
/// ```
/// use sortext::algo::sort_in_place;
/// use sortext::core::Direction;
/// use sortext::descriptor::sort_descriptor;
///
/// let mut data = vec![3, 1, 2];
/// sort_in_place(&mut data, sort_descriptor(|n: &i32| *n, Direction::Descending));
///
/// assert_eq!(data, vec![3, 2, 1]);
/// ```
pub fn sort_in_place<T, C>(items: &mut [T], compare: C)
where
    C: Fn(&T, &T) -> Ordering,
{
    let indices = sorted_indices(items, compare);
    apply_permutation(items, indices);
}

/// Returns a sorted copy of `items`.
pub fn sorted<T, C>(items: &[T], compare: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    sorted_indices(items, compare)
        .into_iter()
        .map(|index| items[index].clone())
        .collect()
}

/// Moves `data[indices[i]]` to position `i` by following permutation cycles.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}
