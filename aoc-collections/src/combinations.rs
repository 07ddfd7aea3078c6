//! Subset enumeration.

use itertools::Itertools;

/// Returns every non-empty subset of `items`.
///
/// This is the power set minus the empty set: `2^n - 1` subsets for `n`
/// items. Subsets come out grouped by size (all singletons first, then all
/// pairs, ...) and each subset keeps the relative order of `items`.
///
/// # Example
///
/// ```
/// use aoc_collections::combinations;
///
/// let subsets = combinations::all(&[1, 2, 3]);
/// assert_eq!(subsets.len(), 7);
/// assert_eq!(subsets[0], vec![1]);
/// assert_eq!(subsets[6], vec![1, 2, 3]);
/// ```
pub fn all<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items
        .iter()
        .cloned()
        .powerset()
        .filter(|subset| !subset.is_empty())
        .collect()
}
