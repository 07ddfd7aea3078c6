//! Frequency counting over hashable elements.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use itertools::Itertools;

/// A multiset mapping each element to the number of times it was seen.
///
/// Counts never go negative: decrementing saturates at zero and a key whose
/// count reaches zero is removed, so [`Counter::len`] only counts elements
/// that are actually present.
///
/// # Ties
///
/// [`Counter::most_common`] and [`Counter::least_common`] break ties in hash
/// map iteration order. Which of several equally common elements is returned
/// is not specified and may change between runs.
///
/// # Example
///
/// ```
/// use aoc_collections::Counter;
///
/// let mut counter: Counter<char> = "aabbbc".chars().collect();
/// assert_eq!(counter.get(&'a'), 2);
/// assert_eq!(counter.total(), 6);
/// assert_eq!(counter.most_common(), Some(&'b'));
///
/// counter.decrement(&'c');
/// assert_eq!(counter.get(&'c'), 0);
/// assert_eq!(counter.len(), 2);
/// ```
#[derive(Clone)]
pub struct Counter<T> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash> Counter<T> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Creates a counter from existing counts. Zero counts are dropped.
    pub fn from_map(counts: HashMap<T, usize>) -> Self {
        let mut counts = counts;
        counts.retain(|_, count| *count > 0);
        Self { counts }
    }

    /// Counts one more occurrence of `item`.
    pub fn add(&mut self, item: T) {
        self.increment_by(item, 1);
    }

    /// Alias of [`Counter::add`].
    pub fn increment(&mut self, item: T) {
        self.increment_by(item, 1);
    }

    /// Counts `count` more occurrences of `item`.
    pub fn increment_by(&mut self, item: T, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(item).or_insert(0) += count;
    }

    /// Counts one less occurrence of `item`, removing it at zero.
    pub fn decrement(&mut self, item: &T) {
        self.decrement_by(item, 1);
    }

    /// Counts `count` fewer occurrences of `item`. The count saturates at
    /// zero and the key is removed once it gets there.
    pub fn decrement_by(&mut self, item: &T, count: usize) {
        if let Some(current) = self.counts.get_mut(item) {
            if *current <= count {
                self.counts.remove(item);
            } else {
                *current -= count;
            }
        }
    }

    /// Forgets `item` entirely, returning its previous count.
    pub fn delete(&mut self, item: &T) -> usize {
        self.counts.remove(item).unwrap_or(0)
    }

    /// Returns the count of `item`, 0 if it was never seen.
    pub fn get(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Adds the counts of `other` into `self`. `other` is left untouched.
    pub fn update(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (item, &count) in &other.counts {
            self.increment_by(item.clone(), count);
        }
    }

    /// Returns the element with the highest count, `None` if empty.
    pub fn most_common(&self) -> Option<&T> {
        self.counts
            .iter()
            .max_by_key(|&(_, count)| *count)
            .map(|(item, _)| item)
    }

    /// Returns the element with the lowest count, `None` if empty.
    pub fn least_common(&self) -> Option<&T> {
        self.counts
            .iter()
            .min_by_key(|&(_, count)| *count)
            .map(|(item, _)| item)
    }

    /// Returns up to `n` elements with their counts, highest first.
    pub fn most_common_n(&self, n: usize) -> Vec<(&T, usize)> {
        self.counts
            .iter()
            .map(|(item, &count)| (item, count))
            .sorted_unstable_by(|a, b| b.1.cmp(&a.1))
            .take(n)
            .collect()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(element, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Calls `f` with every element and its count.
    pub fn for_each<F: FnMut(&T, usize)>(&self, mut f: F) {
        for (item, &count) in &self.counts {
            f(item, count);
        }
    }
}

impl<T: Eq + Hash> PartialEq for Counter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for Counter<T> {}

impl<T: Eq + Hash> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

impl<T: Eq + Hash> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for Counter<T> {
    type Item = (T, usize);
    type IntoIter = hash_map::IntoIter<T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Counter{{{}}}",
            self.counts
                .iter()
                .format_with(" ", |(item, count), g| g(&format_args!("{item}:{count}")))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let a: Counter<char> = "abca".chars().collect();
        let b: Counter<char> = "caab".chars().collect();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.add('d');
        assert_ne!(a, c);
        c.decrement(&'d');
        assert_eq!(a, c);
        assert_eq!(Counter::<u8>::new(), Counter::default());
    }

    #[test]
    fn test_letters_scenario() {
        let counter: Counter<char> = "aabbbc".chars().collect();
        assert_eq!(counter.get(&'a'), 2);
        assert_eq!(counter.get(&'b'), 3);
        assert_eq!(counter.get(&'c'), 1);
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.most_common(), Some(&'b'));
        assert_eq!(counter.least_common(), Some(&'c'));
    }

    #[test]
    fn test_get_missing_is_zero() {
        let counter: Counter<&str> = Counter::new();
        assert_eq!(counter.get(&"nope"), 0);
        assert_eq!(counter.most_common(), None);
        assert_eq!(counter.least_common(), None);
    }

    #[test]
    fn test_increment_by() {
        let mut counter = Counter::new();
        counter.increment_by("x", 5);
        counter.increment("x");
        assert_eq!(counter.get(&"x"), 6);

        counter.increment_by("y", 0);
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut counter: Counter<i32> = [1, 1, 2].into_iter().collect();
        counter.decrement(&1);
        assert_eq!(counter.get(&1), 1);
        counter.decrement(&1);
        assert_eq!(counter.get(&1), 0);
        assert_eq!(counter.len(), 1);

        // never below zero
        counter.decrement(&42);
        assert_eq!(counter.get(&42), 0);
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_decrement_by_saturates() {
        let mut counter = Counter::new();
        counter.increment_by('q', 3);
        counter.decrement_by(&'q', 10);
        assert_eq!(counter.get(&'q'), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut counter: Counter<char> = "zzz".chars().collect();
        assert_eq!(counter.delete(&'z'), 3);
        assert_eq!(counter.delete(&'z'), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_update_leaves_argument() {
        let mut a: Counter<char> = "ab".chars().collect();
        let b: Counter<char> = "bcc".chars().collect();
        a.update(&b);

        assert_eq!(a.get(&'a'), 1);
        assert_eq!(a.get(&'b'), 2);
        assert_eq!(a.get(&'c'), 2);
        assert_eq!(b.total(), 3);
        assert_eq!(b.get(&'b'), 1);
    }

    #[test]
    fn test_most_common_n() {
        let counter: Counter<char> = "abbcccdddd".chars().collect();
        assert_eq!(counter.most_common_n(2), vec![(&'d', 4), (&'c', 3)]);
        assert_eq!(counter.most_common_n(10).len(), 4);
    }

    #[test]
    fn test_from_map_drops_zero() {
        let counter = Counter::from_map(HashMap::from([("a", 2), ("b", 0)]));
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn test_for_each_sums_to_total() {
        let counter: Counter<u8> = [1, 2, 2, 3, 3, 3].into_iter().collect();
        let mut sum = 0;
        counter.for_each(|_, count| sum += count);
        assert_eq!(sum, counter.total());
    }

    #[test]
    fn test_display() {
        let counter: Counter<char> = "aa".chars().collect();
        assert_eq!(counter.to_string(), "Counter{a:2}");
    }
}
