//! Unordered collection of unique elements with set algebra.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use itertools::Itertools;

/// An unordered collection of unique elements.
///
/// Adding an element that is already present, or removing one that is not,
/// is a no-op. All binary operations (`union`, `intersection`, ...) leave
/// both operands untouched and return a new set.
///
/// Iteration order is unspecified and may differ between two sets holding
/// the same elements.
///
/// # Example
///
/// ```
/// use aoc_collections::Set;
///
/// let a: Set<i32> = [1, 2, 3].into_iter().collect();
/// let b: Set<i32> = [2, 3, 4].into_iter().collect();
///
/// assert_eq!(a.intersection(&b), Set::from_slice(&[2, 3]));
/// assert_eq!(&a - &b, Set::from_slice(&[1]));
/// assert!(a.is_subset(&a.union(&b)));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Creates a set holding the distinct elements of `items`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_capacity(items.len());
        set.add_all(items.iter().cloned());
        set
    }

    /// Adds `item`, returning `true` if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Adds every element of `items`.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.inner.extend(items);
    }

    /// Removes `item`, returning `true` if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.inner.remove(item)
    }

    /// Removes every element of `items`.
    pub fn remove_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for item in items {
            self.inner.remove(item);
        }
    }

    /// Removes and returns an arbitrary element, or `None` if the set is empty.
    pub fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let item = self.inner.iter().next()?.clone();
        self.inner.take(&item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Calls `f` on every element in unspecified order.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.inner.iter().for_each(f);
    }

    /// Returns the elements as a vector in unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }

    /// Returns a new set with the elements of both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_capacity(self.len().max(other.len()));
        set.add_all(self.iter().cloned());
        set.add_all(other.iter().cloned());
        set
    }

    /// Returns a new set with the elements common to `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        // Probe the larger set while walking the smaller one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter(|item| large.contains(item))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.difference(other).union(&other.difference(self))
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a superset of `other` and strictly larger.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if the two sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|item| large.contains(item))
    }

    /// Returns `true` if both sets have the same cardinality and every
    /// element of `self` is in `other`.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Eq + Hash + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Self) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set[{}]", self.inner.iter().join(" "))
    }
}
