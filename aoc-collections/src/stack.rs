//! LIFO stack.

use std::fmt;
use std::slice;

use itertools::Itertools;

/// A last-in first-out stack backed by a `Vec`.
///
/// Popping or peeking an empty stack returns `None`, so a stack holding
/// `0` is never mistaken for an empty one.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes every element of `items` in order, so the last one ends up on
    /// top.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of `items` becomes the top of the stack.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack[{}]", self.items.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::new();
        stack.push_all([1, 2, 3]);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_zero_value_is_not_absence() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), None);
        stack.push(0);
        assert_eq!(stack.peek(), Some(&0));
        assert_eq!(stack.pop(), Some(0));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack: Stack<char> = "ab".chars().collect();
        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.len(), 2);

        if let Some(top) = stack.peek_mut() {
            *top = 'z';
        }
        assert_eq!(stack.pop(), Some('z'));
    }

    #[test]
    fn test_display() {
        let stack = Stack::from(vec![1, 2, 3]);
        assert_eq!(stack.to_string(), "Stack[1 2 3]");
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let mut stack = Stack::new();
        stack.push_all(['x', 'y', 'z']);
        assert_eq!(stack.iter().collect::<String>(), "xyz");
        assert_eq!(stack.len(), 3);
    }
}
