//! Generic containers for Advent of Code solutions
//!
//! A small toolkit of containers that keep showing up across puzzle
//! solutions. None of them are synchronized: share them across threads only
//! behind a lock or confine them to one thread.
//!
//! # Overview
//!
//! - [`Set`]: unordered unique elements with set algebra
//! - [`Counter`]: element frequencies with most/least common queries
//! - [`Stack`] / [`Queue`]: LIFO and FIFO buffers
//! - [`PriorityQueue`]: binary min-heap keyed by an explicit priority
//! - [`Cursor`] / [`CycleCursor`] / [`StrCursor`]: stateful forward cursors
//! - [`Digits`]: lazy decimal digits of a number
//! - [`combinations::all`]: every non-empty subset of a slice
//!
//! # Quick Example
//!
//! ```
//! use aoc_collections::{Counter, Set, Stack};
//!
//! let counter: Counter<char> = "aabbbc".chars().collect();
//! assert_eq!(counter.get(&'b'), 3);
//! assert_eq!(counter.most_common(), Some(&'b'));
//!
//! let a = Set::from_slice(&[1, 2, 3]);
//! let b = Set::from_slice(&[3, 4]);
//! assert!(a.union(&b).is_equal(&b.union(&a)));
//!
//! let mut stack = Stack::new();
//! stack.push_all([1, 2, 3]);
//! assert_eq!(stack.pop(), Some(3));
//! ```
//!
//! # Absence vs. zero values
//!
//! Every operation that may find nothing (popping an empty stack, peeking an
//! empty queue, asking an empty counter for its most common element) returns
//! an [`Option`]. A container holding a zero-valued element is never
//! confused with an empty one.

pub mod combinations;
mod counter;
mod digits;
mod iter;
mod priority_queue;
mod queue;
mod set;
mod stack;

// Re-export public API
pub use counter::Counter;
pub use digits::Digits;
pub use iter::{Cursor, CycleCursor, StrCursor};
pub use priority_queue::{Item, PriorityQueue};
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
