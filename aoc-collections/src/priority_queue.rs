//! Min-priority queue over a binary heap
//!
//! Values are popped in ascending priority order. Values sharing a priority
//! come out in an unspecified order; callers that need a stable tie-break
//! should fold it into the priority (e.g. `(cost, sequence)`).

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A value paired with its priority.
#[derive(Debug, Clone, Copy)]
pub struct Item<T, P> {
    /// The value of the item; arbitrary.
    pub value: T,
    /// The priority of the item in the queue. Lower pops first.
    pub priority: P,
}

impl<T, P> Item<T, P> {
    pub fn new(value: T, priority: P) -> Self {
        Self { value, priority }
    }
}

/// Wrapper for min-heap ordering of Item
struct MinPriority<T, P>(Item<T, P>);

impl<T, P: Ord> Ord for MinPriority<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (smallest first)
        other.0.priority.cmp(&self.0.priority)
    }
}

impl<T, P: Ord> PartialOrd for MinPriority<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Eq for MinPriority<T, P> {}

impl<T, P: Ord> PartialEq for MinPriority<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority == other.0.priority
    }
}

/// A priority queue popping the lowest priority first.
///
/// # Example
///
/// ```
/// use aoc_collections::PriorityQueue;
///
/// let mut pq = PriorityQueue::new();
/// pq.push("far", 10);
/// pq.push("near", 1);
/// pq.push("middle", 5);
///
/// assert_eq!(pq.pop().map(|item| item.value), Some("near"));
/// assert_eq!(pq.peek().map(|item| item.priority), Some(&5));
/// ```
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<MinPriority<T, P>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes `value` with the given `priority`. O(log n).
    pub fn push(&mut self, value: T, priority: P) {
        self.heap.push(MinPriority(Item { value, priority }));
    }

    /// Removes and returns the item with the lowest priority. O(log n).
    pub fn pop(&mut self) -> Option<Item<T, P>> {
        self.heap.pop().map(|MinPriority(item)| item)
    }

    /// Returns the item with the lowest priority without removing it.
    pub fn peek(&self) -> Option<Item<&T, &P>> {
        self.heap.peek().map(|MinPriority(item)| Item {
            value: &item.value,
            priority: &item.priority,
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            heap: iter
                .into_iter()
                .map(|(value, priority)| MinPriority(Item { value, priority }))
                .collect(),
        }
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

impl<T, P: Ord + fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("min_priority", &self.heap.peek().map(|entry| &entry.0.priority))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut pq = PriorityQueue::new();
        for (value, priority) in [('c', 3), ('a', 1), ('e', 5), ('b', 2), ('d', 4)] {
            pq.push(value, priority);
        }

        let order: Vec<char> = std::iter::from_fn(|| pq.pop().map(|item| item.value)).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd', 'e']);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_empty_pop_and_peek() {
        let mut pq: PriorityQueue<(), u8> = PriorityQueue::default();
        assert!(pq.peek().is_none());
        assert!(pq.pop().is_none());
    }

    #[test]
    fn test_peek_keeps_item() {
        let pq: PriorityQueue<&str, i64> = [("x", -3), ("y", 7)].into_iter().collect();
        let top = pq.peek().unwrap();
        assert_eq!(*top.value, "x");
        assert_eq!(*top.priority, -3);
        assert_eq!(pq.len(), 2);
    }

    #[test]
    fn test_equal_priorities_all_returned() {
        let mut pq = PriorityQueue::new();
        pq.extend([(1, 0), (2, 0), (3, 0)]);

        let mut values: Vec<i32> = std::iter::from_fn(|| pq.pop().map(|item| item.value)).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_dijkstra_style_usage() {
        // shortest path on a tiny weighted graph: 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (2)
        let edges = [vec![(1, 4), (2, 1)], vec![], vec![(1, 2)]];
        let mut dist = [u32::MAX; 3];
        let mut pq = PriorityQueue::new();
        dist[0] = 0;
        pq.push(0usize, 0u32);

        while let Some(Item { value: node, priority: d }) = pq.pop() {
            if d > dist[node] {
                continue;
            }
            for &(next, w) in &edges[node] {
                if d + w < dist[next] {
                    dist[next] = d + w;
                    pq.push(next, d + w);
                }
            }
        }

        assert_eq!(dist, [0, 3, 1]);
    }
}
