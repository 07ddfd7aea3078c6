//! Property-based tests for stacks, queues, priority queues, counters and cursors

use aoc_collections::{Counter, Cursor, CycleCursor, Digits, PriorityQueue, Queue, Stack};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Stack pops in reverse push order**
    #[test]
    fn prop_stack_reverses(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut stack = Stack::new();
        stack.push_all(items.iter().copied());

        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert!(stack.peek().is_none());
    }

    /// **Property 2: Queue dequeues in enqueue order**
    #[test]
    fn prop_queue_preserves_order(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut queue = Queue::new();
        queue.enqueue_all(items.iter().copied());

        let dequeued: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        prop_assert_eq!(dequeued, items);
        prop_assert!(queue.peek().is_none());
    }

    /// **Property 3: Priority queue yields priorities in non-decreasing order**
    #[test]
    fn prop_priority_queue_sorted(priorities in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut pq = PriorityQueue::new();
        for (value, &priority) in priorities.iter().enumerate() {
            pq.push(value, priority);
        }

        let popped: Vec<i16> = std::iter::from_fn(|| pq.pop().map(|item| item.priority)).collect();
        let mut expected = priorities.clone();
        expected.sort();
        prop_assert_eq!(popped, expected);
    }

    /// **Property 4: Counter totals match the number of additions**
    #[test]
    fn prop_counter_total(items in prop::collection::vec(0u8..10, 0..100)) {
        let counter: Counter<u8> = items.iter().copied().collect();

        prop_assert_eq!(counter.total(), items.len());
        let summed: usize = counter.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(summed, counter.total());
        for key in 0u8..10 {
            let expected = items.iter().filter(|&&item| item == key).count();
            prop_assert_eq!(counter.get(&key), expected);
        }
    }

    /// **Property 5: Most common has the maximal count**
    #[test]
    fn prop_counter_most_common(items in prop::collection::vec(0u8..5, 1..60)) {
        let counter: Counter<u8> = items.iter().copied().collect();
        let top = *counter.most_common().unwrap();
        let bottom = *counter.least_common().unwrap();
        prop_assert!(counter.iter().all(|(_, count)| count <= counter.get(&top)));
        prop_assert!(counter.iter().all(|(_, count)| count >= counter.get(&bottom)));
    }

    /// **Property 6: A cursor over n elements advances exactly n times, and replays after reset**
    #[test]
    fn prop_cursor_exhaustion(items in prop::collection::vec(any::<u16>(), 0..30)) {
        let mut cursor = Cursor::new(&items);
        let mut first = Vec::new();
        while cursor.advance() {
            first.push(*cursor.value().unwrap());
        }
        prop_assert_eq!(&first, &items);
        prop_assert!(!cursor.advance());

        cursor.reset();
        let second: Vec<u16> = cursor.copied().collect();
        prop_assert_eq!(second, items);
    }

    /// **Property 7: A cycle cursor visits index k mod n at step k**
    #[test]
    fn prop_cycle_cursor_wraps(items in prop::collection::vec(any::<u8>(), 1..10), steps in 0usize..100) {
        let mut cursor = CycleCursor::new(&items);
        for step in 0..steps {
            prop_assert!(cursor.advance());
            prop_assert_eq!(cursor.value(), Some(&items[step % items.len()]));
        }
    }

    /// **Property 8: Digits agree with the decimal string**
    #[test]
    fn prop_digits_match_to_string(n in any::<u64>()) {
        let expected: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();
        prop_assert_eq!(Digits::new(n).len(), expected.len());
        prop_assert_eq!(Digits::new(n).collect::<Vec<_>>(), expected);
    }
}
