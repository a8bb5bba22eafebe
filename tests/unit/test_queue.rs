//! Unit tests for BoundedRingQueue
//!
//! Tests cover:
//! - Oldest-first eviction
//! - Empty dequeue errors
//! - Snapshots and sequence comparison
//! - Sharing across threads

use std::sync::Arc;
use std::thread;

use utilkit::{BoundedRingQueue, QueueError, UtilError};

// ============================================================================
// Eviction
// ============================================================================

mod eviction_tests {
    use super::*;

    #[test]
    fn test_capacity_three_scenario() {
        let q = BoundedRingQueue::new(3).unwrap();
        for i in 1..=4 {
            q.enqueue(i);
        }
        assert_eq!(q.to_vec(), vec![2, 3, 4]);
        assert_eq!(q.dequeue().unwrap(), 2);
        assert_eq!(q.to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_owned_strings_are_moved_out() {
        let q = BoundedRingQueue::new(2).unwrap();
        q.enqueue("first".to_string());
        q.enqueue("second".to_string());
        q.enqueue("third".to_string());
        assert_eq!(q.dequeue().unwrap(), "second");
        assert_eq!(q.dequeue().unwrap(), "third");
    }

    #[test]
    fn test_refill_after_drain() {
        let q = BoundedRingQueue::new(2).unwrap();
        q.extend([1, 2, 3]);
        assert_eq!(q.drain(), vec![2, 3]);
        q.enqueue(9);
        assert_eq!(q.to_vec(), vec![9]);
    }
}

// ============================================================================
// Errors
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_empty_dequeue_propagates_with_question_mark() {
        fn take(q: &BoundedRingQueue<u8>) -> utilkit::Result<u8> {
            Ok(q.dequeue()?)
        }
        let q = BoundedRingQueue::new(1).unwrap();
        let err = take(&q).unwrap_err();
        assert!(matches!(err, UtilError::Queue(QueueError::Empty)));
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            BoundedRingQueue::<()>::new(0),
            Err(QueueError::InvalidCapacity)
        ));
    }
}

// ============================================================================
// Threads
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_single_producer_order_preserved() {
        let q = Arc::new(BoundedRingQueue::new(100).unwrap());
        let producer = {
            let q = Arc::clone(&q);
            thread::spawn(move || {
                for i in 0..100 {
                    q.enqueue(i);
                }
            })
        };
        producer.join().unwrap();
        assert!(q.sequence_equal(&(0..100).collect::<Vec<_>>()));
    }

    #[test]
    fn test_consumers_see_each_item_once() {
        let q = Arc::new(BoundedRingQueue::new(1_000).unwrap());
        q.extend(0..1_000);

        let consumers: Vec<_> = (0..4)
            .map(|_| {
                let q = Arc::clone(&q);
                thread::spawn(move || {
                    let mut taken = Vec::new();
                    while let Ok(v) = q.dequeue() {
                        taken.push(v);
                    }
                    taken
                })
            })
            .collect();

        let mut all: Vec<i32> = consumers
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..1_000).collect::<Vec<_>>());
        assert!(q.is_empty());
    }

    #[test]
    fn test_snapshot_under_contention_is_consistent() {
        let q = Arc::new(BoundedRingQueue::new(8).unwrap());
        let writer = {
            let q = Arc::clone(&q);
            thread::spawn(move || {
                for i in 0..10_000u32 {
                    q.enqueue(i);
                }
            })
        };
        for _ in 0..200 {
            let snap = q.to_vec();
            assert!(snap.len() <= 8);
            // Items stay in insertion order inside every snapshot.
            assert!(snap.windows(2).all(|w| w[0] < w[1]));
        }
        writer.join().unwrap();
        assert_eq!(q.to_vec(), (9_992..10_000).collect::<Vec<_>>());
    }
}
