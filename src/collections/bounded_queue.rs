//! Bounded Ring Queue
//!
//! A fixed-capacity FIFO that never refuses a write: once the queue is full,
//! each new item pushes the oldest one out. Useful for "last N events"
//! windows such as recent log lines or sample histories.
//!
//! All operations take the same lock for their whole duration, so an
//! overflow eviction and the insert that caused it are observed as a single
//! step by every other caller.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;
use tracing::trace;

use crate::errors::QueueError;

/// Thread-safe FIFO with a hard capacity and oldest-first eviction.
///
/// Share it between threads with `Arc<BoundedRingQueue<T>>`; every method
/// takes `&self`.
pub struct BoundedRingQueue<T> {
    capacity: usize,
    items: Mutex<VecDeque<T>>,
}

impl<T> BoundedRingQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    ///
    /// A capacity of zero is rejected with [`QueueError::InvalidCapacity`].
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        })
    }

    /// Append `item` at the tail, silently discarding the oldest item if the
    /// queue is already full.
    pub fn enqueue(&self, item: T) {
        let _ = self.enqueue_evicting(item);
    }

    /// Like [`enqueue`](Self::enqueue) but hands back the evicted item, if any.
    pub fn enqueue_evicting(&self, item: T) -> Option<T> {
        let mut items = self.items.lock();
        let evicted = if items.len() >= self.capacity {
            items.pop_front()
        } else {
            None
        };
        items.push_back(item);
        if evicted.is_some() {
            trace!(capacity = self.capacity, "bounded queue full, evicted oldest item");
        }
        evicted
    }

    /// Enqueue every item of `iter` in order, evicting as needed.
    pub fn extend<I: IntoIterator<Item = T>>(&self, iter: I) {
        let mut items = self.items.lock();
        for item in iter {
            if items.len() >= self.capacity {
                items.pop_front();
            }
            items.push_back(item);
        }
    }

    /// Remove and return the oldest item.
    pub fn dequeue(&self) -> Result<T, QueueError> {
        self.items.lock().pop_front().ok_or(QueueError::Empty)
    }

    /// Remove and return the oldest item, or `None` when empty.
    pub fn try_dequeue(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Remove every item.
    pub fn clear(&self) {
        self.items.lock().clear();
    }

    /// Remove every item and return them oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.items.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.lock().len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compare the current contents, oldest first, with `other` element by
    /// element. Sequences of different length are never equal.
    pub fn sequence_equal<'a, I>(&self, other: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let items = self.items.lock();
        let mut other = other.into_iter();
        for item in items.iter() {
            match other.next() {
                Some(o) if o == item => {}
                _ => return false,
            }
        }
        other.next().is_none()
    }
}

impl<T: Clone> BoundedRingQueue<T> {
    /// Snapshot of the contents, oldest first. The queue is not modified.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.lock().iter().cloned().collect()
    }

    /// Clone of the oldest item without removing it.
    pub fn peek(&self) -> Option<T> {
        self.items.lock().front().cloned()
    }
}

impl<T: Clone> Clone for BoundedRingQueue<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            items: Mutex::new(self.items.lock().clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for BoundedRingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Lock in address order so two threads comparing a == b and b == a
        // cannot deadlock.
        let (first, second) = if (self as *const Self) < (other as *const Self) {
            (self, other)
        } else {
            (other, self)
        };
        let a = first.items.lock();
        let b = second.items.lock();
        *a == *b
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedRingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.lock();
        f.debug_struct("BoundedRingQueue")
            .field("capacity", &self.capacity)
            .field("items", &*items)
            .finish()
    }
}
