//! Collection helpers
//!
//! - [`BoundedRingQueue`]: thread-safe fixed-capacity FIFO that evicts the
//!   oldest item on overflow
//! - [`CircularCursorList`]: list with a forward/backward cursor and optional
//!   wraparound

pub mod bounded_queue;
pub mod circular_list;

pub use bounded_queue::BoundedRingQueue;
pub use circular_list::CircularCursorList;
