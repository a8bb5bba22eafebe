//! utilkit - everyday helpers
//!
//! - **Collections**: [`BoundedRingQueue`] (thread-safe, evicts the oldest
//!   item when full) and [`CircularCursorList`] (list with a wraparound cursor)
//! - **Formatting**: durations, relative times, error chains, type names,
//!   bordered text boxes
//! - **Parsing**: lenient primitives, durations, IPv4 subnets
//! - **Logging**: an injectable [`Logger`](logging::Logger) facade with
//!   console, writer and `tracing` backends
//!
//! # Quick Start
//!
//! ```
//! use utilkit::BoundedRingQueue;
//!
//! let recent = BoundedRingQueue::new(3).unwrap();
//! for i in 1..=4 {
//!     recent.enqueue(i);
//! }
//! assert_eq!(recent.to_vec(), vec![2, 3, 4]);
//! ```

// ─── Core ──────────────────────────────────────────────────────────
pub mod collections;
pub mod errors;

// ─── Ambient ───────────────────────────────────────────────────────
pub mod config;
pub mod logging;

// ─── Helpers ───────────────────────────────────────────────────────
pub mod error_ext;
pub mod parse;
pub mod stream_ext;
pub mod subnet;
pub mod text_box;
pub mod time_fmt;
pub mod type_info;

// ─── Front end ─────────────────────────────────────────────────────
pub mod cli;

pub use collections::{BoundedRingQueue, CircularCursorList};
pub use config::Config;
pub use errors::{QueueError, Result, UtilError};
