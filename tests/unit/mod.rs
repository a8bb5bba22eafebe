//! Unit tests for utilkit modules
//!
//! These tests exercise the public API the way downstream crates use it.

mod test_config;
mod test_cursor;
mod test_helpers;
mod test_logging;
mod test_queue;
