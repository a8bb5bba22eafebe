//! Unit tests for the logging facade
//!
//! Components receive a `SharedLogger`; these tests check that any backend
//! can be injected and that a custom one is easy to write.

use std::sync::Arc;

use parking_lot::Mutex;
use utilkit::logging::{LogLevel, Logger, NullLogger, SharedLogger, WriterLogger};

/// Records messages in memory.
#[derive(Default)]
struct Recorder {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl Logger for Recorder {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

struct Worker {
    logger: SharedLogger,
}

impl Worker {
    fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    fn run(&self) -> usize {
        self.logger.info("worker started");
        self.logger.warn("worker finished early");
        2
    }
}

#[test]
fn test_custom_logger_injected() {
    let recorder = Arc::new(Recorder::default());
    let worker = Worker::new(recorder.clone());
    assert_eq!(worker.run(), 2);
    let entries = recorder.entries.lock();
    assert_eq!(
        *entries,
        vec![
            (LogLevel::Info, "worker started".to_string()),
            (LogLevel::Warn, "worker finished early".to_string()),
        ]
    );
}

#[test]
fn test_default_enabled_is_true() {
    let recorder = Recorder::default();
    assert!(recorder.enabled(LogLevel::Trace));
}

#[test]
fn test_null_logger_injected() {
    let worker = Worker::new(Arc::new(NullLogger));
    assert_eq!(worker.run(), 2);
}

#[test]
fn test_writer_logger_threshold() {
    let logger = WriterLogger::new(Vec::new(), LogLevel::Warn).with_timestamps(false);
    logger.info("skipped");
    logger.warn("kept");
    logger.error("kept too");
    let text = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(text, "WARN kept\nERROR kept too\n");
}
