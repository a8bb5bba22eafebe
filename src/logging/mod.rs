//! Logging Facade
//!
//! A small, injectable logging capability. Code that wants to log takes a
//! [`SharedLogger`] argument instead of reaching for a global; the caller
//! decides which backend sits behind it:
//!
//! - [`ConsoleLogger`]: colored lines on stderr
//! - [`WriterLogger`]: plain lines on any `io::Write` (files, buffers)
//! - [`TracingLogger`]: forwards to the `tracing` subscriber
//! - [`NullLogger`]: discards everything

use std::fmt;
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{LogBackend, LoggingConfig};
use crate::errors::ParseError;

pub mod backends;
pub mod telemetry;

pub use backends::{ConsoleLogger, NullLogger, TracingLogger, WriterLogger};
pub use telemetry::{init_tracing, sanitize_for_log};

/// Severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ParseError::invalid(s, "log level")),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// A logging backend.
///
/// Implementors only need [`log`](Logger::log); the level helpers and the
/// default threshold check are provided.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    /// Whether messages at `level` would be written at all.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
}

/// Logger handle passed to constructors and call sites.
pub type SharedLogger = Arc<dyn Logger>;

/// Build the backend selected by `config`.
pub fn logger_from_config(config: &LoggingConfig) -> Result<SharedLogger> {
    let level = config.level;

    let logger: SharedLogger = match config.backend {
        LogBackend::Console => Arc::new(
            ConsoleLogger::new(level)
                .with_color(config.color)
                .with_timestamps(config.timestamps),
        ),
        LogBackend::File => {
            let path = config
                .file
                .as_deref()
                .context("logging.file is required for the file backend")?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            Arc::new(WriterLogger::new(file, level).with_timestamps(config.timestamps))
        }
        LogBackend::Tracing => Arc::new(TracingLogger::new(level)),
        LogBackend::None => Arc::new(NullLogger),
    };
    Ok(logger)
}
