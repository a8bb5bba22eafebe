use std::io::Write;

use chrono::Local;
use colored::{ColoredString, Colorize};
use parking_lot::Mutex;

use super::telemetry::sanitize_for_log;
use super::{LogLevel, Logger};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn level_tag(level: LogLevel) -> ColoredString {
    let tag = format!("{:<5}", level.as_str());
    match level {
        LogLevel::Error => tag.red().bold(),
        LogLevel::Warn => tag.yellow().bold(),
        LogLevel::Info => tag.green(),
        LogLevel::Debug => tag.blue(),
        LogLevel::Trace => tag.dimmed(),
    }
}

/// Writes colored, human-oriented lines to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    max_level: LogLevel,
    color: bool,
    timestamps: bool,
}

impl ConsoleLogger {
    pub fn new(max_level: LogLevel) -> Self {
        Self {
            max_level,
            color: true,
            timestamps: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// The line that would be written for `message`, without the newline.
    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        let tag = if self.color {
            level_tag(level).to_string()
        } else {
            format!("{:<5}", level.as_str())
        };
        let message = sanitize_for_log(message);
        if self.timestamps {
            let ts = Local::now().format(TIMESTAMP_FORMAT).to_string();
            let ts = if self.color { ts.dimmed().to_string() } else { ts };
            format!("{} {} {}", ts, tag, message)
        } else {
            format!("{} {}", tag, message)
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        eprintln!("{}", self.format_line(level, message));
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }
}

/// Writes plain `timestamp LEVEL message` lines to any writer.
///
/// The writer sits behind a mutex so concurrent callers never interleave
/// partial lines. Write failures are swallowed; logging must not take the
/// caller down.
pub struct WriterLogger<W: Write + Send> {
    writer: Mutex<W>,
    max_level: LogLevel,
    timestamps: bool,
}

impl<W: Write + Send> WriterLogger<W> {
    pub fn new(writer: W, max_level: LogLevel) -> Self {
        Self {
            writer: Mutex::new(writer),
            max_level,
            timestamps: true,
        }
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Logger for WriterLogger<W> {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let message = sanitize_for_log(message);
        let line = if self.timestamps {
            format!(
                "{} {} {}",
                Local::now().format(TIMESTAMP_FORMAT),
                level.as_str(),
                message
            )
        } else {
            format!("{} {}", level.as_str(), message)
        };
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }
}

/// Forwards every message to the `tracing` macros.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    max_level: LogLevel,
}

impl TracingLogger {
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Trace => tracing::trace!("{}", message),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}
