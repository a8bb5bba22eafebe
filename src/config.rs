//! Configuration
//!
//! One `Config` value is built at startup (from a TOML file or defaults) and
//! passed by reference to whatever needs it. Nothing here is global.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, UtilError};
use crate::logging::LogLevel;
use crate::text_box::BoxStyle;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "utilkit.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub text_box: TextBoxConfig,

    #[serde(default)]
    pub queue: QueueConfig,
}

/// Which backend the logging facade writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBackend {
    /// Colored lines on stderr.
    #[default]
    Console,
    /// Plain lines appended to `logging.file`.
    File,
    /// Forward to the global `tracing` subscriber.
    Tracing,
    /// Discard everything.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,
    #[serde(default)]
    pub backend: LogBackend,
    /// Target file for the `file` backend.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_true")]
    pub timestamps: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBoxConfig {
    #[serde(default)]
    pub style: BoxStyle,
    #[serde(default = "default_padding")]
    pub padding: usize,
    #[serde(default)]
    pub min_width: usize,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            backend: LogBackend::default(),
            file: None,
            timestamps: default_true(),
            color: default_true(),
        }
    }
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            style: BoxStyle::default(),
            padding: default_padding(),
            min_width: 0,
            color: default_true(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
        }
    }
}

fn default_level() -> LogLevel { LogLevel::Info }
fn default_true() -> bool { true }
fn default_padding() -> usize { 1 }
fn default_capacity() -> usize { 16 }

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, `utilkit.toml`
    /// in the working directory is used if present, otherwise defaults.
    /// Every failure comes back as [`UtilError::Config`].
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_file(Path::new(p)),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Read and validate the config at `path`, which must exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        Self::checked(&content)
    }

    /// Like [`load_file`](Self::load_file), but a missing file yields the
    /// defaults. Other read errors still fail.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::checked(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(read_error(path, e)),
        }
    }

    fn checked(content: &str) -> Result<Self> {
        let config = Self::from_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| UtilError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Reject values that would only fail later, at first use.
    pub fn validate(&self) -> Result<()> {
        if self.queue.default_capacity == 0 {
            return Err(UtilError::Config(
                "queue.default_capacity must be at least 1".to_string(),
            ));
        }
        if self.logging.backend == LogBackend::File && self.logging.file.is_none() {
            return Err(UtilError::Config(
                "logging.backend = \"file\" requires logging.file".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log_level(&self) -> LogLevel {
        self.logging.level
    }
}

fn read_error(path: &Path, err: io::Error) -> UtilError {
    UtilError::Config(format!("Failed to read config from {}: {}", path.display(), err))
}
