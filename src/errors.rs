use std::net::Ipv4Addr;
use thiserror::Error;

/// The central error type for utilkit.
///
/// Each helper module owns a small error enum; this wrapper lets callers
/// that touch several of them propagate with a single `?`.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Subnet error: {0}")]
    Subnet(#[from] SubnetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is empty")]
    Empty,

    #[error("Queue capacity must be at least 1")]
    InvalidCapacity,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty")]
    Empty,

    #[error("Cannot parse '{input}' as {target}")]
    Invalid { input: String, target: String },
}

impl ParseError {
    pub(crate) fn invalid(input: &str, target: impl Into<String>) -> Self {
        Self::Invalid {
            input: input.to_string(),
            target: target.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Prefix length {0} is out of range (0-32)")]
    InvalidPrefix(u8),

    #[error("Subnet mask {0} is not contiguous")]
    NonContiguousMask(Ipv4Addr),

    #[error("Malformed subnet '{0}', expected a.b.c.d/prefix")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, UtilError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_USAGE_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(util_err) = e.downcast_ref::<UtilError>() {
        return match util_err {
            UtilError::Config(_) => EXIT_CONFIG_ERROR,
            UtilError::Usage(_) | UtilError::Parse(_) | UtilError::Subnet(_) => EXIT_USAGE_ERROR,
            _ => EXIT_ERROR,
        };
    }

    // Direct enum unwraps fallback
    if e.downcast_ref::<ParseError>().is_some() || e.downcast_ref::<SubnetError>().is_some() {
        return EXIT_USAGE_ERROR;
    }

    EXIT_ERROR
}
