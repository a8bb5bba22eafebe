//! Error chain formatting
//!
//! Walks `source()` links so nested errors can be shown on one line for logs
//! or as an indented report for terminals.

use std::error::Error;

/// Helpers available on every error type.
pub trait ErrorChainExt {
    /// Messages from the outermost error down to the root cause.
    fn chain_messages(&self) -> Vec<String>;

    /// `"outer: caused by: inner: caused by: root"`
    fn format_chain(&self) -> String {
        self.chain_messages().join(": caused by: ")
    }

    /// Message of the innermost error.
    fn root_cause_message(&self) -> String {
        self.chain_messages().pop().unwrap_or_default()
    }
}

impl<E: Error + ?Sized> ErrorChainExt for E {
    fn chain_messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut current = self.source();
        while let Some(err) = current {
            messages.push(err.to_string());
            current = err.source();
        }
        messages
    }
}

/// Multi-line report for an `anyhow::Error`:
///
/// ```text
/// Error: failed to load config
///   caused by: No such file or directory (os error 2)
/// ```
pub fn format_anyhow(err: &anyhow::Error) -> String {
    let mut out = String::new();
    for (i, cause) in err.chain().enumerate() {
        if i == 0 {
            out.push_str(&format!("Error: {}", cause));
        } else {
            out.push_str(&format!("\n  caused by: {}", cause));
        }
    }
    out
}
