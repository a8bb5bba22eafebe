//! Tracing subscriber setup
//!
//! - Filter from `RUST_LOG` when set, otherwise from `logging.level`
//! - Compact fmt layer on stderr so stdout stays clean for command output
//! - Safe to call more than once; only the first call installs anything

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Install the global tracing subscriber described by `config`.
pub fn init_tracing(config: &LoggingConfig) {
    let default = LevelFilter::from_level(config.level.into());
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    install(filter, config.color);
}

/// Install the global tracing subscriber with an explicit filter string.
/// An unparsable filter falls back to `warn`.
pub fn init_tracing_with_filter(filter: &str, ansi: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    install(filter, ansi);
}

fn install(filter: EnvFilter, ansi: bool) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}

/// Escape control characters so a message cannot forge extra log lines.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x1b' => out.push_str("\\e"),
            '\x00' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}
