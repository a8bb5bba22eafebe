//! Time formatting helpers
//!
//! Human-readable durations, a lenient duration parser ("1h30m", "250ms"),
//! relative times ("5 minutes ago") and RFC 3339 timestamps.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

use crate::errors::ParseError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / HOUR;
    let mins = (total_secs % HOUR) / MINUTE;
    let secs = total_secs % MINUTE;
    let millis = duration.subsec_millis();

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {:02}s", mins, secs)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

/// Format using only the two most significant units, e.g. `"1d 2h"`.
pub fn format_duration_compact(duration: Duration) -> String {
    let total = duration.as_secs();
    let parts = [
        (total / DAY, "d"),
        ((total % DAY) / HOUR, "h"),
        ((total % HOUR) / MINUTE, "m"),
        (total % MINUTE, "s"),
    ];

    let shown: Vec<String> = parts
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .take(2)
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if shown.is_empty() {
        "0s".to_string()
    } else {
        shown.join(" ")
    }
}

fn duration_token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"(\d+)(ms|d|h|m|s)").expect("invalid duration token regex"))
}

fn duration_full_regex() -> &'static Regex {
    static FULL: OnceLock<Regex> = OnceLock::new();
    FULL.get_or_init(|| Regex::new(r"^(?:\d+(?:ms|d|h|m|s))+$").expect("invalid duration regex"))
}

/// Parse durations such as `"45s"`, `"1h30m"`, `"2d 4h"` or `"250ms"`.
///
/// A bare number is read as seconds. Whitespace between units is ignored.
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Ok(secs) = compact.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let lowered = compact.to_ascii_lowercase();
    if !duration_full_regex().is_match(&lowered) {
        return Err(ParseError::invalid(input, "duration"));
    }

    let mut total = Duration::ZERO;
    for caps in duration_token_regex().captures_iter(&lowered) {
        let value: u64 = caps[1]
            .parse()
            .map_err(|_| ParseError::invalid(input, "duration"))?;
        let part = match &caps[2] {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value.saturating_mul(MINUTE)),
            "h" => Duration::from_secs(value.saturating_mul(HOUR)),
            _ => Duration::from_secs(value.saturating_mul(DAY)),
        };
        total = total.saturating_add(part);
    }
    Ok(total)
}

fn plural(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Describe `then` relative to `now`: `"just now"`, `"5 minutes ago"`,
/// `"in 2 hours"`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let secs = delta.num_seconds();
    let abs = secs.unsigned_abs();

    if abs < MINUTE {
        return "just now".to_string();
    }

    let phrase = if abs < HOUR {
        plural((abs / MINUTE) as i64, "minute")
    } else if abs < DAY {
        plural((abs / HOUR) as i64, "hour")
    } else if abs < 30 * DAY {
        plural((abs / DAY) as i64, "day")
    } else if abs < 365 * DAY {
        plural((abs / (30 * DAY)) as i64, "month")
    } else {
        plural((abs / (365 * DAY)) as i64, "year")
    };

    if secs >= 0 {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

/// RFC 3339 with second precision, e.g. `2024-05-01T12:30:00Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
