//! String-to-primitive parsing helpers.

use std::str::FromStr;

use crate::errors::ParseError;
use crate::type_info::short_type_name;

/// Parse a trimmed value, reporting the target type on failure.
pub fn parse_value<T: FromStr>(input: &str) -> Result<T, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| ParseError::invalid(input, short_type_name::<T>()))
}

/// Parse or return `None`.
pub fn parse_opt<T: FromStr>(input: &str) -> Option<T> {
    parse_value(input).ok()
}

/// Parse or fall back to `default`.
pub fn parse_or<T: FromStr>(input: &str, default: T) -> T {
    parse_opt(input).unwrap_or(default)
}

/// Lenient boolean parsing: `true/false`, `yes/no`, `on/off`, `1/0`, `y/n`,
/// in any letter case.
pub fn parse_bool(input: &str) -> Result<bool, ParseError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(ParseError::invalid(input, "bool")),
    }
}

/// Method-style access to the helpers above.
pub trait ParseExt {
    fn parse_value<T: FromStr>(&self) -> Result<T, ParseError>;
    fn parse_or<T: FromStr>(&self, default: T) -> T;
    fn parse_bool(&self) -> Result<bool, ParseError>;
}

impl ParseExt for str {
    fn parse_value<T: FromStr>(&self) -> Result<T, ParseError> {
        parse_value(self)
    }

    fn parse_or<T: FromStr>(&self, default: T) -> T {
        parse_or(self, default)
    }

    fn parse_bool(&self) -> Result<bool, ParseError> {
        parse_bool(self)
    }
}

/// Parse a comma separated list, skipping empty entries.
pub fn parse_list<T: FromStr>(input: &str) -> Result<Vec<T>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_value)
        .collect()
}
