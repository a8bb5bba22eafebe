//! Stream conversion helpers over `std::io` readers.

use std::io::{self, BufRead, Cursor, Read};

/// Read everything from `reader` into a byte vector.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read everything and decode as UTF-8, replacing invalid sequences.
pub fn read_to_string_lossy<R: Read>(reader: R) -> io::Result<String> {
    let bytes = read_all(reader)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read at most `limit` bytes.
///
/// The flag is `true` when the stream had more data than was returned.
pub fn read_limited<R: Read>(reader: R, limit: usize) -> io::Result<(Vec<u8>, bool)> {
    let mut buf = Vec::new();
    // One extra byte tells us whether anything was cut off.
    reader.take(limit as u64 + 1).read_to_end(&mut buf)?;
    let truncated = buf.len() > limit;
    buf.truncate(limit);
    Ok((buf, truncated))
}

/// Wrap owned bytes in an in-memory reader.
pub fn to_reader(bytes: impl Into<Vec<u8>>) -> Cursor<Vec<u8>> {
    Cursor::new(bytes.into())
}

/// Collect lines, accepting both `\n` and `\r\n` endings.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all() {
        let data = read_all(to_reader("hello")).unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn test_read_to_string_lossy_replaces_invalid() {
        let text = read_to_string_lossy(to_reader(vec![b'o', b'k', 0xff])).unwrap();
        assert_eq!(text, "ok\u{fffd}");
    }

    #[test]
    fn test_read_limited() {
        let (data, truncated) = read_limited(to_reader("abcdef"), 4).unwrap();
        assert_eq!(data, b"abcd");
        assert!(truncated);

        let (data, truncated) = read_limited(to_reader("abcd"), 4).unwrap();
        assert_eq!(data, b"abcd");
        assert!(!truncated);

        let (data, truncated) = read_limited(to_reader(""), 0).unwrap();
        assert!(data.is_empty());
        assert!(!truncated);
    }

    #[test]
    fn test_read_lines_mixed_endings() {
        let lines = read_lines(to_reader("one\r\ntwo\nthree")).unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8_errors() {
        let result = read_lines(to_reader(vec![0xff, b'\n']));
        assert!(result.is_err());
    }
}
