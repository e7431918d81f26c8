//! Reading input lines.

use crate::error::{FilterError, Result};
use std::io::BufRead;

/// Reads the first line, without its terminator.
///
/// Returns [`FilterError::NoInput`] if the stream is already at its end.
/// An empty line is valid input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(FilterError::NoInput);
    }
    Ok(trim_line_ending(line))
}

/// Reads every line. At least one line must be present.
pub fn read_all_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    if lines.is_empty() {
        return Err(FilterError::NoInput);
    }
    Ok(lines.into_iter().map(trim_line_ending).collect())
}

fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
    }
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_first_line() {
        let mut input = Cursor::new("hello world\r\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap(), "hello world");
    }

    #[test]
    fn test_empty_line_is_input() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input).unwrap(), "");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("no newline");
        assert_eq!(read_line(&mut input).unwrap(), "no newline");
    }

    #[test]
    fn test_end_of_stream() {
        let mut input = Cursor::new("");
        assert!(matches!(read_line(&mut input), Err(FilterError::NoInput)));
    }

    #[test]
    fn test_read_all_lines() {
        let lines = read_all_lines(Cursor::new("a\r\nb\n\nc")).unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
        assert!(matches!(read_all_lines(Cursor::new("")), Err(FilterError::NoInput)));
    }
}
