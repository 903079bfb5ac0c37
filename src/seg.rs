//! Segment file (`.s`) parser.
//!
//! One segment per non-empty line: two whitespace-separated integers
//! `start end` with `start < end`. No header, no comments.

use crate::error::{GenoError, Result};
use crate::segment::Segment;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A line-oriented segment reader.
///
/// Sortedness and non-overlap of the segments are not checked here.
pub struct SegReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> SegReader<R> {
    /// Create a new segment reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(64),
        }
    }

    /// Read the next segment, skipping blank lines.
    pub fn read_segment(&mut self) -> Result<Option<Segment>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            return self.parse_line(line).map(Some);
        }
    }

    fn parse_line(&self, line: &str) -> Result<Segment> {
        let mut tokens = line.split_whitespace();
        let (start, end) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => {
                return Err(GenoError::Format {
                    line_number: self.line_number,
                    line: line.to_string(),
                })
            }
        };

        let start = self.parse_position(start, line)?;
        let end = self.parse_position(end, line)?;

        Segment::try_new(start, end).ok_or_else(|| GenoError::Order {
            line_number: self.line_number,
            line: line.to_string(),
        })
    }

    fn parse_position(&self, token: &str, line: &str) -> Result<i64> {
        token.parse().map_err(|_| GenoError::Parse {
            field: "start/end position",
            line_number: self.line_number,
            line: line.to_string(),
        })
    }

    /// Get an iterator over all segments.
    pub fn segments(self) -> SegmentIter<R> {
        SegmentIter { reader: self }
    }
}

/// Iterator over parsed segments.
pub struct SegmentIter<R: Read> {
    reader: SegReader<R>,
}

impl<R: Read> Iterator for SegmentIter<R> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_segment().transpose()
    }
}

/// Read all segments from a `.s` file.
///
/// The whole file is loaded into memory before parsing.
pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let content = fs::read_to_string(path)?;
    parse_segments(&content)
}

/// Parse segments from a string.
pub fn parse_segments(content: &str) -> Result<Vec<Segment>> {
    SegReader::new(content.as_bytes()).segments().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_segments() {
        let segs = parse_segments("1 2\n3 6\n").unwrap();
        assert_eq!(segs, vec![Segment::new(1, 2), Segment::new(3, 6)]);
    }

    #[test]
    fn test_any_whitespace_separates() {
        let segs = parse_segments("  10\t\t50  \r\n20 30").unwrap();
        assert_eq!(segs, vec![Segment::new(10, 50), Segment::new(20, 30)]);
    }

    #[test]
    fn test_file_order_preserved() {
        // Unsorted input is accepted as-is
        let segs = parse_segments("30 40\n1 2\n").unwrap();
        assert_eq!(segs[0].start(), 30);
        assert_eq!(segs[1].start(), 1);
    }

    #[test]
    fn test_skip_blank_lines() {
        let segs = parse_segments("\n1 2\n   \n3 6\n\n").unwrap();
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_segments("").unwrap().is_empty());
    }

    #[test]
    fn test_three_tokens_is_format_error() {
        let err = parse_segments("5 6\n0 1 2\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.line(), Some("0 1 2"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_single_token_is_format_error() {
        let err = parse_segments("42\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_non_integer_is_parse_error() {
        let err = parse_segments("1 2.5\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.line(), Some("1 2.5"));
        assert!(err.to_string().contains("start/end position"));
    }

    #[test]
    fn test_inverted_is_order_error() {
        let err = parse_segments("1 2\n9 9\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Order);
        assert_eq!(err.line(), Some("9 9"));

        let err = parse_segments("10 3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Order);
    }

    #[test]
    fn test_signed_positions() {
        let segs = parse_segments("-5 +5\n").unwrap();
        assert_eq!(segs[0].start(), -5);
        assert_eq!(segs[0].end(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_segments("/nonexistent/definitely/missing.s").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
