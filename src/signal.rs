//! Function file (`.f`) parser.
//!
//! One floating-point value per line; line `i` (0-based) holds the signal
//! at coordinate `i`.

use crate::error::{GenoError, Result};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A line-oriented signal reader.
pub struct SignalReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> SignalReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(32),
        }
    }

    /// Read the next value.
    ///
    /// Blank lines are not skipped: a coordinate with no value is an error.
    pub fn read_value(&mut self) -> Result<Option<f64>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = self.buffer.trim_end_matches(['\n', '\r']);
        line.trim()
            .parse()
            .map(Some)
            .map_err(|_| GenoError::Parse {
                field: "value",
                line_number: self.line_number,
                line: line.to_string(),
            })
    }

    pub fn values(self) -> ValueIter<R> {
        ValueIter { reader: self }
    }
}

/// Iterator over parsed signal values.
pub struct ValueIter<R: Read> {
    reader: SignalReader<R>,
}

impl<R: Read> Iterator for ValueIter<R> {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_value().transpose()
    }
}

/// Read a whole `.f` file into memory and parse it.
pub fn read_signal<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)?;
    parse_signal(&content)
}

/// Parse signal values from a string.
pub fn parse_signal(content: &str) -> Result<Vec<f64>> {
    SignalReader::new(content.as_bytes()).values().collect()
}
