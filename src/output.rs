//! Result formatting.
//!
//! Uses itoa for integer formatting and ryu for float formatting.

use crate::error::Result;
use std::io::{BufWriter, Write};

/// How floating-point results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// Shortest representation that round-trips (ryu).
    #[default]
    Shortest,
    /// Fixed number of decimal places.
    Fixed(usize),
}

/// Writer for scalar results, one per line.
pub struct ResultWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
    ryu_buf: ryu::Buffer,
    float_format: FloatFormat,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_format(output, FloatFormat::default())
    }

    pub fn with_format(output: W, float_format: FloatFormat) -> Self {
        Self {
            writer: BufWriter::new(output),
            itoa_buf: itoa::Buffer::new(),
            ryu_buf: ryu::Buffer::new(),
            float_format,
        }
    }

    /// Write an integer followed by newline.
    #[inline]
    pub fn write_int_line<I: itoa::Integer>(&mut self, n: I) -> Result<()> {
        self.writer.write_all(self.itoa_buf.format(n).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a float followed by newline, honoring the configured format.
    #[inline]
    pub fn write_float_line(&mut self, f: f64) -> Result<()> {
        match self.float_format {
            FloatFormat::Shortest => {
                self.writer.write_all(self.ryu_buf.format(f).as_bytes())?;
            }
            FloatFormat::Fixed(precision) => {
                write!(self.writer, "{:.*}", precision, f)?;
            }
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
