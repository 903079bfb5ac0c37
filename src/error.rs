//! Error types shared by the parsers and the calculators.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading inputs or computing a statistic.
#[derive(Error, Debug)]
pub enum GenoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A segment line did not split into exactly two tokens.
    #[error("Invalid line format (line {line_number}): {line}")]
    Format { line_number: usize, line: String },

    /// A token could not be parsed as a number.
    #[error("Invalid {field} (line {line_number}): {line}")]
    Parse {
        field: &'static str,
        line_number: usize,
        line: String,
    },

    /// A segment with start >= end.
    #[error("Start position must be less than end position (line {line_number}): {line}")]
    Order { line_number: usize, line: String },

    #[error("Function files must have the same size ({left} vs {right} values)")]
    LengthMismatch { left: usize, right: usize },

    #[error("Standard deviation is zero, cannot calculate correlation.")]
    ZeroVariance,

    #[error("No function values fall within the segments.")]
    NoCoverage,

    #[error("Function files must not be empty.")]
    EmptyInput,
}

/// Coarse classification of a [`GenoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Format,
    Parse,
    Order,
    LengthMismatch,
    ZeroVariance,
    NoCoverage,
    EmptyInput,
}

impl GenoError {
    /// Classification of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenoError::Io(_) => ErrorKind::Io,
            GenoError::Format { .. } => ErrorKind::Format,
            GenoError::Parse { .. } => ErrorKind::Parse,
            GenoError::Order { .. } => ErrorKind::Order,
            GenoError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            GenoError::ZeroVariance => ErrorKind::ZeroVariance,
            GenoError::NoCoverage => ErrorKind::NoCoverage,
            GenoError::EmptyInput => ErrorKind::EmptyInput,
        }
    }

    /// Raw input line that triggered a parse-stage error, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            GenoError::Format { line, .. }
            | GenoError::Parse { line, .. }
            | GenoError::Order { line, .. } => Some(line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_names_line() {
        let err = GenoError::Format {
            line_number: 3,
            line: "0 1 2".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid line format (line 3): 0 1 2");
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.line(), Some("0 1 2"));
    }

    #[test]
    fn test_validation_errors_have_fixed_messages() {
        assert_eq!(
            GenoError::ZeroVariance.to_string(),
            "Standard deviation is zero, cannot calculate correlation."
        );
        assert_eq!(
            GenoError::NoCoverage.to_string(),
            "No function values fall within the segments."
        );
        assert!(GenoError::LengthMismatch { left: 3, right: 4 }
            .to_string()
            .starts_with("Function files must have the same size"));
        assert_eq!(GenoError::NoCoverage.line(), None);
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: GenoError = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
