//! Correlation command implementation.
//!
//! Pearson correlation between two equal-length signal series.

use crate::error::{GenoError, Result};
use crate::output::{FloatFormat, ResultWriter};
use crate::signal::read_signal;
use std::io::Write;
use std::path::Path;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Square root of the summed squared deviations from `mean`.
///
/// Not divided by N: the factors cancel in the correlation ratio.
fn root_sum_squares(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|&v| (v - mean) * (v - mean))
        .sum::<f64>()
        .sqrt()
}

/// Pearson correlation coefficient of `x` and `y`.
///
/// # Errors
///
/// - [`GenoError::LengthMismatch`] if the series differ in length
/// - [`GenoError::EmptyInput`] if both series are empty
/// - [`GenoError::ZeroVariance`] if either series is constant
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(GenoError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(GenoError::EmptyInput);
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let spread_x = root_sum_squares(x, mean_x);
    let spread_y = root_sum_squares(y, mean_y);

    if spread_x == 0.0 || spread_y == 0.0 {
        return Err(GenoError::ZeroVariance);
    }

    let mut cross = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        cross += (xi - mean_x) * (yi - mean_y);
    }

    Ok(cross / (spread_x * spread_y))
}

/// Statistics from a correlation run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CorrelationStats {
    /// Values in each series
    pub len: usize,
    /// Pearson correlation coefficient
    pub r: f64,
}

impl std::fmt::Display for CorrelationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Values: {}, r: {:.6}", self.len, self.r)
    }
}

/// Correlation command over two `.f` files.
#[derive(Debug, Clone, Default)]
pub struct CorrelationCommand {
    pub float_format: FloatFormat,
}

impl CorrelationCommand {
    pub fn new() -> Self {
        Self {
            float_format: FloatFormat::Shortest,
        }
    }

    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }

    pub fn compute<P: AsRef<Path>>(&self, input_a: P, input_b: P) -> Result<CorrelationStats> {
        let x = read_signal(input_a)?;
        let y = read_signal(input_b)?;

        let r = pearson(&x, &y)?;
        Ok(CorrelationStats { len: x.len(), r })
    }

    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_a: P,
        input_b: P,
        output: &mut W,
    ) -> Result<CorrelationStats> {
        let stats = self.compute(input_a, input_b)?;

        let mut writer = ResultWriter::with_format(output, self.float_format);
        writer.write_float_line(stats.r)?;
        writer.flush()?;

        Ok(stats)
    }
}

/// Pearson correlation between two function files.
pub fn correlation_files<P: AsRef<Path>>(input_a: P, input_b: P) -> Result<f64> {
    CorrelationCommand::new()
        .compute(input_a, input_b)
        .map(|stats| stats.r)
}
