//! Segment mean command implementation.
//!
//! Mean signal value over the positions covered by a segment list, with the
//! signal index taken as the coordinate.

use crate::error::{GenoError, Result};
use crate::output::{FloatFormat, ResultWriter};
use crate::seg::read_segments;
use crate::segment::Segment;
use crate::signal::read_signal;
use std::io::Write;
use std::path::Path;

/// Sum and count of covered values, from a single forward sweep.
fn covered_sum(segments: &[Segment], values: &[f64]) -> (f64, usize) {
    let mut sum = 0.0;
    let mut count = 0;
    let mut cursor = 0;

    for (i, &value) in values.iter().enumerate() {
        let pos = i as i64;

        // Drop segments that end at or before this position
        while cursor < segments.len() && pos >= segments[cursor].end() {
            cursor += 1;
        }

        if let Some(seg) = segments.get(cursor) {
            if seg.contains(pos) {
                sum += value;
                count += 1;
            }
        }
    }

    (sum, count)
}

/// Sum and count of covered values, failing when nothing is covered.
fn covered_totals(segments: &[Segment], values: &[f64]) -> Result<(f64, usize)> {
    match covered_sum(segments, values) {
        (_, 0) => Err(GenoError::NoCoverage),
        totals => Ok(totals),
    }
}

/// Mean of `values` at positions covered by `segments`.
///
/// Segments must be sorted by start and non-overlapping.
///
/// # Errors
///
/// [`GenoError::NoCoverage`] when no position of `values` is covered.
pub fn segment_mean(segments: &[Segment], values: &[f64]) -> Result<f64> {
    let (sum, count) = covered_totals(segments, values)?;
    Ok(sum / count as f64)
}

/// Statistics from a segment mean run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentMeanStats {
    /// Segments read
    pub segments: usize,
    /// Signal positions read
    pub positions: usize,
    /// Positions inside some segment
    pub covered: usize,
    pub mean: f64,
}

impl std::fmt::Display for SegmentMeanStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segments: {}, Positions: {}, Covered: {}, Mean: {:.6}",
            self.segments, self.positions, self.covered, self.mean
        )
    }
}

/// Segment mean command over a `.s` and a `.f` file.
#[derive(Debug, Clone, Default)]
pub struct SegmentMeanCommand {
    pub float_format: FloatFormat,
}

impl SegmentMeanCommand {
    pub fn new() -> Self {
        Self {
            float_format: FloatFormat::Shortest,
        }
    }

    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }

    pub fn compute<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        segment_path: P,
        signal_path: Q,
    ) -> Result<SegmentMeanStats> {
        let segments = read_segments(segment_path)?;
        let values = read_signal(signal_path)?;

        let (sum, covered) = covered_totals(&segments, &values)?;

        Ok(SegmentMeanStats {
            segments: segments.len(),
            positions: values.len(),
            covered,
            mean: sum / covered as f64,
        })
    }

    pub fn run<P: AsRef<Path>, Q: AsRef<Path>, W: Write>(
        &self,
        segment_path: P,
        signal_path: Q,
        output: &mut W,
    ) -> Result<SegmentMeanStats> {
        let stats = self.compute(segment_path, signal_path)?;

        let mut writer = ResultWriter::with_format(output, self.float_format);
        writer.write_float_line(stats.mean)?;
        writer.flush()?;

        Ok(stats)
    }
}

/// Mean signal value inside the segments of a segment file.
pub fn segment_mean_files<P: AsRef<Path>, Q: AsRef<Path>>(
    segment_path: P,
    signal_path: Q,
) -> Result<f64> {
    SegmentMeanCommand::new()
        .compute(segment_path, signal_path)
        .map(|stats| stats.mean)
}
