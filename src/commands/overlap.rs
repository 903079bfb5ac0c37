//! Overlap command implementation.
//!
//! Total overlap length between two segment lists using a merge-sweep
//! over both lists. Inputs must already be sorted by start and free of
//! internal overlaps; neither property is checked.

use crate::error::Result;
use crate::output::ResultWriter;
use crate::seg::read_segments;
use crate::segment::Segment;
use std::io::Write;
use std::path::Path;

/// Total number of positions shared by two sorted, non-overlapping lists.
///
/// Runs in O(n + m). When both current segments end at the same
/// coordinate the pointer into `b` is advanced. Input that breaks the
/// ordering precondition gives an unspecified total, saturating at `u64::MAX`.
pub fn overlap_length(a: &[Segment], b: &[Segment]) -> u64 {
    let mut total: u64 = 0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        total = total.saturating_add(a[i].overlap_length(&b[j]));

        if a[i].end() < b[j].end() {
            i += 1;
        } else {
            j += 1;
        }
    }

    total
}

/// Statistics from an overlap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlapStats {
    /// Segments read from file A
    pub segments_a: usize,
    /// Segments read from file B
    pub segments_b: usize,
    /// Total overlap length
    pub overlap: u64,
}

impl std::fmt::Display for OverlapStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segments A: {}, Segments B: {}, Overlap: {}",
            self.segments_a, self.segments_b, self.overlap
        )
    }
}

/// Overlap command over two `.s` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapCommand;

impl OverlapCommand {
    pub fn new() -> Self {
        Self
    }

    /// Read both files and compute their overlap.
    pub fn compute<P: AsRef<Path>>(&self, input_a: P, input_b: P) -> Result<OverlapStats> {
        let a = read_segments(input_a)?;
        let b = read_segments(input_b)?;

        Ok(OverlapStats {
            segments_a: a.len(),
            segments_b: b.len(),
            overlap: overlap_length(&a, &b),
        })
    }

    /// Compute the overlap and write it as a single line.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_a: P,
        input_b: P,
        output: &mut W,
    ) -> Result<OverlapStats> {
        let stats = self.compute(input_a, input_b)?;

        let mut writer = ResultWriter::new(output);
        writer.write_int_line(stats.overlap)?;
        writer.flush()?;

        Ok(stats)
    }
}

/// Overlap length between two segment files.
pub fn overlap_length_files<P: AsRef<Path>>(input_a: P, input_b: P) -> Result<u64> {
    OverlapCommand::new()
        .compute(input_a, input_b)
        .map(|stats| stats.overlap)
}
