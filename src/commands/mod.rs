//! Command implementations for geno.

pub mod correlation;
pub mod overlap;
pub mod segment_mean;

pub use correlation::{correlation_files, pearson, CorrelationCommand, CorrelationStats};
pub use overlap::{overlap_length, overlap_length_files, OverlapCommand, OverlapStats};
pub use segment_mean::{segment_mean, segment_mean_files, SegmentMeanCommand, SegmentMeanStats};
