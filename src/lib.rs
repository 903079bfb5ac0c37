//! geno: statistics over genomic segments and signals
//!
//! This library computes three statistics from two simple text formats:
//!
//! - **Overlap**: total overlap length between two segment lists (`.s`)
//! - **Correlation**: Pearson correlation between two signals (`.f`)
//! - **Segment mean**: mean signal value over the positions a segment list covers
//!
//! Each statistic is a pure function over in-memory slices, with a thin
//! file-reading wrapper on top.
//!
//! # Example
//!
//! ```rust,no_run
//! use geno::{read_segments, read_signal, segment_mean};
//!
//! let segments = read_segments("x.s").unwrap();
//! let values = read_signal("y.f").unwrap();
//!
//! let mean = segment_mean(&segments, &values).unwrap();
//! ```

pub mod commands;
pub mod error;
pub mod output;
pub mod seg;
pub mod segment;
pub mod signal;

// Re-export commonly used types
pub use commands::{
    correlation_files, overlap_length, overlap_length_files, pearson, segment_mean,
    segment_mean_files,
};
pub use error::{ErrorKind, GenoError, Result};
pub use seg::{parse_segments, read_segments, SegReader};
pub use segment::{total_length, Segment};
pub use signal::{parse_signal, read_signal, SignalReader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{
        correlation_files, overlap_length, overlap_length_files, pearson, segment_mean,
        segment_mean_files, CorrelationCommand, OverlapCommand, SegmentMeanCommand,
    };
    pub use crate::error::{ErrorKind, GenoError};
    pub use crate::seg::{parse_segments, read_segments};
    pub use crate::segment::Segment;
    pub use crate::signal::{parse_signal, read_signal};
}
