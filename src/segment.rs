//! Core segment type for integer coordinate ranges.

use std::fmt;

/// A segment of integer positions.
/// Uses half-open coordinates: `start` is included, `end` is not.
///
/// The `start < end` invariant is enforced at construction, so a segment
/// always covers at least one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    start: i64,
    end: i64,
}

impl Segment {
    /// Create a new segment.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`. Use [`Segment::try_new`] for untrusted input.
    #[inline]
    pub fn new(start: i64, end: i64) -> Self {
        assert!(start < end, "segment start ({start}) must be < end ({end})");
        Self { start, end }
    }

    /// Create a segment, returning `None` unless `start < end`.
    #[inline]
    pub fn try_new(start: i64, end: i64) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns the number of positions covered.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Always false; kept alongside `len` for the usual pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether a position lies inside the segment.
    #[inline]
    pub fn contains(&self, pos: i64) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if this segment overlaps with another.
    #[inline]
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Compute the overlap length with another segment.
    #[inline]
    pub fn overlap_length(&self, other: &Segment) -> u64 {
        let s = self.start.max(other.start);
        let e = self.end.min(other.end);
        if s < e {
            e.abs_diff(s)
        } else {
            0
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.start, self.end)
    }
}

/// Sum of the lengths of all segments.
///
/// For a sorted, non-overlapping list this is the number of covered positions.
pub fn total_length(segments: &[Segment]) -> u64 {
    segments.iter().map(Segment::len).sum()
}
