//! Half-open byte ranges and range-set consolidation.
//!
//! Pattern evaluation yields one span per matched node; spans from different
//! patterns may nest, overlap, or touch. Everything downstream (highlighting,
//! context extraction) assumes a sorted range list, and full-line output
//! additionally assumes disjoint ranges.

use std::ops::Range;

/// A half-open `[start, end)` byte range into a file's text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Create a range. Panics if `start > end`; a reversed range is a
    /// programming error upstream and must not propagate.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid range: start {start} > end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for TextRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// Sort ranges by `(start, end)` ascending. Stable; empty input is fine.
pub fn sort_ranges(mut ranges: Vec<TextRange>) -> Vec<TextRange> {
    ranges.sort();
    ranges
}

/// Merge a range list into the minimal sorted set of disjoint ranges
/// covering the same offsets. Touching ranges (`next.start == last.end`)
/// merge as well.
pub fn merge_ranges(ranges: Vec<TextRange>) -> Vec<TextRange> {
    let sorted = sort_ranges(ranges);
    let mut merged: Vec<TextRange> = Vec::with_capacity(sorted.len());

    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }

    merged
}
