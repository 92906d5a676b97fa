//! Text geometry: byte ranges and line indexing.

pub mod lines;
pub mod range;

pub use lines::{line_for_offset, line_starts, split_lines, LineStart};
pub use range::{merge_ranges, sort_ranges, TextRange};
