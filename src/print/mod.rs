//! Match rendering: highlighting, context extraction, block formatting.

pub mod extract;
pub mod format;
pub mod highlight;

pub use extract::{extract, ExtractedMatch, LineContent};
pub use format::format_matches;
pub use highlight::highlight_ranges;

/// Output options shared by extraction and formatting.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Lines of context shown before each match.
    pub before_context: usize,
    /// Lines of context shown after each match.
    pub after_context: usize,
    /// Print only the exact matched text instead of whole matched lines.
    pub exact: bool,
    /// Emphasize matched text and color headers/line numbers.
    pub color: bool,
    /// Prepend a header line with the file's path.
    pub print_filenames: bool,
    /// Prefix every line with its 1-based line number.
    pub print_line_numbers: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            before_context: 0,
            after_context: 0,
            exact: false,
            color: false,
            print_filenames: true,
            print_line_numbers: true,
        }
    }
}
