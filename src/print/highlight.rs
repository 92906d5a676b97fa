//! Emphasis splicing for matched byte ranges.

use crate::text::{merge_ranges, TextRange};
use colored::Colorize;

/// Splice emphasis codes around each matched range of `content`.
///
/// Returns the content unchanged when color is off, the content is empty, or
/// there are no ranges. Ranges are merged first, then processed in
/// descending start order so that splicing never invalidates the offsets of
/// ranges still to be processed.
pub fn highlight_ranges(content: &str, ranges: &[TextRange], color: bool) -> String {
    if !color || content.is_empty() || ranges.is_empty() {
        return content.to_string();
    }

    let mut out = content.to_string();
    for range in merge_ranges(ranges.to_vec()).iter().rev() {
        let emphasized = emphasize(&out[range.start..range.end]);
        out.replace_range(range.start..range.end, &emphasized);
    }

    out
}

/// Wrap the whitespace-trimmed core of `text` in emphasis, re-attaching the
/// leading/trailing whitespace unstyled. Whitespace-only text is returned
/// as-is so blank padding never renders bold.
fn emphasize(text: &str) -> String {
    let after_leading = text.trim_start();
    let lead = &text[..text.len() - after_leading.len()];
    let core = after_leading.trim_end();
    let trail = &after_leading[core.len()..];

    if core.is_empty() {
        return text.to_string();
    }

    format!("{lead}{}{trail}", core.bright_red().bold())
}
