//! Final block rendering: path header plus line groups.

use crate::print::extract::{ExtractedMatch, LineContent};
use crate::print::ScanOptions;
use colored::Colorize;

/// Render one line as `<number><sep><text>`, with `:` for matched lines and
/// `-` for context lines. Without line numbers the bare text is returned.
fn render_line(line: &LineContent, options: &ScanOptions, is_context: bool) -> String {
    if !options.print_line_numbers {
        return line.text.clone();
    }

    let number = line.number.to_string();
    let number = if options.color {
        number.green().to_string()
    } else {
        number
    };
    let sep = if is_context { '-' } else { ':' };

    format!("{number}{sep}{}", line.text)
}

/// Render the printable block for one file: optional path header, then each
/// match group's before/matched/after lines. Callers never invoke this with
/// an empty match list; "no ranges" means "print nothing" for the file.
pub fn format_matches(
    relative_path: &str,
    matches: &[ExtractedMatch],
    options: &ScanOptions,
) -> String {
    let mut blocks = Vec::with_capacity(matches.len() + 1);

    if options.print_filenames {
        let header = if options.color {
            relative_path.magenta().bold().to_string()
        } else {
            relative_path.to_string()
        };
        blocks.push(header);
    }

    for group in matches {
        let mut rendered = Vec::with_capacity(
            group.before.len() + group.matched.len() + group.after.len(),
        );
        rendered.extend(group.before.iter().map(|l| render_line(l, options, true)));
        rendered.extend(group.matched.iter().map(|l| render_line(l, options, false)));
        rendered.extend(group.after.iter().map(|l| render_line(l, options, true)));
        blocks.push(rendered.join("\n"));
    }

    blocks.join("\n")
}
