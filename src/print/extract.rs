//! Context extraction: from matched byte ranges to line groups.
//!
//! Full-line mode shows every line a merged range touches; exact mode shows
//! the precise matched substring per individual range. Context lines come
//! from the line-split content on either side of the match.

use crate::print::highlight::highlight_ranges;
use crate::print::ScanOptions;
use crate::text::{line_for_offset, line_starts, merge_ranges, sort_ranges, split_lines, TextRange};

/// One rendered line: 1-based number plus text (possibly highlighted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContent {
    pub number: usize,
    pub text: String,
}

/// The line groups extracted for a single surviving range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMatch {
    pub before: Vec<LineContent>,
    pub matched: Vec<LineContent>,
    pub after: Vec<LineContent>,
}

/// Extract one match group per surviving range, ordered by range start.
///
/// In exact mode the ranges are sorted but NOT merged: every individual
/// match boundary is preserved. In full-line mode overlapping ranges
/// collapse naturally because whole lines are shown, so the merged set is
/// used. An empty range list yields an empty result.
pub fn extract(content: &str, ranges: &[TextRange], options: &ScanOptions) -> Vec<ExtractedMatch> {
    if ranges.is_empty() {
        return Vec::new();
    }

    let range_list = if options.exact {
        sort_ranges(ranges.to_vec())
    } else {
        merge_ranges(ranges.to_vec())
    };

    // Pre-highlight the whole content before splitting so a match spanning
    // several lines is styled consistently. Exact mode styles each extracted
    // substring on its own instead.
    let rendered = if options.color && !options.exact {
        highlight_ranges(content, &range_list, true)
    } else {
        content.to_string()
    };
    let lines = split_lines(&rendered);

    // The index is built from the original content: highlighting shifts
    // byte offsets, line numbers are unaffected.
    let starts = line_starts(content);
    let last_line = starts.last().map(|s| s.number).unwrap_or(1);
    let total_lines = lines.len();

    range_list
        .iter()
        .map(|range| {
            let start_line = line_for_offset(&starts, range.start).unwrap_or(1);
            let end_line = line_for_offset(&starts, range.end).unwrap_or(last_line);

            let before_start = start_line.saturating_sub(options.before_context).max(1);
            let after_end = (end_line + options.after_context).min(total_lines);

            let line_at = |number: usize| LineContent {
                number,
                text: lines[number - 1].to_string(),
            };

            let before = (before_start..start_line).map(line_at).collect();
            let after = (end_line + 1..=after_end).map(line_at).collect();

            let matched = if options.exact {
                let text = &content[range.start..range.end];
                let text = if options.color {
                    highlight_ranges(text, &[TextRange::new(0, text.len())], true)
                } else {
                    text.to_string()
                };
                vec![LineContent {
                    number: start_line,
                    text,
                }]
            } else {
                (start_line..=end_line).map(line_at).collect()
            };

            ExtractedMatch {
                before,
                matched,
                after,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control;
    use colored::Colorize;

    fn r(start: usize, end: usize) -> TextRange {
        TextRange::new(start, end)
    }

    fn opts() -> ScanOptions {
        ScanOptions {
            before_context: 0,
            after_context: 0,
            exact: false,
            color: false,
            print_filenames: true,
            print_line_numbers: true,
        }
    }

    fn line(number: usize, text: &str) -> LineContent {
        LineContent {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn no_ranges_no_output() {
        assert!(extract("anything", &[], &opts()).is_empty());
    }

    #[test]
    fn full_line_zero_context() {
        let matches = extract("hello, world!", &[r(0, 5)], &opts());
        assert_eq!(matches.len(), 1);
        assert!(matches[0].before.is_empty());
        assert!(matches[0].after.is_empty());
        assert_eq!(matches[0].matched, vec![line(1, "hello, world!")]);
    }

    #[test]
    fn full_line_zero_context_colored() {
        control::set_override(true);
        let options = ScanOptions {
            color: true,
            ..opts()
        };
        let matches = extract("hello, world!", &[r(0, 5)], &options);
        let expected = format!("{}, world!", "hello".bright_red().bold());
        assert_eq!(matches[0].matched, vec![line(1, &expected)]);
    }

    #[test]
    fn multi_line_match_with_context() {
        let options = ScanOptions {
            before_context: 1,
            after_context: 1,
            ..opts()
        };
        let content = "line1\nline2\nline3\nline4";
        let matches = extract(content, &[r(0, 17)], &options);

        assert_eq!(matches.len(), 1);
        assert!(matches[0].before.is_empty());
        assert_eq!(
            matches[0].matched,
            vec![line(1, "line1"), line(2, "line2"), line(3, "line3")]
        );
        assert_eq!(matches[0].after, vec![line(4, "line4")]);
    }

    #[test]
    fn crlf_two_groups() {
        let content = "line1\r\nline2\r\nline3";
        let matches = extract(content, &[r(0, 5), r(7, 12)], &opts());

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched, vec![line(1, "line1")]);
        assert_eq!(matches[1].matched, vec![line(2, "line2")]);
    }

    #[test]
    fn overlapping_ranges_merge_in_full_line_mode() {
        let content = "aaa bbb ccc";
        let matches = extract(content, &[r(0, 5), r(4, 9)], &opts());
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn exact_mode_keeps_individual_ranges() {
        let content = "aaa bbb ccc";
        let options = ScanOptions {
            exact: true,
            ..opts()
        };
        let matches = extract(content, &[r(0, 5), r(4, 9)], &options);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched, vec![line(1, "aaa b")]);
        assert_eq!(matches[1].matched, vec![line(1, "bbb c")]);
    }

    #[test]
    fn exact_mode_text_is_the_raw_slice() {
        let content = "fn alpha() {}\nfn beta() {}\n";
        let options = ScanOptions {
            exact: true,
            before_context: 2,
            after_context: 2,
            ..opts()
        };
        let ranges = [r(3, 8), r(17, 21)];
        let matches = extract(content, &ranges, &options);

        for (m, range) in matches.iter().zip(&ranges) {
            assert_eq!(m.matched.len(), 1);
            assert_eq!(m.matched[0].text, &content[range.start..range.end]);
        }
    }

    #[test]
    fn exact_mode_context_surrounds_match() {
        let content = "one\ntwo\nthree\nfour\nfive";
        let options = ScanOptions {
            exact: true,
            before_context: 1,
            after_context: 1,
            ..opts()
        };
        // "three" occupies bytes 8..13 on line 3.
        let matches = extract(content, &[r(8, 13)], &options);

        assert_eq!(matches[0].before, vec![line(2, "two")]);
        assert_eq!(matches[0].matched, vec![line(3, "three")]);
        assert_eq!(matches[0].after, vec![line(4, "four")]);
    }

    #[test]
    fn context_clamps_at_file_boundaries() {
        let content = "one\ntwo";
        let options = ScanOptions {
            before_context: 5,
            after_context: 5,
            ..opts()
        };
        let matches = extract(content, &[r(4, 7)], &options);

        assert_eq!(matches[0].before, vec![line(1, "one")]);
        assert_eq!(matches[0].matched, vec![line(2, "two")]);
        assert!(matches[0].after.is_empty());
    }

    #[test]
    fn groups_come_back_in_ascending_range_order() {
        let content = "a\nb\nc\nd";
        let matches = extract(content, &[r(6, 7), r(0, 1), r(4, 5)], &opts());
        let first_lines: Vec<usize> = matches.iter().map(|m| m.matched[0].number).collect();
        assert_eq!(first_lines, vec![1, 3, 4]);
    }
}
