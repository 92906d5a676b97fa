//! Byte-offset to line-number mapping.
//!
//! The index records where each line starts; a line break is `\n` or `\r\n`,
//! counted once per break. `split_lines` uses the same convention and keeps
//! the trailing empty segment after a final break, so line numbers from the
//! index always land inside the split array.

/// One line-start entry: the byte offset where a line begins and its
/// 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStart {
    pub offset: usize,
    pub number: usize,
}

/// Build the line index for `content`. The first entry is always `(0, 1)`.
pub fn line_starts(content: &str) -> Vec<LineStart> {
    let mut starts = vec![LineStart { offset: 0, number: 1 }];

    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(LineStart {
                offset: i + 1,
                number: starts.len() + 1,
            });
        }
    }

    starts
}

/// Line number of the entry whose interval `[offset, next_offset)` contains
/// `offset`; the final entry's interval extends past the content length.
/// `None` only for an empty index.
pub fn line_for_offset(starts: &[LineStart], offset: usize) -> Option<usize> {
    let idx = starts.partition_point(|entry| entry.offset <= offset);
    idx.checked_sub(1).map(|i| starts[i].number)
}

/// Split on `\r?\n`, keeping the empty segment after a trailing break.
/// `lines[n - 1]` is the text of line `n` in the index above.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
