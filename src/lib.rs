//! Syngrep: structural code search with grep-style output
//!
//! A grep-like tool that matches ast-grep structural patterns against
//! syntax trees instead of regular expressions against raw text, then
//! prints matches with context lines and highlighting.
//!
//! # Architecture
//!
//! Pattern evaluation yields half-open byte spans per matched node. All
//! output intelligence lives downstream of span acquisition: [`text`]
//! consolidates spans and maps offsets to lines, [`print`] extracts
//! context and renders blocks, and [`scan`] fans the per-file pipeline out
//! over a fixed-size worker pool while keeping output deterministic.
//!
//! # Example
//!
//! ```no_run
//! use syngrep::{compile_all, expand_paths, run_scan, ScanOptions, SupportLang};
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lang = SupportLang::Rust;
//! let patterns = compile_all(&["$EXPR.unwrap()".to_string()], lang)?;
//! let root = Path::new(".");
//! let files = expand_paths(&[PathBuf::from("src")], root, &[], lang)?;
//!
//! let mut stdout = std::io::stdout();
//! let summary = run_scan(
//!     files,
//!     &patterns,
//!     lang,
//!     &ScanOptions::default(),
//!     4,
//!     root,
//!     &mut stdout,
//! )?;
//! eprintln!("{} file(s) matched", summary.files_matched);
//! # Ok(())
//! # }
//! ```

pub mod pool;
pub mod print;
pub mod scan;
pub mod sg;
pub mod text;
pub mod ts;

// Re-exports
pub use print::{
    extract, format_matches, highlight_ranges, ExtractedMatch, LineContent, ScanOptions,
};
pub use scan::{expand_paths, run_scan, FileJob, JobError, ScanError, ScanSummary};
pub use sg::{compile, compile_all, extensions, parse_lang, PatternMatcher, QueryError, SupportLang};
pub use text::{merge_ranges, sort_ranges, LineStart, TextRange};
pub use ts::{ParseError, SourceParser};
