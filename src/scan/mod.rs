//! Scan orchestration: bounded-concurrency fan-out over files, ordered
//! fan-in of formatted match blocks.

pub mod errors;
pub mod job;
pub mod pool;
pub mod walk;

pub use errors::{JobError, ScanError};
pub use job::FileJob;
pub use walk::expand_paths;

use crate::print::ScanOptions;
use ast_grep_core::Pattern;
use ast_grep_language::SupportLang;
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Tally of a completed scan. Failed files are logged, not fatal; the run
/// as a whole succeeds once every file has been attempted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_matched: usize,
    pub files_failed: usize,
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Scan every file with up to `concurrency` jobs in flight, writing one
/// block per matching file to `out` in submission order.
///
/// Per-file failures (unreadable, unparseable, or a panicking worker) are
/// logged with the file path attached and contribute no output; they never
/// abort the remaining files.
pub fn run_scan(
    files: Vec<PathBuf>,
    patterns: &[Pattern],
    lang: SupportLang,
    options: &ScanOptions,
    concurrency: usize,
    root: &Path,
    out: &mut dyn Write,
) -> io::Result<ScanSummary> {
    let mut summary = ScanSummary {
        files_scanned: files.len(),
        ..Default::default()
    };
    let mut write_error: Option<io::Error> = None;

    pool::run_ordered(
        files,
        concurrency,
        |_, path: PathBuf| {
            // Panics are caught at the pool boundary and pinned to the
            // file that triggered them; one bad job must not take down a
            // worker slot or the run.
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                FileJob {
                    path: path.clone(),
                    root,
                    lang,
                    patterns,
                    options,
                }
                .run()
            }));

            match result {
                Ok(outcome) => outcome,
                Err(payload) => Err(JobError::Worker {
                    path,
                    message: panic_message(payload),
                }),
            }
        },
        |outcome| match outcome {
            Ok(Some(block)) => {
                summary.files_matched += 1;
                if write_error.is_none() {
                    if let Err(err) = writeln!(out, "{block}") {
                        write_error = Some(err);
                    }
                }
            }
            Ok(None) => {}
            Err(err) => {
                summary.files_failed += 1;
                warn!("{err}");
            }
        },
    );

    match write_error {
        Some(err) => Err(err),
        None => Ok(summary),
    }
}
