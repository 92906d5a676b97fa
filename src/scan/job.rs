//! The per-file pipeline: read, parse, query, extract, format.

use crate::pool::with_parser;
use crate::print::{extract, format_matches, ScanOptions};
use crate::scan::errors::JobError;
use crate::sg::query::PatternMatcher;
use ast_grep_core::Pattern;
use ast_grep_language::SupportLang;
use std::fs;
use std::path::{Path, PathBuf};

/// One file's worth of work. Content, spans, and the line index built here
/// are owned by this job and never shared with another.
pub struct FileJob<'a> {
    pub path: PathBuf,
    pub root: &'a Path,
    pub lang: SupportLang,
    pub patterns: &'a [Pattern],
    pub options: &'a ScanOptions,
}

impl FileJob<'_> {
    /// Run the pipeline. `Ok(None)` means the file parsed cleanly but no
    /// pattern matched; the caller prints nothing for it.
    pub fn run(&self) -> Result<Option<String>, JobError> {
        let content = fs::read_to_string(&self.path).map_err(|source| JobError::Read {
            path: self.path.clone(),
            source,
        })?;

        match with_parser(self.lang, |parser| parser.parse_valid(&content)) {
            Ok(Ok(_tree)) => {}
            Ok(Err(source)) | Err(source) => {
                return Err(JobError::Parse {
                    path: self.path.clone(),
                    source,
                })
            }
        }

        // Spans from every pattern are pooled into one list; consolidation
        // happens inside extraction.
        let matcher = PatternMatcher::new(&content, self.lang);
        let ranges = matcher.find_all_ranges(self.patterns);
        if ranges.is_empty() {
            return Ok(None);
        }

        let extracted = extract(&content, &ranges, self.options);
        let display_path = self
            .path
            .strip_prefix(self.root)
            .unwrap_or(&self.path)
            .display()
            .to_string();

        Ok(Some(format_matches(&display_path, &extracted, self.options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sg::query::compile;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn options() -> ScanOptions {
        ScanOptions::default()
    }

    fn job<'a>(
        path: PathBuf,
        root: &'a Path,
        patterns: &'a [Pattern],
        options: &'a ScanOptions,
    ) -> FileJob<'a> {
        FileJob {
            path,
            root,
            lang: SupportLang::Rust,
            patterns,
            options,
        }
    }

    #[test]
    fn matching_file_produces_a_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hit.rs");
        fs::write(&path, "fn alpha() {}\nfn beta() {}\n").unwrap();

        let patterns = vec![compile("fn $NAME() {}", SupportLang::Rust).unwrap()];
        let opts = options();
        let out = job(path, dir.path(), &patterns, &opts).run().unwrap();

        let block = out.expect("two matches expected");
        assert!(block.starts_with("hit.rs\n"));
        assert!(block.contains("1:fn alpha() {}"));
        assert!(block.contains("2:fn beta() {}"));
    }

    #[test]
    fn clean_file_without_matches_is_silent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("miss.rs");
        fs::write(&path, "struct S;\n").unwrap();

        let patterns = vec![compile("fn $NAME() {}", SupportLang::Rust).unwrap()];
        let opts = options();
        let out = job(path, dir.path(), &patterns, &opts).run().unwrap();

        assert!(out.is_none());
    }

    #[test]
    fn unreadable_file_fails_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.rs");

        let patterns = vec![compile("fn $NAME() {}", SupportLang::Rust).unwrap()];
        let opts = options();
        let err = job(path.clone(), dir.path(), &patterns, &opts)
            .run()
            .unwrap_err();

        assert!(matches!(err, JobError::Read { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn malformed_file_fails_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.rs");
        fs::write(&path, "fn broken( {\n").unwrap();

        let patterns = vec![compile("fn $NAME() {}", SupportLang::Rust).unwrap()];
        let opts = options();
        let err = job(path.clone(), dir.path(), &patterns, &opts)
            .run()
            .unwrap_err();

        assert!(matches!(err, JobError::Parse { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn display_path_is_root_relative() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let path = dir.path().join("sub/deep.rs");
        fs::write(&path, "fn deep() {}\n").unwrap();

        let patterns = vec![compile("fn $NAME() {}", SupportLang::Rust).unwrap()];
        let opts = options();
        let block = job(path, dir.path(), &patterns, &opts)
            .run()
            .unwrap()
            .unwrap();

        assert!(block.starts_with(&format!("sub{}deep.rs", std::path::MAIN_SEPARATOR)));
    }
}
