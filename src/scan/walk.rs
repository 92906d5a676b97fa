//! File enumeration: path expansion, extension allow-list, exclusion globs.

use crate::scan::errors::ScanError;
use crate::sg::lang;
use ast_grep_language::SupportLang;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Build a GlobSet from exclusion patterns. An unparseable glob is a
/// control-plane error; the user should fix it before anything is scanned.
fn build_excludes(globs: &[String]) -> Result<Option<GlobSet>, ScanError> {
    if globs.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = Glob::new(glob).map_err(|source| ScanError::ExcludeGlob {
            glob: glob.clone(),
            source,
        })?;
        builder.add(compiled);
    }

    let set = builder.build().map_err(|source| ScanError::ExcludeGlob {
        glob: globs.join(","),
        source,
    })?;
    Ok(Some(set))
}

/// Exclusion globs match against the root-relative path.
fn is_excluded(excludes: &Option<GlobSet>, root: &Path, path: &Path) -> bool {
    match excludes {
        Some(set) => set.is_match(path.strip_prefix(root).unwrap_or(path)),
        None => false,
    }
}

fn has_allowed_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// Expand CLI path arguments into a concrete, deterministic file list.
///
/// Relative paths resolve against `root`. Directories expand recursively,
/// restricted to the language's extension allow-list; exclusion globs prune
/// whole subtrees as well as individual files. Explicitly named files are
/// included regardless of extension. Nonexistent paths are logged and
/// skipped. The result is sorted and deduplicated, which fixes the
/// submission order of the scan.
pub fn expand_paths(
    paths: &[PathBuf],
    root: &Path,
    exclude: &[String],
    lang: SupportLang,
) -> Result<Vec<PathBuf>, ScanError> {
    let excludes = build_excludes(exclude)?;
    let allowed = lang::extensions(lang);
    let mut files = Vec::new();

    for path in paths {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };

        if resolved.is_dir() {
            let walker = WalkDir::new(&resolved)
                .into_iter()
                .filter_entry(|entry| !is_excluded(&excludes, root, entry.path()));

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("skipping unreadable entry: {err}");
                        continue;
                    }
                };
                if entry.file_type().is_file() && has_allowed_extension(entry.path(), allowed) {
                    files.push(entry.into_path());
                }
            }
        } else if resolved.is_file() {
            if !is_excluded(&excludes, root, &resolved) {
                files.push(resolved);
            }
        } else {
            warn!("path not found: {}", resolved.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
