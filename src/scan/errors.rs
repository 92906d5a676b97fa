use crate::ts::ParseError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Control-plane failures. These abort the run before any file is scanned.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no search pattern provided")]
    NoPatterns,

    #[error("no files found")]
    NoFiles,

    #[error("invalid exclude glob `{glob}`: {source}")]
    ExcludeGlob {
        glob: String,
        source: globset::Error,
    },
}

/// Per-file failures. Recovered: the file is skipped, the scan continues.
/// Every variant carries the originating path so a failure is always
/// attributable to exactly one file.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("{}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: worker panicked: {}", .path.display(), .message)]
    Worker { path: PathBuf, message: String },
}

impl JobError {
    /// The file this failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            JobError::Read { path, .. }
            | JobError::Parse { path, .. }
            | JobError::Worker { path, .. } => path,
        }
    }
}
