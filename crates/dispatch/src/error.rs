use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A per-file placement failure. Callers (C6) treat these as warnings: they
/// are logged and counted toward a non-zero exit code, but do not abort
/// sibling entries.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cannot stat {path}")]
    Stat { path: PathBuf, source: io::Error },

    #[error("cannot remove existing destination {path}")]
    RemoveExisting { path: PathBuf, source: io::Error },

    #[error("cannot open source {path} for reading")]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("cannot create destination {path}")]
    CreateDestination { path: PathBuf, source: io::Error },

    #[error("I/O error copying to {path}")]
    Copy { path: PathBuf, source: io::Error },
}
