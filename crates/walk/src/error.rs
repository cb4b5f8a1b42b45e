use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal, run-aborting error — as opposed to the per-entry warnings the
/// walker otherwise swallows (spec.md §4.6 error policy).
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("destination {0} exists as a regular file but multiple sources were given")]
    DestinationConflict(PathBuf),

    #[error("cannot create destination directory {path}")]
    CreateDestinationRoot { path: PathBuf, source: io::Error },
}
