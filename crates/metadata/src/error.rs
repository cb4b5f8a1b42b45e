use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single attribute failed to propagate from source to destination.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot stat {path}")]
    Stat { path: PathBuf, source: io::Error },

    #[error("cannot set mode on {path}")]
    SetMode { path: PathBuf, source: io::Error },

    #[error("cannot set ownership on {path}")]
    SetOwnership { path: PathBuf, source: io::Error },

    #[error("cannot set timestamps on {path}")]
    SetTimestamps { path: PathBuf, source: io::Error },

    #[error("{operation} is not supported on this platform")]
    UnsupportedOnPlatform { operation: &'static str },
}
