//! Umbrella error type the CLI maps to an [`crate::ExitCode`].
//!
//! Lower crates define their own narrower `thiserror` enums (see
//! `cpdd-refindex::BuildError`, `cpdd-dispatch::PlaceError`) and are expected
//! to convert into [`CpddError`] only at the boundary where a decision about
//! the process exit code has to be made; inside the engine, per-entry
//! failures are logged and swallowed so sibling entries keep processing
//! (spec.md §7's propagation policy).

use std::path::PathBuf;

/// Top-level error surfaced to the CLI layer.
#[derive(Debug, thiserror::Error)]
pub enum CpddError {
    /// Bad flags or arguments (spec.md §7 "Usage").
    #[error("{0}")]
    Usage(String),

    /// Destination cannot be created, or is a regular file with multiple
    /// sources (spec.md §7 "Fatal setup").
    #[error("cannot prepare destination {path}: {source}")]
    FatalSetup {
        /// Destination path that could not be prepared.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// At least one source entry failed during the walk; the walk itself
    /// completed, so this is reported only after the fact.
    #[error("{failed} of {total} entries failed")]
    PartialFailure {
        /// Number of entries that failed.
        failed: usize,
        /// Total number of entries attempted.
        total: usize,
    },
}
