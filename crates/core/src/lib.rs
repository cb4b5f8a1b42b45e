//! Shared collaborators used by every other `cpdd` crate: the [`Options`]
//! configuration struct, the [`stats::Stats`] counters, [`ExitCode`], the
//! ANSI-aware [`status::StatusLine`], and the signal-driven cleanup guard in
//! [`signal`].
//!
//! None of these types touch the deduplication engine itself — they are the
//! "external collaborators" spec.md carves out of the core's scope, specified
//! here by the interface the engine crates consume.

#![deny(unsafe_code)]

pub mod error;
pub mod exit_code;
pub mod options;
pub mod signal;
pub mod stats;
pub mod status;

pub use error::CpddError;
pub use exit_code::ExitCode;
pub use options::{resolve_destination, LinkMode, Options, OptionsBuilder, Preserve, UsageError};
pub use stats::Stats;
pub use status::StatusLine;
