//! Bridges the `-v`/`-vv`/`-vvv` verbosity flag (spec.md §3 "verbose") onto a
//! `tracing-subscriber` filter.
//!
//! The status line and statistics report are separate, non-`tracing`
//! collaborators (`cpdd-core::status`, `cpdd-core::stats`) that write
//! directly to stdout; this crate only governs the diagnostic log stream,
//! which always goes to stderr so the two never interleave.

#![deny(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Maps spec.md's 0–3 verbosity scale onto a tracing level.
///
/// `0` still surfaces warnings and errors — silence is reserved for
/// `RUST_LOG` overrides, not the default at `--verbose=0`.
#[must_use]
pub fn level_for_verbosity(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Installs a process-wide subscriber at the level implied by `verbose`,
/// honoring `RUST_LOG` if set (it takes precedence over the flag).
///
/// Intended to be called once, at process start, before any other component
/// logs. Writes to stderr so stdout remains available for the status line
/// and `--stats` report.
pub fn init(verbose: u8) {
    let default_directive = level_for_verbosity(verbose).to_string();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
