//! Process exit codes.
//!
//! cpdd only ever needs two numeric outcomes (0 on full success, 1 on any
//! usage, fatal-setup, or per-entry failure — see spec.md §7), but each
//! failure class gets its own named variant so call sites stay
//! self-documenting and a future split of the numeric codes does not force a
//! rename at every call site.

/// Outcome of a full `cpdd` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Full success: every entry was placed or intentionally skipped.
    Ok = 0,
    /// Bad flags or arguments.
    Usage = 1,
    /// Destination could not be created, or is a regular file with multiple sources.
    FatalSetup = 1,
    /// At least one source entry failed (stat/open/read/write/link/mkdir).
    PartialFailure = 1,
    /// Interrupted by SIGINT/SIGTERM/SIGHUP mid-copy.
    Signal = 1,
}

impl ExitCode {
    /// The process exit status to pass to `std::process::exit`.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExitCode::Ok => "ok",
            ExitCode::Usage => "usage error",
            ExitCode::FatalSetup => "fatal setup error",
            ExitCode::PartialFailure => "partial failure",
            ExitCode::Signal => "interrupted",
        };
        f.write_str(label)
    }
}
