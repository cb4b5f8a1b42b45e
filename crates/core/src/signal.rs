//! Signal-driven cleanup of an in-progress destination file (spec.md §4.7,
//! §5 "Cancellation").
//!
//! Only one mutable singleton is needed — the path of whichever destination
//! file is currently being written — and it is kept behind a single
//! atomically-readable pointer rather than any broader global mutable state
//! (spec.md §9's re-architecture guidance).

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Tracks the destination file currently being written so a signal handler
/// can remove it before the process exits.
pub struct CleanupManager {
    incomplete: Mutex<Option<PathBuf>>,
}

impl CleanupManager {
    /// The single process-wide instance.
    #[must_use]
    pub fn global() -> &'static CleanupManager {
        static INSTANCE: OnceLock<CleanupManager> = OnceLock::new();
        INSTANCE.get_or_init(|| CleanupManager {
            incomplete: Mutex::new(None),
        })
    }

    /// Registers `path` as an in-progress destination file.
    pub fn register_incomplete(&self, path: impl Into<PathBuf>) {
        *self.incomplete.lock().expect("cleanup mutex poisoned") = Some(path.into());
    }

    /// Clears the registration once the destination file is complete.
    pub fn unregister_incomplete(&self) {
        *self.incomplete.lock().expect("cleanup mutex poisoned") = None;
    }

    /// Removes the registered destination file, if any. Idempotent.
    pub fn cleanup(&self) {
        if let Some(path) = self.incomplete.lock().expect("cleanup mutex poisoned").take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Installs handlers for SIGINT/SIGTERM/SIGHUP that unlink the registered
/// incomplete destination and exit with [`crate::ExitCode::Signal`].
///
/// The handler runs on a dedicated thread blocking on the signal iterator
/// rather than inside the raw signal handler, so the cleanup (a file
/// removal syscall) is never executed in an async-signal-unsafe context.
#[cfg(unix)]
pub fn install_signal_handlers() -> std::io::Result<()> {
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            CleanupManager::global().cleanup();
            std::process::exit(crate::ExitCode::Signal.as_i32());
        }
    });
    Ok(())
}

/// No-op on non-Unix targets; `cpdd` otherwise behaves identically.
#[cfg(not(unix))]
pub fn install_signal_handlers() -> std::io::Result<()> {
    Ok(())
}
