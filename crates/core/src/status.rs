//! Terminal status line (spec.md §4.7, carried over from the original
//! `common/terminal.c`).
//!
//! Renders a single live-updating line when stdout is a TTY and `TERM`
//! indicates ANSI capability, using reverse video to make the line stand
//! out the way the original `print_status_update` did; falls back to plain
//! newline-terminated lines otherwise.

use std::io::{self, IsTerminal, Write};

const ANSI_TERM_SUBSTRINGS: &[&str] = &[
    "xterm", "screen", "tmux", "vt100", "vt102", "vt220", "vt320", "linux", "color", "ansi",
];

/// Whether the given `TERM` value indicates ANSI clear-to-eol support.
#[must_use]
pub fn term_is_ansi_capable(term: Option<&str>) -> bool {
    let Some(term) = term else { return false };
    if term == "dumb" {
        return false;
    }
    ANSI_TERM_SUBSTRINGS.iter().any(|needle| term.contains(needle))
}

/// A single live-updating status line.
#[derive(Debug)]
pub struct StatusLine {
    ansi_capable: bool,
}

impl StatusLine {
    /// Builds a status line bound to stdout, detecting ANSI capability once.
    #[must_use]
    pub fn for_stdout() -> Self {
        let is_tty = io::stdout().is_terminal();
        let term = std::env::var("TERM").ok();
        Self {
            ansi_capable: is_tty && term_is_ansi_capable(term.as_deref()),
        }
    }

    /// Builds a status line with an explicit capability flag, for testing.
    #[must_use]
    pub fn with_capability(ansi_capable: bool) -> Self {
        Self { ansi_capable }
    }

    /// Overwrites the current line with `message`, or appends a newline-
    /// terminated line when ANSI rendering is unavailable.
    pub fn update(&self, message: &str) {
        let mut out = io::stdout();
        if self.ansi_capable {
            let _ = write!(out, "\r\x1b[7m{message}\x1b[0m\x1b[K");
        } else {
            let _ = writeln!(out, "{message}");
        }
        let _ = out.flush();
    }

    /// Clears the live status line, restoring plain text attributes.
    pub fn clear(&self) {
        if self.ansi_capable {
            let mut out = io::stdout();
            let _ = write!(out, "\r\x1b[0m\x1b[K");
            let _ = out.flush();
        }
    }

    /// Renders a fixed progress banner below the scrolling log output, used
    /// at verbosity ≥ 1 with `--stats` (instead of overwriting a single line).
    pub fn bottom_banner(&self, message: &str) {
        let mut out = io::stdout();
        let _ = writeln!(out, "\x1b[7m[PROGRESS] {message}\x1b[0m");
        let _ = out.flush();
    }
}
