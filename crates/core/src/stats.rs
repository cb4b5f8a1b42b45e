//! Cumulative run statistics (spec.md §3 "Stats").
//!
//! A single-threaded counter struct passed by mutable reference; no locking
//! is required since the whole engine runs on one thread (spec.md §5).
//! Formatting mirrors the original `copy.c`'s `format_bytes`,
//! `format_stats_line`, and `print_statistics`, kept here as three distinct
//! renderers (a compact live line, a one-line summary, and a multi-line
//! final report) rather than collapsed into one.

use std::fmt::Write as _;

/// Cumulative counters for one `cpdd` invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Files physically copied.
    pub files_copied: u64,
    /// Files hard-linked to a reference match.
    pub files_hard_linked: u64,
    /// Files symlinked to a reference match.
    pub files_soft_linked: u64,
    /// Files skipped (`--no-clobber` or declined `--interactive` prompt).
    pub files_skipped: u64,
    /// Bytes physically copied.
    pub bytes_copied: u64,
    /// Bytes "saved" by hard-linking instead of copying.
    pub bytes_hard_linked: u64,
    /// Bytes "saved" by symlinking instead of copying.
    pub bytes_soft_linked: u64,
}

impl Stats {
    /// Total files that received any disposition (copied, linked, or skipped).
    #[must_use]
    pub fn total_files(&self) -> u64 {
        self.files_copied + self.files_hard_linked + self.files_soft_linked + self.files_skipped
    }

    /// Total bytes attributed to copied or linked files (skipped files
    /// contribute no bytes, matching the original `format_stats_line`).
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes_copied + self.bytes_hard_linked + self.bytes_soft_linked
    }

    pub fn record_copy(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }

    pub fn record_hard_link(&mut self, bytes: u64) {
        self.files_hard_linked += 1;
        self.bytes_hard_linked += bytes;
    }

    pub fn record_soft_link(&mut self, bytes: u64) {
        self.files_soft_linked += 1;
        self.bytes_soft_linked += bytes;
    }

    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    /// A compact single line, used for the live status-line update at
    /// verbosity 0 with `--stats` active.
    #[must_use]
    pub fn summary_line(&self, human_readable: bool) -> String {
        format!(
            "Files: {} copied, {} linked, {} skipped | Total: {} files ({})",
            self.files_copied,
            self.files_hard_linked + self.files_soft_linked,
            self.files_skipped,
            self.total_files(),
            format_bytes(self.total_bytes(), human_readable)
        )
    }

    /// The multi-line end-of-run report (`--stats` without `--verbose`, or
    /// always at process exit when `--stats` is set).
    #[must_use]
    pub fn report(&self, human_readable: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Statistics:");
        let _ = writeln!(
            out,
            "  Files copied:      {} ({})",
            self.files_copied,
            format_bytes(self.bytes_copied, human_readable)
        );
        let _ = writeln!(
            out,
            "  Files hard linked: {} ({})",
            self.files_hard_linked,
            format_bytes(self.bytes_hard_linked, human_readable)
        );
        let _ = writeln!(
            out,
            "  Files soft linked: {} ({})",
            self.files_soft_linked,
            format_bytes(self.bytes_soft_linked, human_readable)
        );
        let _ = writeln!(out, "  Files skipped:     {}", self.files_skipped);
        let _ = writeln!(
            out,
            "  Total files:       {} ({})",
            self.total_files(),
            format_bytes(self.total_bytes(), human_readable)
        );
        out
    }
}

/// Formats a byte count, optionally with SI-ish binary suffixes
/// (`B`/`K`/`M`/`G`/`T`/`P`), matching the original `format_bytes`'s
/// precision tiers (no decimals ≥100, one decimal ≥10, two decimals below).
#[must_use]
pub fn format_bytes(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return bytes.to_string();
    }
    const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];
    let mut size = bytes as f64;
    let mut unit = 0usize;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}{}", UNITS[unit])
    } else if size >= 100.0 {
        format!("{size:.0}{}", UNITS[unit])
    } else if size >= 10.0 {
        format!("{size:.1}{}", UNITS[unit])
    } else {
        format!("{size:.2}{}", UNITS[unit])
    }
}
