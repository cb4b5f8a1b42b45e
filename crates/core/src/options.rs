//! Configuration consumed by every other component (spec.md §3 "Options").
//!
//! [`Options`] is immutable once built; [`OptionsBuilder`] mirrors the
//! validate-then-freeze split the teacher uses between a CLI-facing config
//! builder and the runtime config the engine actually reads, so flag
//! validation (spec.md §6) happens once, before any filesystem access.

use std::path::{Path, PathBuf};

/// Linking strategy used when a reference match is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Always copy source bytes even when a reference match exists.
    #[default]
    None,
    /// Hard-link to the matched reference file.
    Hard,
    /// Symlink to the matched reference file.
    Symbolic,
}

/// Which file attributes to carry from source to destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preserve {
    /// Preserve the source file's mode bits.
    pub mode: bool,
    /// Preserve the source file's uid/gid.
    pub ownership: bool,
    /// Preserve the source file's atime/mtime.
    pub timestamps: bool,
}

impl Preserve {
    /// An empty preservation set (the default when `-p`/`--preserve` is absent).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// `mode`, `ownership`, and `timestamps` all enabled (`-p` or `--preserve=all`).
    #[must_use]
    pub fn all() -> Self {
        Self {
            mode: true,
            ownership: true,
            timestamps: true,
        }
    }

    /// Parses the comma-separated `--preserve` argument (`mode`, `ownership`,
    /// `timestamps`, `all`). An empty list means "preserve nothing", matching
    /// `--preserve` with no value being rejected upstream by clap rather than
    /// silently becoming `all`.
    pub fn parse_list(list: &str) -> Result<Self, UsageError> {
        let mut preserve = Preserve::none();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "mode" => preserve.mode = true,
                "ownership" => preserve.ownership = true,
                "timestamps" => preserve.timestamps = true,
                "all" => preserve = Preserve::all(),
                other => return Err(UsageError::UnknownPreserveAttribute(other.to_string())),
            }
        }
        Ok(preserve)
    }

    /// Whether any attribute is selected.
    #[must_use]
    pub fn any(self) -> bool {
        self.mode || self.ownership || self.timestamps
    }
}

/// Frozen, validated configuration for a single `cpdd` run.
#[derive(Clone, Debug)]
pub struct Options {
    /// Ordered source paths (files or directories).
    pub sources: Vec<PathBuf>,
    /// Destination path (file or directory).
    pub destination: PathBuf,
    /// Ordered reference roots consulted for dedup matches.
    pub ref_dirs: Vec<PathBuf>,
    /// Linking strategy for matched reference files.
    pub link_mode: LinkMode,
    /// Whether to descend into source directories.
    pub recursive: bool,
    /// Skip existing destination entries instead of overwriting.
    pub no_clobber: bool,
    /// Prompt before overwriting an existing destination entry.
    pub interactive: bool,
    /// Attributes to carry from source to destination.
    pub preserve: Preserve,
    /// Verbosity level, 0–3.
    pub verbose: u8,
    /// Print statistics on exit.
    pub show_stats: bool,
    /// Format byte counts with SI suffixes.
    pub human_readable: bool,
}

/// Builder that performs spec.md §6's validation before producing [`Options`].
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    sources: Vec<PathBuf>,
    destination: Option<PathBuf>,
    ref_dirs: Vec<PathBuf>,
    link_mode: Option<LinkMode>,
    recursive: bool,
    no_clobber: bool,
    interactive: bool,
    preserve: Preserve,
    verbose: u8,
    show_stats: bool,
    human_readable: bool,
}

/// Errors produced while validating command-line flags into [`Options`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    /// No source path was given.
    #[error("at least one source is required")]
    NoSources,
    /// No destination path was given.
    #[error("a destination is required")]
    NoDestination,
    /// `-L`/`--hard-link` and `-s`/`--symbolic-link` were both given.
    #[error("--hard-link and --symbolic-link are mutually exclusive")]
    ConflictingLinkModes,
    /// `-n`/`--no-clobber` and `-i`/`--interactive` were both given.
    #[error("--no-clobber and --interactive are mutually exclusive")]
    ConflictingOverwritePolicy,
    /// A link mode was requested without any `-r`/`--reference` root.
    #[error("--hard-link/--symbolic-link requires at least one --reference")]
    LinkModeWithoutReference,
    /// An unrecognized token in a `--preserve` list.
    #[error("unknown --preserve attribute: {0}")]
    UnknownPreserveAttribute(String),
}

impl OptionsBuilder {
    /// Appends a source path.
    pub fn source(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.sources.push(path.into());
        self
    }

    /// Sets the destination path.
    pub fn destination(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.destination = Some(path.into());
        self
    }

    /// Appends a reference root.
    pub fn ref_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.ref_dirs.push(path.into());
        self
    }

    /// Requests hard-link mode.
    pub fn hard_link(&mut self) -> &mut Self {
        self.link_mode = Some(LinkMode::Hard);
        self
    }

    /// Requests symlink mode.
    pub fn symbolic_link(&mut self) -> &mut Self {
        self.link_mode = Some(LinkMode::Symbolic);
        self
    }

    /// Enables recursive directory descent.
    pub fn recursive(&mut self, value: bool) -> &mut Self {
        self.recursive = value;
        self
    }

    /// Enables `--no-clobber`.
    pub fn no_clobber(&mut self, value: bool) -> &mut Self {
        self.no_clobber = value;
        self
    }

    /// Enables `--interactive`.
    pub fn interactive(&mut self, value: bool) -> &mut Self {
        self.interactive = value;
        self
    }

    /// Sets the attribute-preservation set.
    pub fn preserve(&mut self, preserve: Preserve) -> &mut Self {
        self.preserve = preserve;
        self
    }

    /// Sets the verbosity level (clamped to 0–3).
    pub fn verbose(&mut self, level: u8) -> &mut Self {
        self.verbose = level.min(3);
        self
    }

    /// Enables `--stats`.
    pub fn show_stats(&mut self, value: bool) -> &mut Self {
        self.show_stats = value;
        self
    }

    /// Enables `--human-readable`.
    pub fn human_readable(&mut self, value: bool) -> &mut Self {
        self.human_readable = value;
        self
    }

    /// Validates accumulated flags and produces an immutable [`Options`].
    pub fn build(self) -> Result<Options, UsageError> {
        if self.sources.is_empty() {
            return Err(UsageError::NoSources);
        }
        let destination = self.destination.ok_or(UsageError::NoDestination)?;
        if self.no_clobber && self.interactive {
            return Err(UsageError::ConflictingOverwritePolicy);
        }

        let link_mode = match self.link_mode {
            Some(mode) => mode,
            None if !self.ref_dirs.is_empty() => LinkMode::Hard,
            None => LinkMode::None,
        };
        if link_mode != LinkMode::None && self.ref_dirs.is_empty() {
            return Err(UsageError::LinkModeWithoutReference);
        }

        Ok(Options {
            sources: self.sources,
            destination,
            ref_dirs: self.ref_dirs,
            link_mode,
            recursive: self.recursive,
            no_clobber: self.no_clobber,
            interactive: self.interactive,
            preserve: self.preserve,
            verbose: self.verbose,
            show_stats: self.show_stats,
            human_readable: self.human_readable,
        })
    }
}

/// Returns the destination path for `source` given the run's destination
/// disposition (spec.md §4.6), without touching the filesystem.
#[must_use]
pub fn resolve_destination(source: &Path, destination: &Path, dest_is_dir: bool) -> PathBuf {
    if dest_is_dir {
        let basename = source.file_name().unwrap_or(source.as_os_str());
        destination.join(basename)
    } else {
        destination.to_path_buf()
    }
}
