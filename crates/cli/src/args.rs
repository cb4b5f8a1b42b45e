//! Raw command-line surface (spec.md §6's flag table), kept deliberately
//! separate from [`cpdd_core::Options`] — clap owns the untrusted input
//! shape, [`cpdd_core::OptionsBuilder`] owns validated runtime config.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// `cpdd [OPTIONS] SOURCE... DESTINATION`
#[derive(Parser, Debug)]
#[command(
    name = "cpdd",
    about = "Content-aware file copier with reference-tree deduplication",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct RawArgs {
    /// Source paths followed by the destination path (at least two entries:
    /// one source and the destination).
    #[arg(value_name = "PATH", required = true, num_args = 2..)]
    pub paths: Vec<PathBuf>,

    /// Add a reference root consulted for dedup matches.
    #[arg(short = 'r', long = "reference", value_name = "DIR")]
    pub reference: Vec<PathBuf>,

    /// Force hard-link mode when a reference match is found.
    #[arg(short = 'L', long = "hard-link", conflicts_with = "symbolic_link")]
    pub hard_link: bool,

    /// Force symlink mode when a reference match is found.
    #[arg(short = 's', long = "symbolic-link")]
    pub symbolic_link: bool,

    /// Descend into source directories.
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Never overwrite an existing destination entry.
    #[arg(short = 'n', long = "no-clobber", conflicts_with = "interactive")]
    pub no_clobber: bool,

    /// Prompt before overwriting an existing destination entry.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Preserve mode, ownership, and timestamps (shorthand for
    /// `--preserve=all`).
    #[arg(short = 'p')]
    pub preserve_all: bool,

    /// Preserve a specific comma-separated attribute list (`mode`,
    /// `ownership`, `timestamps`, `all`). Bare `--preserve` means `all`.
    #[arg(long = "preserve", value_name = "LIST", num_args = 0..=1, default_missing_value = "all")]
    pub preserve: Option<String>,

    /// Print statistics on exit.
    #[arg(long = "stats")]
    pub stats: bool,

    /// Format byte counts with binary SI suffixes.
    #[arg(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// Increase verbosity; repeatable up to three times.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print usage and exit.
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl RawArgs {
    /// Splits `paths` into the ordered sources and the trailing destination.
    ///
    /// `clap`'s `num_args = 2..` guarantees at least two entries, so the
    /// split point always exists.
    #[must_use]
    pub fn sources_and_destination(&self) -> (&[PathBuf], &PathBuf) {
        let (destination, sources) = self
            .paths
            .split_last()
            .expect("num_args = 2.. guarantees a non-empty tail");
        (sources, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trailing_destination_from_leading_sources() {
        let args = RawArgs::try_parse_from(["cpdd", "a", "b", "dest"]).unwrap();
        let (sources, destination) = args.sources_and_destination();
        assert_eq!(sources, [PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(destination, &PathBuf::from("dest"));
    }

    #[test]
    fn hard_link_and_symbolic_link_are_mutually_exclusive() {
        let err = RawArgs::try_parse_from(["cpdd", "-L", "-s", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn no_clobber_and_interactive_are_mutually_exclusive() {
        let err = RawArgs::try_parse_from(["cpdd", "-n", "-i", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn a_single_path_is_rejected_as_too_few_arguments() {
        let err = RawArgs::try_parse_from(["cpdd", "only-one"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::TooFewValues);
    }

    #[test]
    fn bare_preserve_flag_defaults_to_all() {
        let args = RawArgs::try_parse_from(["cpdd", "--preserve", "a", "b"]).unwrap();
        assert_eq!(args.preserve, Some("all".to_string()));
    }

    #[test]
    fn verbose_is_repeatable_and_counts() {
        let args = RawArgs::try_parse_from(["cpdd", "-vvv", "a", "b"]).unwrap();
        assert_eq!(args.verbose, 3);
    }
}
