//! Entry point wiring: parse, validate, log, run, report, exit.
//!
//! Grounded on the teacher's `rsync_cli::run(args, &mut stdout, &mut
//! stderr) -> exit_code` shape — the binary itself is a thin wrapper calling
//! this function with `std::env::args_os()` and the real stdio streams, so
//! integration tests can instead pass captured buffers.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use cpdd_core::{ExitCode, OptionsBuilder, Preserve, UsageError};
use cpdd_walk::StdinPrompt;

use crate::args::RawArgs;

/// Parses `args`, runs the copy, and returns the process exit code.
///
/// `stdout` receives the `--stats` report; `stderr` receives usage errors
/// and clap's own `--help` text (clap's convention, kept here rather than
/// split across both streams).
pub fn run<I, T>(args: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = match RawArgs::try_parse_from(args) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() == clap::error::ErrorKind::DisplayHelp
                || err.kind() == clap::error::ErrorKind::DisplayVersion
            {
                let _ = write!(stdout, "{err}");
                return ExitCode::Ok.as_i32();
            }
            let _ = write!(stderr, "{err}");
            return ExitCode::Usage.as_i32();
        }
    };

    let opts = match build_options(&raw) {
        Ok(opts) => opts,
        Err(err) => {
            let _ = writeln!(stderr, "cpdd: {err}");
            return ExitCode::Usage.as_i32();
        }
    };

    cpdd_logging::init(opts.verbose);
    if let Err(err) = cpdd_core::signal::install_signal_handlers() {
        tracing::warn!(error = %err, "failed to install signal handlers; Ctrl-C cleanup disabled");
    }

    let mut prompt = StdinPrompt;
    let outcome = match cpdd_walk::run(&opts, &mut prompt) {
        Ok(outcome) => outcome,
        Err(err) => {
            let _ = writeln!(stderr, "cpdd: {err}");
            return ExitCode::FatalSetup.as_i32();
        }
    };

    if opts.show_stats {
        let _ = write!(stdout, "{}", outcome.stats.report(opts.human_readable));
    }

    if outcome.had_errors {
        ExitCode::PartialFailure.as_i32()
    } else {
        ExitCode::Ok.as_i32()
    }
}

fn build_options(raw: &RawArgs) -> Result<cpdd_core::Options, UsageError> {
    if raw.hard_link && raw.symbolic_link {
        return Err(UsageError::ConflictingLinkModes);
    }
    if raw.no_clobber && raw.interactive {
        return Err(UsageError::ConflictingOverwritePolicy);
    }

    let (sources, destination) = raw.sources_and_destination();

    let mut builder = OptionsBuilder::default();
    for source in sources {
        builder.source(source.clone());
    }
    builder.destination(destination.clone());
    for reference in &raw.reference {
        builder.ref_dir(reference.clone());
    }
    if raw.hard_link {
        builder.hard_link();
    } else if raw.symbolic_link {
        builder.symbolic_link();
    }

    let preserve = match &raw.preserve {
        Some(list) => Preserve::parse_list(list)?,
        None if raw.preserve_all => Preserve::all(),
        None => Preserve::none(),
    };

    builder
        .recursive(raw.recursive)
        .no_clobber(raw.no_clobber)
        .interactive(raw.interactive)
        .preserve(preserve)
        .verbose(raw.verbose)
        .show_stats(raw.stats)
        .human_readable(raw.human_readable);

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_cli(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut full = vec!["cpdd".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        let code = run(full, &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn copies_a_single_file_and_exits_zero() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, b"hello").unwrap();

        let (code, _out, _err) = run_cli(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
        assert_eq!(code, 0);
        assert_eq!(fs::read(&dest).unwrap(), b"hello");
    }

    #[test]
    fn too_few_arguments_is_a_usage_error() {
        let (code, _out, err) = run_cli(&["only-one"]);
        assert_eq!(code, 1);
        assert!(!err.is_empty());
    }

    #[test]
    fn conflicting_link_flags_is_a_usage_error() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, b"hello").unwrap();

        let (code, _out, err) = run_cli(&[
            "-L",
            "-s",
            "-r",
            dir.path().to_str().unwrap(),
            src.to_str().unwrap(),
            dest.to_str().unwrap(),
        ]);
        assert_eq!(code, 1);
        assert!(!err.is_empty());
    }

    #[test]
    fn stats_flag_prints_a_report_to_stdout() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, b"hello").unwrap();

        let (code, out, _err) =
            run_cli(&["--stats", src.to_str().unwrap(), dest.to_str().unwrap()]);
        assert_eq!(code, 0);
        assert!(out.contains("Statistics:"));
    }

    #[test]
    fn help_flag_prints_usage_to_stdout_and_exits_zero() {
        let (code, out, _err) = run_cli(&["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("cpdd"));
    }
}
