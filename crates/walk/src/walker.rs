//! The tree walker (C6): recursively descends source(s), mirrors
//! directories, and feeds regular files to the match engine and dispatcher.

use std::fs;
use std::path::Path;

use cpdd_core::{resolve_destination, Options, Stats, StatusLine};
use cpdd_dispatch::{place_file, OverwritePrompt};
use cpdd_matchengine::find_match;
use cpdd_refindex::{build_index, RefIndex};

use crate::dest::{create_destination_dir, dest_is_dir};
use crate::error::WalkError;

/// Result of a full run: final statistics plus whether any entry failed.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub stats: Stats,
    pub had_errors: bool,
}

/// Runs the whole copy: builds the reference catalog once, then walks every
/// source in argument order.
///
/// When `opts.show_stats` is set, a live [`StatusLine`] is updated after
/// every placed file — a carriage-return overwrite at verbosity 0, or a
/// scrolling banner underneath log output at verbosity ≥ 1 — mirroring the
/// two renderers the original `copy.c` kept side by side.
pub fn run(opts: &Options, prompt: &mut dyn OverwritePrompt) -> Result<WalkOutcome, WalkError> {
    let treat_dest_as_dir = dest_is_dir(opts)?;
    let mut index = build_index(&opts.ref_dirs);
    let status = opts.show_stats.then(StatusLine::for_stdout);

    let mut outcome = WalkOutcome::default();
    for source in &opts.sources {
        let dest = resolve_destination(source, &opts.destination, treat_dest_as_dir);
        process_entry(
            source,
            &dest,
            &mut index,
            opts,
            prompt,
            status.as_ref(),
            &mut outcome,
        );
    }
    if let Some(status) = &status {
        status.clear();
    }
    Ok(outcome)
}

fn process_entry(
    src: &Path,
    dest: &Path,
    index: &mut RefIndex,
    opts: &Options,
    prompt: &mut dyn OverwritePrompt,
    status: Option<&StatusLine>,
    outcome: &mut WalkOutcome,
) {
    let meta = match fs::symlink_metadata(src) {
        Ok(meta) => meta,
        Err(err) => {
            tracing::warn!(path = %src.display(), error = %err, "cannot stat source entry");
            outcome.had_errors = true;
            return;
        }
    };

    if meta.file_type().is_symlink() {
        tracing::trace!(path = %src.display(), "skipping symlink in source tree");
        return;
    }

    if meta.is_dir() {
        process_directory(src, dest, index, opts, prompt, status, outcome);
    } else if meta.is_file() {
        process_file(src, dest, index, opts, prompt, status, outcome);
    } else {
        tracing::warn!(path = %src.display(), "skipping special file");
    }
}

fn process_directory(
    src: &Path,
    dest: &Path,
    index: &mut RefIndex,
    opts: &Options,
    prompt: &mut dyn OverwritePrompt,
    status: Option<&StatusLine>,
    outcome: &mut WalkOutcome,
) {
    if !opts.recursive {
        tracing::warn!(path = %src.display(), "omitting directory (recursive descent not enabled)");
        return;
    }

    create_destination_dir(src, dest, &opts.preserve);

    let read_dir = match fs::read_dir(src) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            tracing::warn!(path = %src.display(), error = %err, "cannot open source directory");
            outcome.had_errors = true;
            return;
        }
    };

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(path = %src.display(), error = %err, "cannot read directory entry");
                outcome.had_errors = true;
                continue;
            }
        };
        let child_src = entry.path();
        let child_dest = dest.join(entry.file_name());
        process_entry(
            &child_src,
            &child_dest,
            index,
            opts,
            prompt,
            status,
            outcome,
        );
    }
}

fn process_file(
    src: &Path,
    dest: &Path,
    index: &mut RefIndex,
    opts: &Options,
    prompt: &mut dyn OverwritePrompt,
    status: Option<&StatusLine>,
    outcome: &mut WalkOutcome,
) {
    if let Some(parent) = dest.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), error = %err, "cannot create destination parent directory");
            outcome.had_errors = true;
            return;
        }
    }

    let matched = find_match(index, src);
    let result = place_file(
        src,
        dest,
        matched.as_deref(),
        opts,
        &mut outcome.stats,
        prompt,
    );
    if let Err(err) = result {
        tracing::warn!(path = %src.display(), dest = %dest.display(), error = %err, "failed to place file");
        outcome.had_errors = true;
        return;
    }

    if let Some(status) = status {
        let line = outcome.stats.summary_line(opts.human_readable);
        if opts.verbose >= 1 {
            status.bottom_banner(&line);
        } else {
            status.update(&line);
        }
    }
}
