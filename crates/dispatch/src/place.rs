//! `place_file`: the full per-source-file decision sequence (spec.md §4.5).

use std::fs;
use std::path::Path;

use cpdd_core::{LinkMode, Options, Stats};
use cpdd_metadata::preserve_attributes;

use crate::copy::copy_bytes;
use crate::error::DispatchError;
use crate::overwrite::{should_proceed, OverwritePrompt};

/// Places one source file at `dest`, consulting the overwrite policy, the
/// reference match (if any), and the attribute-preservation settings.
///
/// `src` having already been confirmed a regular file is the caller's (C6's)
/// responsibility to check before invoking the match engine; this function
/// re-checks defensively and skips silently if it is not.
pub fn place_file(
    src: &Path,
    dest: &Path,
    matched_ref: Option<&Path>,
    opts: &Options,
    stats: &mut Stats,
    prompt: &mut dyn OverwritePrompt,
) -> Result<(), DispatchError> {
    let src_meta = fs::symlink_metadata(src).map_err(|source| DispatchError::Stat {
        path: src.to_path_buf(),
        source,
    })?;
    if !src_meta.is_file() {
        return Ok(());
    }

    if !should_proceed(dest, opts.no_clobber, opts.interactive, prompt) {
        stats.record_skip();
        return Ok(());
    }

    if let Some(ref_path) = matched_ref.filter(|_| opts.link_mode != LinkMode::None) {
        if dest.exists() {
            fs::remove_file(dest).map_err(|source| DispatchError::RemoveExisting {
                path: dest.to_path_buf(),
                source,
            })?;
        }

        match opts.link_mode {
            LinkMode::Hard => match fs::hard_link(ref_path, dest) {
                Ok(()) => {
                    stats.record_hard_link(src_meta.len());
                    log_placement(opts.verbose, dest, "hard-linked", Some(ref_path));
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(dest = %dest.display(), reference = %ref_path.display(), error = %err, "hard link failed, falling back to copy");
                }
            },
            LinkMode::Symbolic => match symlink(ref_path, dest) {
                Ok(()) => {
                    stats.record_soft_link(src_meta.len());
                    log_placement(opts.verbose, dest, "soft-linked", Some(ref_path));
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(dest = %dest.display(), reference = %ref_path.display(), error = %err, "symlink failed, falling back to copy");
                }
            },
            LinkMode::None => unreachable!("filtered above"),
        }
    }

    let mode = file_mode(&src_meta);
    copy_bytes(src, dest, mode)?;

    if opts.preserve.any() {
        if let Err(err) = preserve_attributes(src, dest, &opts.preserve) {
            tracing::warn!(dest = %dest.display(), error = %err, "failed to preserve attributes");
        }
    }

    stats.record_copy(src_meta.len());
    log_placement(opts.verbose, dest, "copied", None);
    Ok(())
}

fn log_placement(verbose: u8, dest: &Path, action: &str, reference: Option<&Path>) {
    if verbose == 0 {
        return;
    }
    match reference {
        Some(reference) => {
            tracing::info!(dest = %dest.display(), reference = %reference.display(), "{action}");
        }
        None => tracing::info!(dest = %dest.display(), "{action}"),
    }
}

#[cfg(unix)]
fn file_mode(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn file_mode(_meta: &fs::Metadata) -> u32 {
    0o644
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(not(unix))]
fn symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}
