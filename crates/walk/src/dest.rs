//! Destination disposition (spec.md §4.6): deciding up front whether the
//! destination is a directory each source nests under, or a single target
//! path.

use std::fs;
use std::path::Path;

use cpdd_core::{Options, Preserve};

use crate::error::WalkError;

/// Resolves whether `opts.destination` should be treated as a directory
/// (each source placed at `destination/basename(source)`), creating it on
/// demand if multiple sources require it.
pub(crate) fn dest_is_dir(opts: &Options) -> Result<bool, WalkError> {
    match fs::metadata(&opts.destination) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => {
            // Exists and is not a directory: a regular file or other special
            // entry. Multiple sources can never converge on one file.
            if opts.sources.len() > 1 {
                Err(WalkError::DestinationConflict(opts.destination.clone()))
            } else {
                Ok(false)
            }
        }
        Err(_) => {
            if opts.sources.len() > 1 {
                fs::create_dir_all(&opts.destination).map_err(|source| {
                    WalkError::CreateDestinationRoot {
                        path: opts.destination.clone(),
                        source,
                    }
                })?;
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }
}

/// Creates `dest` as a directory, tolerating it already existing, carries
/// over `src`'s mode bits, and optionally applies full attribute
/// preservation.
pub(crate) fn create_destination_dir(src: &Path, dest: &Path, preserve: &Preserve) {
    if let Err(err) = fs::create_dir(dest) {
        if err.kind() != std::io::ErrorKind::AlreadyExists {
            tracing::warn!(dest = %dest.display(), error = %err, "cannot create destination directory");
            return;
        }
    }

    if let Ok(src_meta) = fs::metadata(src) {
        apply_dir_mode(dest, &src_meta);
    }

    if preserve.any() {
        if let Err(err) = cpdd_metadata::preserve_attributes(src, dest, preserve) {
            tracing::warn!(dest = %dest.display(), error = %err, "failed to preserve directory attributes");
        }
    }
}

#[cfg(unix)]
fn apply_dir_mode(dest: &Path, src_meta: &fs::Metadata) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(dest, fs::Permissions::from_mode(src_meta.permissions().mode()));
}

#[cfg(not(unix))]
fn apply_dir_mode(_dest: &Path, _src_meta: &fs::Metadata) {}
