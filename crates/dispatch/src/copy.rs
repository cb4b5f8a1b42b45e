//! Raw byte copy path used when no reference link applies (spec.md §4.5
//! step 4): open, stream in chunks, abort and unlink on any short write.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use cpdd_core::signal::CleanupManager;

use crate::error::DispatchError;

const CHUNK_SIZE: usize = 32 * 1024;

/// Copies `src` to `dest`, creating `dest` with `mode` (on unix) truncated to
/// empty first. On any short write, `dest` is unlinked before returning an
/// error — a partial destination is worse than none.
///
/// `dest` is registered with the process-wide [`CleanupManager`] for the
/// duration of the write so a SIGINT/SIGTERM/SIGHUP during a large copy
/// unlinks the partial file instead of leaving it behind.
pub fn copy_bytes(src: &Path, dest: &Path, mode: u32) -> Result<u64, DispatchError> {
    let mut source = File::open(src).map_err(|source| DispatchError::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    let mut destination = create_destination(dest, mode)?;
    let cleanup = CleanupManager::global();
    cleanup.register_incomplete(dest);

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let read = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(source) => {
                let _ = fs::remove_file(dest);
                cleanup.unregister_incomplete();
                return Err(DispatchError::Copy {
                    path: dest.to_path_buf(),
                    source,
                });
            }
        };

        if let Err(source) = destination.write_all(&buf[..read]) {
            let _ = fs::remove_file(dest);
            cleanup.unregister_incomplete();
            return Err(DispatchError::Copy {
                path: dest.to_path_buf(),
                source,
            });
        }
        total += read as u64;
    }

    cleanup.unregister_incomplete();
    Ok(total)
}

#[cfg(unix)]
fn create_destination(dest: &Path, mode: u32) -> Result<File, DispatchError> {
    use std::os::unix::fs::OpenOptionsExt;

    File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(dest)
        .map_err(|source| DispatchError::CreateDestination {
            path: dest.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
fn create_destination(dest: &Path, _mode: u32) -> Result<File, DispatchError> {
    File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dest)
        .map_err(|source| DispatchError::CreateDestination {
            path: dest.to_path_buf(),
            source,
        })
}
