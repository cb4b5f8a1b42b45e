use std::fs;
use std::path::Path;

use cpdd_core::Preserve;
use filetime::FileTime;

use crate::error::MetadataError;

/// Applies `preserve`'s selected attributes from `src` to `dest`.
///
/// Each requested attribute is attempted independently — a failure setting
/// the mode does not prevent timestamps from still being applied. If more
/// than one attribute fails, the first failure (mode, then ownership, then
/// timestamps) is the one returned.
pub fn preserve_attributes(src: &Path, dest: &Path, preserve: &Preserve) -> Result<(), MetadataError> {
    if !preserve.any() {
        return Ok(());
    }

    let metadata = fs::metadata(src).map_err(|source| MetadataError::Stat {
        path: src.to_path_buf(),
        source,
    })?;

    let mut first_err = None;

    if preserve.mode {
        if let Err(err) = set_mode(dest, &metadata) {
            first_err.get_or_insert(err);
        }
    }
    if preserve.ownership {
        if let Err(err) = set_ownership(dest, &metadata) {
            first_err.get_or_insert(err);
        }
    }
    if preserve.timestamps {
        if let Err(err) = set_timestamps(dest, &metadata) {
            first_err.get_or_insert(err);
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn set_mode(dest: &Path, metadata: &fs::Metadata) -> Result<(), MetadataError> {
    fs::set_permissions(dest, metadata.permissions()).map_err(|source| MetadataError::SetMode {
        path: dest.to_path_buf(),
        source,
    })
}

fn set_timestamps(dest: &Path, metadata: &fs::Metadata) -> Result<(), MetadataError> {
    let atime = FileTime::from_last_access_time(metadata);
    let mtime = FileTime::from_last_modification_time(metadata);
    filetime::set_file_times(dest, atime, mtime).map_err(|source| MetadataError::SetTimestamps {
        path: dest.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_ownership(dest: &Path, metadata: &fs::Metadata) -> Result<(), MetadataError> {
    use std::os::unix::fs::MetadataExt;

    let uid = rustix::fs::Uid::from_raw(metadata.uid());
    let gid = rustix::fs::Gid::from_raw(metadata.gid());
    rustix::fs::chown(dest, Some(uid), Some(gid)).map_err(|source| MetadataError::SetOwnership {
        path: dest.to_path_buf(),
        source: source.into(),
    })
}

#[cfg(not(unix))]
fn set_ownership(_dest: &Path, _metadata: &fs::Metadata) -> Result<(), MetadataError> {
    Err(MetadataError::UnsupportedOnPlatform {
        operation: "ownership preservation",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn preserving_nothing_is_a_no_op_even_without_dest_existing() {
        let src = tempdir().unwrap().path().join("never-created-src");
        let dest = Path::new("/nonexistent/dest/for/nothing");
        assert!(preserve_attributes(&src, dest, &Preserve::none()).is_ok());
    }

    #[test]
    fn timestamps_are_copied_from_source_to_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        File::create(&src).unwrap().write_all(b"source").unwrap();
        File::create(&dest).unwrap().write_all(b"dest").unwrap();

        let old_time = FileTime::from_unix_time(1_000_000, 0);
        filetime::set_file_times(&src, old_time, old_time).unwrap();

        let preserve = Preserve {
            mode: false,
            ownership: false,
            timestamps: true,
        };
        preserve_attributes(&src, &dest, &preserve).unwrap();

        let dest_meta = fs::metadata(&dest).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&dest_meta), old_time);
    }

    #[cfg(unix)]
    #[test]
    fn mode_bits_are_copied_from_source_to_destination() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        File::create(&src).unwrap();
        File::create(&dest).unwrap();

        fs::set_permissions(&src, fs::Permissions::from_mode(0o640)).unwrap();

        let preserve = Preserve {
            mode: true,
            ownership: false,
            timestamps: false,
        };
        preserve_attributes(&src, &dest, &preserve).unwrap();

        let dest_mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(dest_mode, 0o640);
    }

    #[test]
    fn a_missing_source_reports_a_stat_failure() {
        let missing = Path::new("/nonexistent/cpdd/metadata/src");
        let dest = tempdir().unwrap().path().join("dest");
        let err = preserve_attributes(missing, &dest, &Preserve::all()).unwrap_err();
        assert!(matches!(err, MetadataError::Stat { .. }));
    }
}
