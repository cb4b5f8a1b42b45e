//! Recursive enumeration of reference roots into a flat [`RefEntry`] list
//! (spec.md §4.3, build protocol steps 1–4).

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::RefEntry;
use crate::index::RefIndex;

/// Walks every `ref_dir` in order and returns the finished catalog.
///
/// Individual unreadable entries are skipped with a warning rather than
/// aborting the build; a root that cannot be opened at all contributes zero
/// entries and the remaining roots are still scanned.
#[must_use]
pub fn build_index(ref_dirs: &[PathBuf]) -> RefIndex {
    let mut entries = Vec::new();
    for root in ref_dirs {
        collect(root, &mut entries);
    }
    RefIndex::from_entries(entries)
}

fn collect(dir: &Path, out: &mut Vec<RefEntry>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            tracing::warn!(path = %dir.display(), error = %err, "cannot open reference directory");
            return;
        }
    };

    for item in read_dir {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "cannot read directory entry");
                continue;
            }
        };
        let path = item.path();

        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot stat reference entry");
                continue;
            }
        };

        if metadata.is_dir() {
            collect(&path, out);
        } else if metadata.file_type().is_symlink() {
            tracing::trace!(path = %path.display(), "skipping symlink in reference tree");
        } else if metadata.is_file() {
            tracing::trace!(path = %path.display(), size = metadata.len(), "adding reference file");
            out.push(RefEntry::new(path, metadata.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[cfg(unix)]
    use std::os::unix::fs::symlink;

    #[test]
    fn collects_regular_files_recursively_and_skips_symlinks() {
        let root = tempdir().unwrap();
        File::create(root.path().join("top.bin"))
            .unwrap()
            .write_all(b"12345")
            .unwrap();
        let sub = root.path().join("sub");
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("nested.bin"))
            .unwrap()
            .write_all(b"1234567890")
            .unwrap();

        #[cfg(unix)]
        symlink(root.path().join("top.bin"), root.path().join("link.bin")).unwrap();

        let index = build_index(&[root.path().to_path_buf()]);
        assert_eq!(index.len(), 2);

        let mut sizes: Vec<u64> = index.candidates(5).map(RefEntry::size).collect();
        sizes.extend(index.candidates(10).map(RefEntry::size));
        sizes.sort_unstable();
        assert_eq!(sizes, vec![5, 10]);
    }

    #[test]
    fn unreadable_root_contributes_zero_entries_without_aborting() {
        let missing = PathBuf::from("/nonexistent/cpdd/reference/root");
        let index = build_index(&[missing]);
        assert!(index.is_empty());
    }

    #[test]
    fn a_readable_root_still_contributes_after_an_unreadable_one() {
        let missing = PathBuf::from("/nonexistent/cpdd/reference/root");
        let present = tempdir().unwrap();
        File::create(present.path().join("a.bin"))
            .unwrap()
            .write_all(b"x")
            .unwrap();

        let index = build_index(&[missing, present.path().to_path_buf()]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn empty_ref_dirs_list_yields_an_empty_catalog() {
        let index = build_index(&[]);
        assert!(index.is_empty());
    }
}
