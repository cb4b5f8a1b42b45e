//! The match engine (C4): given a source file, find the first reference
//! entry with bit-identical content, reading as little as possible.
//!
//! The byte comparison is always the authority. Digest agreement alone never
//! constitutes a match — it only narrows the candidates that are worth a
//! byte-for-byte read, so correctness never depends on MD5's collision
//! resistance.

#![deny(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cpdd_checksums::{compare_and_digest, digest_file, files_equal, Digest};
use cpdd_refindex::RefIndex;

/// Finds the first entry in `index` whose content is bit-identical to the
/// file at `src_path`, lazily filling in any digests the search requires.
///
/// A `stat` failure on `src_path` is logged and treated as "no match" rather
/// than propagated — a source that cannot even be inspected certainly cannot
/// be matched, and the caller (C6) will surface the real error when it tries
/// to open the file for its own copy.
#[must_use]
pub fn find_match(index: &mut RefIndex, src_path: &Path) -> Option<PathBuf> {
    let src_size = match fs::metadata(src_path) {
        Ok(metadata) => metadata.len(),
        Err(err) => {
            tracing::warn!(path = %src_path.display(), error = %err, "cannot stat source file for matching");
            return None;
        }
    };

    let mut src_digest: Option<Digest> = None;

    for candidate in index.candidates_mut(src_size) {
        if !candidate.needs_digest() {
            if files_equal(src_path, candidate.path()) {
                return Some(candidate.path().to_path_buf());
            }
            continue;
        }

        if !candidate.has_digest() {
            let want_src_digest = src_digest.is_none();
            let result = compare_and_digest(src_path, candidate.path(), want_src_digest, true);
            if let Some(digest) = result.digest_b {
                candidate.set_digest(digest);
            }
            if let Some(digest) = result.digest_a {
                src_digest = Some(digest);
            }
            if result.equal {
                return Some(candidate.path().to_path_buf());
            }
            continue;
        }

        if src_digest.is_none() {
            src_digest = match digest_file(src_path) {
                Ok(digest) => Some(digest),
                Err(err) => {
                    tracing::warn!(path = %src_path.display(), error = %err, "cannot read source file to compute its digest");
                    return None;
                }
            };
        }

        if src_digest.as_ref() != candidate.digest() {
            continue;
        }

        if files_equal(src_path, candidate.path()) {
            return Some(candidate.path().to_path_buf());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpdd_refindex::build_index;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write(path: &Path, contents: &[u8]) {
        File::create(path).unwrap().write_all(contents).unwrap();
    }

    #[test]
    fn size_unique_candidate_matches_without_any_digest() {
        let root = tempdir().unwrap();
        write(&root.path().join("ref_a"), b"unique by size exactly");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let src_dir = tempdir().unwrap();
        let src = src_dir.path().join("src");
        write(&src, b"unique by size exactly");

        let matched = find_match(&mut index, &src).unwrap();
        assert_eq!(matched, root.path().join("ref_a"));
    }

    #[test]
    fn colliding_sizes_are_disambiguated_by_digest_then_byte_compare() {
        let root = tempdir().unwrap();
        write(&root.path().join("same_size_a"), b"AAAAAAAAAA");
        write(&root.path().join("same_size_b"), b"BBBBBBBBBB");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let src_dir = tempdir().unwrap();
        let src = src_dir.path().join("src");
        write(&src, b"BBBBBBBBBB");

        let matched = find_match(&mut index, &src).unwrap();
        assert_eq!(matched, root.path().join("same_size_b"));

        for candidate in index.candidates(10) {
            assert!(candidate.has_digest());
        }
    }

    #[test]
    fn no_candidate_of_matching_size_returns_none_without_hashing() {
        let root = tempdir().unwrap();
        write(&root.path().join("ref_a"), b"twelve bytes");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let src_dir = tempdir().unwrap();
        let src = src_dir.path().join("src");
        write(&src, b"a completely different length altogether");

        assert!(find_match(&mut index, &src).is_none());
        assert!(!index.candidates(12).next().unwrap().has_digest());
    }

    #[test]
    fn two_empty_reference_candidates_are_disambiguated_and_matched() {
        let root = tempdir().unwrap();
        write(&root.path().join("empty_a"), b"");
        write(&root.path().join("empty_b"), b"");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let src_dir = tempdir().unwrap();
        let src = src_dir.path().join("src");
        write(&src, b"");

        let matched = find_match(&mut index, &src);
        assert!(matched.is_some());
    }

    #[test]
    fn same_size_same_digest_different_bytes_is_not_a_false_positive() {
        // Two reference files of equal size; source matches one exactly and
        // must never be matched to the other merely by size/digest collision.
        let root = tempdir().unwrap();
        write(&root.path().join("ref_x"), b"0123456789");
        write(&root.path().join("ref_y"), b"9876543210");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let src_dir = tempdir().unwrap();
        let src = src_dir.path().join("src");
        write(&src, b"0123456789");

        let matched = find_match(&mut index, &src).unwrap();
        assert_eq!(matched, root.path().join("ref_x"));
    }

    #[test]
    fn missing_source_file_yields_no_match() {
        let root = tempdir().unwrap();
        write(&root.path().join("ref_a"), b"irrelevant");
        let mut index = build_index(&[root.path().to_path_buf()]);

        let missing = PathBuf::from("/nonexistent/cpdd/source/file");
        assert!(find_match(&mut index, &missing).is_none());
    }
}
