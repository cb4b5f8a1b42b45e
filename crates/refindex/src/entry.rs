//! A single reference-tree file as tracked by the catalog.

use std::path::{Path, PathBuf};

use cpdd_checksums::Digest;

/// One regular file discovered under a reference root.
///
/// `digest`/`has_digest` start empty and are filled in lazily by the match
/// engine the first time some source file's size collides with this entry's
/// size; `digest` is never touched again afterwards.
#[derive(Clone, Debug)]
pub struct RefEntry {
    path: PathBuf,
    size: u64,
    digest: Option<Digest>,
    needs_digest: bool,
}

impl RefEntry {
    pub(crate) fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            digest: None,
            needs_digest: false,
        }
    }

    /// Path usable for `open` / `link` / `symlink`.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte size as observed at scan time.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// True iff at least one other entry in the catalog shares this size.
    ///
    /// Size-unique entries never need hashing: a direct byte compare against
    /// the lone source candidate is cheaper and just as conclusive.
    #[must_use]
    pub fn needs_digest(&self) -> bool {
        self.needs_digest
    }

    /// True once [`Self::digest`] has been finalized.
    #[must_use]
    pub fn has_digest(&self) -> bool {
        self.digest.is_some()
    }

    /// The cached digest, if computed.
    #[must_use]
    pub fn digest(&self) -> Option<&Digest> {
        self.digest.as_ref()
    }

    pub(crate) fn set_needs_digest(&mut self, needs: bool) {
        self.needs_digest = needs;
    }

    /// Finalizes the digest. Panics if called twice — `digest` is immutable
    /// once set, and the match engine must never attempt to recompute it.
    pub fn set_digest(&mut self, digest: Digest) {
        assert!(
            self.digest.is_none(),
            "RefEntry digest must be set at most once"
        );
        self.digest = Some(digest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_unique_entries_never_need_a_digest_by_default() {
        let entry = RefEntry::new(PathBuf::from("/ref/a"), 42);
        assert!(!entry.needs_digest());
        assert!(!entry.has_digest());
        assert!(entry.digest().is_none());
    }

    #[test]
    #[should_panic(expected = "at most once")]
    fn setting_the_digest_twice_panics() {
        let mut entry = RefEntry::new(PathBuf::from("/ref/a"), 42);
        entry.set_digest([0u8; 16]);
        entry.set_digest([1u8; 16]);
    }
}
