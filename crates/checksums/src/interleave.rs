//! The interleaved compare+digest primitive (spec.md §9 design notes).
//!
//! This is the single most intricate invariant in the match engine: the
//! first time a reference entry's digest must be computed, if the source
//! probe also lacks a digest, both are produced in the same read-pair as
//! the byte comparison so neither file is read twice for that candidate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::hasher::Md5Hasher;
use crate::{Digest, CHUNK_SIZE};

/// Result of a single interleaved pass over two files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareAndDigest {
    /// Whether `a` and `b` are byte-identical.
    pub equal: bool,
    /// `a`'s digest, present iff it was requested.
    pub digest_a: Option<Digest>,
    /// `b`'s digest, present iff it was requested.
    pub digest_b: Option<Digest>,
}

/// Streams `a` and `b` in lockstep, comparing bytes and optionally
/// accumulating an MD5 digest for either side, reading each file exactly
/// once regardless of how many of the three outputs are requested.
///
/// An open failure on either side is reported as `equal: false` with no
/// digests, matching [`crate::files_equal`]'s "cannot be matched" contract.
#[must_use]
pub fn compare_and_digest(
    a: &Path,
    b: &Path,
    want_digest_a: bool,
    want_digest_b: bool,
) -> CompareAndDigest {
    let (mut fa, mut fb) = match (File::open(a), File::open(b)) {
        (Ok(fa), Ok(fb)) => (fa, fb),
        _ => return CompareAndDigest::default(),
    };

    let mut hasher_a = want_digest_a.then(Md5Hasher::new);
    let mut hasher_b = want_digest_b.then(Md5Hasher::new);
    let mut buf_a = vec![0u8; CHUNK_SIZE];
    let mut buf_b = vec![0u8; CHUNK_SIZE];
    let mut equal = true;

    loop {
        let read_a = match fa.read(&mut buf_a) {
            Ok(n) => n,
            Err(_) => return CompareAndDigest::default(),
        };
        let read_b = match fb.read(&mut buf_b) {
            Ok(n) => n,
            Err(_) => return CompareAndDigest::default(),
        };

        if let Some(hasher) = hasher_a.as_mut() {
            hasher.update(&buf_a[..read_a]);
        }
        if let Some(hasher) = hasher_b.as_mut() {
            hasher.update(&buf_b[..read_b]);
        }

        if equal && (read_a != read_b || buf_a[..read_a] != buf_b[..read_b]) {
            equal = false;
            // Keep streaming (rather than returning early) so any
            // requested digest still reflects a full, single read of the
            // file — short-circuiting here would leave a half-computed
            // hash if a caller asked for one alongside the comparison.
            if hasher_a.is_none() && hasher_b.is_none() {
                return CompareAndDigest {
                    equal: false,
                    digest_a: None,
                    digest_b: None,
                };
            }
        }

        if read_a == 0 && read_b == 0 {
            break;
        }
    }

    CompareAndDigest {
        equal,
        digest_a: hasher_a.map(Md5Hasher::finalize),
        digest_b: hasher_b.map(Md5Hasher::finalize),
    }
}
