//! Streaming MD5 digest (RFC 1321) over a file (spec.md §4.1).

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use digest::Digest as _;

use crate::{Digest, CHUNK_SIZE};

/// Streaming MD5 hasher.
#[derive(Clone, Default)]
pub struct Md5Hasher {
    inner: md5::Md5,
}

impl Md5Hasher {
    /// Creates a hasher with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalizes the digest and returns the 16-byte MD5 output.
    #[must_use]
    pub fn finalize(self) -> Digest {
        self.inner.finalize().into()
    }
}

/// Streams `path` in fixed-size chunks and returns its MD5 digest.
///
/// This is the only place a `RefEntry` or `SrcProbe` digest is computed
/// outside of [`crate::interleave::compare_and_digest`] — callers on the
/// match-engine hot path that already need a byte comparison should prefer
/// that primitive so the file is not read twice.
pub fn digest_file(path: &Path) -> io::Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = Md5Hasher::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(hasher.finalize())
}
