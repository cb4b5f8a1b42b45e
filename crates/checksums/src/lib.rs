//! Streaming MD5 hashing (C1) and byte-for-byte file comparison (C2).
//!
//! The digest is a secondary filter in front of [`compare::files_equal`],
//! never an authority on its own — matches are always confirmed by a byte
//! comparison (spec.md §4.4). MD5's algorithm choice is fixed by spec.md §4.1
//! because the digest never leaves the process; any collision resistance
//! weakness is immaterial here.

#![deny(unsafe_code)]

pub mod compare;
pub mod hasher;
pub mod interleave;

pub use compare::files_equal;
pub use hasher::{digest_file, Md5Hasher};
pub use interleave::{compare_and_digest, CompareAndDigest};

/// Byte length of an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// An MD5 digest.
pub type Digest = [u8; DIGEST_LEN];

/// Chunk size used by every streaming primitive in this crate — within
/// spec.md §4.2's required [4 KiB, 64 KiB] window.
pub const CHUNK_SIZE: usize = 32 * 1024;
