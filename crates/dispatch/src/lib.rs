//! The file action dispatcher (C5): per source file, decide whether to
//! overwrite an existing destination, then link-or-copy and preserve
//! attributes (spec.md §4.5).

#![deny(unsafe_code)]

mod copy;
mod error;
mod overwrite;
mod place;

pub use error::DispatchError;
pub use overwrite::{OverwritePrompt, StdinPrompt};
pub use place::place_file;
