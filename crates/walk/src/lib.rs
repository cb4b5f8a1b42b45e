//! The tree walker (C6) and destination disposition rules (spec.md §4.6).

#![deny(unsafe_code)]

mod dest;
mod error;
mod walker;

pub use cpdd_dispatch::{OverwritePrompt, StdinPrompt};
pub use error::WalkError;
pub use walker::{run, WalkOutcome};
