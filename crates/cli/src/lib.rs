//! Command-line front end: parses flags into [`cpdd_core::Options`], wires up
//! logging and the signal-driven cleanup guard, drives [`cpdd_walk::run`],
//! and maps the outcome onto a process exit code.

#![deny(unsafe_code)]

mod args;
mod frontend;

pub use args::RawArgs;
pub use frontend::run;
