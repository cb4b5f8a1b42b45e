//! Attribute preservation: carrying mode, ownership, and timestamps from a
//! source file to its destination counterpart (spec.md §4.5 step 5).
//!
//! Preservation failures are always warnings at the call site, never fatal —
//! this crate just reports which attribute failed and why.

#![deny(unsafe_code)]

mod error;
mod preserve;

pub use error::MetadataError;
pub use preserve::preserve_attributes;
