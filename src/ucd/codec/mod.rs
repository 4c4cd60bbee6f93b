//! Codec layer for the snapshot's primitive encodings.
//!
//! # Submodules
//!
//! - [`codepoint`][]: Variable-length codepoint encoding (1 to 3 bytes)
//! - [`compression`][]: DEFLATE container used for packaged snapshots

pub mod codepoint;
pub mod compression;
