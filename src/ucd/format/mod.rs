//! Snapshot format parsing layer.
//!
//! This module provides the mid-level parsing layer that bridges between
//! the raw byte stream and the high-level [`UnicodeData`](crate::ucd::UnicodeData).
//!
//! # Module Organization
//!
//! - [`header`]: Validates the magic and format version, reads the Unicode version
//! - [`records`]: Decodes character-data and block records
//!
//! # Architecture
//!
//! ```text
//! Snapshot Structure:
//! ┌─────────────────────┐
//! │  Header             │ ← header::parse()
//! ├─────────────────────┤
//! │  Entry count        │ ← codec::codepoint::read_codepoint()
//! │  Character records  │ ← records::read_character_data()
//! ├─────────────────────┤
//! │  Block count (u8)   │
//! │  Block records      │ ← records::read_block()
//! └─────────────────────┘
//! ```

pub mod header;
pub mod records;
