//! Snapshot header parsing.
//!
//! # Header Structure
//! ```text
//! [3 bytes] Magic "UCD"
//! [1 byte ] Format version (only 1 is supported)
//! [2 bytes] Unicode major version (big-endian u16)
//! [1 byte ] Unicode minor version
//! ```

use std::io::Read;
use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, warn};

use crate::ucd::config::VersionCheck;
use crate::ucd::types::error::{Result, UcdError};
use crate::ucd::types::models::UnicodeVersion;

pub const MAGIC: [u8; 3] = *b"UCD";
pub const FORMAT_VERSION: u8 = 1;

/// Parsed snapshot header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub format_version: u8,
    pub unicode_version: UnicodeVersion,
}

/// Parses the header from the start of a snapshot stream.
///
/// # Errors
/// - `InvalidMagic` if the stream does not start with `UCD`
/// - `UnsupportedFormatVersion` for an unknown version under [`VersionCheck::Strict`]
/// - `TruncatedStream` if the stream ends inside the header
pub fn parse<R: Read>(reader: &mut R, version_check: VersionCheck) -> Result<SnapshotHeader> {
    let mut magic = [0u8; 3];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(UcdError::InvalidMagic(magic));
    }

    let format_version = reader.read_u8()?;
    if format_version != FORMAT_VERSION {
        match version_check {
            VersionCheck::Strict => return Err(UcdError::UnsupportedFormatVersion(format_version)),
            VersionCheck::Diagnostic => warn!(
                "Snapshot format version {} is not supported (expected {}); \
                 parsing anyway in diagnostic mode",
                format_version, FORMAT_VERSION
            ),
        }
    }

    let major = reader.read_u16::<BigEndian>()?;
    let minor = reader.read_u8()?;
    let unicode_version = UnicodeVersion { major, minor };
    debug!("Snapshot header: format version {}, Unicode {}", format_version, unicode_version);

    Ok(SnapshotHeader {
        format_version,
        unicode_version,
    })
}
