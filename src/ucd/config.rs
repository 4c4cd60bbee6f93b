//! Options controlling how a snapshot is loaded.

/// How strictly the snapshot format version is checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    /// Only the supported format version is accepted.
    #[default]
    Strict,
    /// Unknown format versions are logged and parsed as if they were supported.
    ///
    /// Meant for inspecting snapshots from newer producers; results are not guaranteed.
    Diagnostic,
}

/// Container wrapped around the snapshot bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// The stream is the raw snapshot.
    #[default]
    None,
    /// The snapshot is wrapped in a raw DEFLATE (RFC 1951) stream.
    Deflate,
}

/// Settings for [`UnicodeData::load_with`](crate::ucd::UnicodeData::load_with).
///
/// The default is a strict version check on an uncompressed stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub version_check: VersionCheck,
    pub compression: Compression,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version_check(mut self, version_check: VersionCheck) -> Self {
        self.version_check = version_check;
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}
