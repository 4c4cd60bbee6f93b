//! Custom error types for the ucd-snapshot crate.

use std::io;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum UcdError {
    /// The stream does not start with the `UCD` magic bytes.
    #[error("Invalid snapshot magic: expected \"UCD\", found {0:02X?}")]
    InvalidMagic([u8; 3]),

    /// The snapshot declares a format version this crate cannot read.
    #[error("Unsupported snapshot format version: {0}. Only version 1 is supported.")]
    UnsupportedFormatVersion(u8),

    /// The stream is structurally invalid (unknown enumeration value, bad text, bad range...).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The stream ended in the middle of a field.
    #[error("Snapshot stream is truncated")]
    TruncatedStream,

    /// A codepoint outside `0..=0x10FFFF` was passed in.
    #[error("Invalid codepoint: {0:#X} is outside 0..=0x10FFFF")]
    InvalidCodepoint(u32),

    /// A codepoint range was built with its bounds reversed.
    #[error("Invalid codepoint range: {0:#X} is above {1:#X}")]
    InvalidRange(u32, u32),

    /// An error originating from the underlying reader or decompressor.
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// The process-wide default dataset was installed more than once.
    #[error("The default Unicode dataset has already been initialized")]
    AlreadyInitialized,
}

impl UcdError {
    /// Returns `true` for errors caused by a stream that is not a valid snapshot.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            UcdError::InvalidMagic(_)
                | UcdError::UnsupportedFormatVersion(_)
                | UcdError::InvalidFormat(_)
        )
    }

    /// Returns `true` if the stream ended before a field was fully read.
    pub fn is_truncation(&self) -> bool {
        matches!(self, UcdError::TruncatedStream)
    }
}

// Running out of bytes is a data problem, not an I/O one: closing the stream mid-load
// surfaces as truncation.
impl From<io::Error> for UcdError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            UcdError::TruncatedStream
        } else {
            UcdError::Io(err)
        }
    }
}

/// A convenience `Result` type alias using the crate's `UcdError` type.
pub type Result<T> = std::result::Result<T, UcdError>;
