//! Decompression of packaged snapshots.
//!
//! Snapshots embedded as resources are usually wrapped in raw DEFLATE:
//! - None: the stream is read as-is
//! - Deflate: the stream is inflated on the fly with flate2

use std::io::{self, Read};

use flate2::read::DeflateDecoder;
use log::trace;

use crate::ucd::config::Compression;
use crate::ucd::types::error::{Result, UcdError};

/// A reader yielding the decompressed snapshot bytes.
pub enum SnapshotStream<R: Read> {
    Plain(R),
    Deflate(DeflateDecoder<R>),
}

impl<R: Read> SnapshotStream<R> {
    /// Wraps `reader` in the decoder for `compression`.
    pub fn new(reader: R, compression: Compression) -> Self {
        match compression {
            Compression::None => {
                trace!("Reading uncompressed snapshot stream");
                SnapshotStream::Plain(reader)
            }
            Compression::Deflate => {
                trace!("Reading DEFLATE-compressed snapshot stream");
                SnapshotStream::Deflate(DeflateDecoder::new(reader))
            }
        }
    }
}

impl<R: Read> Read for SnapshotStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            SnapshotStream::Plain(reader) => reader.read(buf),
            SnapshotStream::Deflate(decoder) => decoder.read(buf),
        }
    }
}

/// Inflates a whole raw DEFLATE payload into memory.
///
/// # Errors
/// Returns `TruncatedStream` if the payload ends early and `Io` if it is corrupt.
pub fn inflate(payload: &[u8]) -> Result<Vec<u8>> {
    trace!("Inflating {} bytes of DEFLATE payload", payload.len());
    let mut output = Vec::with_capacity(payload.len().saturating_mul(4));
    DeflateDecoder::new(payload)
        .read_to_end(&mut output)
        .map_err(UcdError::from)?;
    trace!("Inflated to {} bytes", output.len());
    Ok(output)
}
