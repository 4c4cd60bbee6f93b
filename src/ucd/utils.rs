//! Low-level byte reading utilities

use std::io::Read;
use byteorder::ReadBytesExt;

use super::types::error::{Result, UcdError};

/// A length prefix never needs more than 5 groups of 7 bits.
const MAX_VARINT_BYTES: usize = 5;

/// Read an unsigned LEB128 varint (low 7-bit group first, high bit = more bytes follow).
///
/// Used as the length prefix of every text field.
pub fn read_varint(reader: &mut impl Read) -> Result<u32> {
    let mut value: u32 = 0;
    for i in 0..MAX_VARINT_BYTES {
        let byte = reader.read_u8()?;
        let group = u32::from(byte & 0x7F);
        let shift = 7 * i as u32;
        // The fifth group only has room for 4 more bits.
        if shift == 28 && group > 0x0F {
            return Err(UcdError::InvalidFormat("Length prefix overflows 32 bits".to_string()));
        }
        value |= group << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(UcdError::InvalidFormat("Length prefix is longer than 5 bytes".to_string()))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_string(reader: &mut impl Read) -> Result<String> {
    let len = read_varint(reader)? as u64;
    let mut bytes = Vec::new();
    // `take` keeps a corrupt length from allocating up front.
    let read = reader.take(len).read_to_end(&mut bytes)?;
    if (read as u64) < len {
        return Err(UcdError::TruncatedStream);
    }
    String::from_utf8(bytes)
        .map_err(|e| UcdError::InvalidFormat(format!("Text field is not valid UTF-8: {}", e)))
}

/// Read a 24-bit integer stored as three bytes, least significant first.
pub fn read_u24_le(reader: &mut impl Read) -> Result<u32> {
    let mut bytes = [0u8; 3];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from(bytes[0]) | u32::from(bytes[1]) << 8 | u32::from(bytes[2]) << 16)
}
