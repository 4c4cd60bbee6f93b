//! Variable-length codepoint encoding.
//!
//! Snapshots store codepoints (and the character-entry count) in 1 to 3 bytes,
//! biased towards low values:
//!
//! ```text
//! lead byte     bytes  value
//! 0x00..=0x9F   1      lead
//! 0xA0..=0xBF   2      0x00A0 + ((lead & 0x1F) << 8 | b2)
//! 0xC0..=0xDF   2      0x20A0 + ((lead & 0x1F) << 8 | b2)
//! 0xE0..=0xFF   3      0x40A0 + ((lead & 0x1F) << 16 | b2 << 8 | b3)
//! ```

use std::io::{Read, Write};
use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::ucd::types::error::Result;
use crate::ucd::types::models::check_codepoint;

const TWO_BYTE_LOW_BASE: u32 = 0xA0;
const TWO_BYTE_HIGH_BASE: u32 = 0x20A0;
const THREE_BYTE_BASE: u32 = 0x40A0;

/// Decodes one codepoint, consuming 1 to 3 bytes.
///
/// Decoding is total: every byte sequence maps to a value. Values above U+10FFFF
/// are possible in the 3-byte band and are left for the caller to validate.
pub fn read_codepoint(reader: &mut impl Read) -> Result<u32> {
    let lead = reader.read_u8()?;
    let value = match lead {
        0x00..=0x9F => u32::from(lead),
        0xA0..=0xBF => {
            let b2 = u32::from(reader.read_u8()?);
            TWO_BYTE_LOW_BASE + (u32::from(lead & 0x1F) << 8 | b2)
        }
        0xC0..=0xDF => {
            let b2 = u32::from(reader.read_u8()?);
            TWO_BYTE_HIGH_BASE + (u32::from(lead & 0x1F) << 8 | b2)
        }
        0xE0..=0xFF => {
            let b2 = u32::from(reader.read_u8()?);
            let b3 = u32::from(reader.read_u8()?);
            THREE_BYTE_BASE + ((u32::from(lead & 0x1F) << 8 | b2) << 8 | b3)
        }
    };
    Ok(value)
}

/// Number of bytes [`write_codepoint`] emits for `value`.
pub fn encoded_len(value: u32) -> usize {
    if value < TWO_BYTE_LOW_BASE {
        1
    } else if value < THREE_BYTE_BASE {
        2
    } else {
        3
    }
}

/// Encodes one codepoint, returning the number of bytes written.
///
/// Fails with `InvalidCodepoint` for values above U+10FFFF.
pub fn write_codepoint(writer: &mut impl Write, value: u32) -> Result<usize> {
    check_codepoint(value)?;
    if value < TWO_BYTE_LOW_BASE {
        writer.write_u8(value as u8)?;
        Ok(1)
    } else if value < TWO_BYTE_HIGH_BASE {
        let offset = value - TWO_BYTE_LOW_BASE;
        writer.write_all(&[0xA0 | (offset >> 8) as u8, offset as u8])?;
        Ok(2)
    } else if value < THREE_BYTE_BASE {
        let offset = value - TWO_BYTE_HIGH_BASE;
        writer.write_all(&[0xC0 | (offset >> 8) as u8, offset as u8])?;
        Ok(2)
    } else {
        let offset = value - THREE_BYTE_BASE;
        writer.write_all(&[0xE0 | (offset >> 16) as u8, (offset >> 8) as u8, offset as u8])?;
        Ok(3)
    }
}
