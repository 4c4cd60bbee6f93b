//! # Record Decoding
//!
//! Character-data records start with a 16-bit big-endian presence mask. Each bit gates
//! one optional field; absent fields occupy no bytes, so the mask must be followed
//! exactly for the cursor to land on the next record.
//!
//! ```text
//! bit   mask    field                      payload
//! 0     0x0001  range is a pair            1 or 2 codepoints (always read)
//! 1     0x0002  name                       string
//! 2     0x0004  general category           u8
//! 3     0x0008  canonical combining class  u8
//! 4     0x0010  bidi class                 u8
//! 5     0x0020  decomposition              u8 tag + string
//! 6-7   0x00C0  numeric type               i64 (BE) + u8 when not None
//! 8     0x0100  bidi mirrored              flag only
//! 9     0x0200  old name                   string
//! 10    0x0400  simple uppercase mapping   string
//! 11    0x0800  simple lowercase mapping   string
//! 12    0x1000  simple titlecase mapping   string
//! 13    0x2000  contributory properties    u32 (BE)
//! 14    0x4000  core properties            3 bytes, little-endian
//! ```
//!
//! Block records have no mask: two codepoints followed by a string.

use std::io::Read;
use byteorder::{BigEndian, ReadBytesExt};
use log::trace;

use crate::ucd::codec::codepoint::read_codepoint;
use crate::ucd::types::error::{Result, UcdError};
use crate::ucd::types::models::{BlockEntry, CharacterData, CodepointRange};
use crate::ucd::types::properties::{
    BidiClass, CanonicalCombiningClass, ContributoryProperties, CoreProperties, DecompositionTag,
    GeneralCategory, NumericType, RationalNumber,
};
use crate::ucd::utils;

/// The presence mask preceding every character-data record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldMask(u16);

impl FieldMask {
    pub const RANGE: u16 = 0x0001;
    pub const NAME: u16 = 0x0002;
    pub const CATEGORY: u16 = 0x0004;
    pub const COMBINING_CLASS: u16 = 0x0008;
    pub const BIDI_CLASS: u16 = 0x0010;
    pub const DECOMPOSITION: u16 = 0x0020;
    pub const NUMERIC_TYPE: u16 = 0x00C0;
    pub const BIDI_MIRRORED: u16 = 0x0100;
    pub const OLD_NAME: u16 = 0x0200;
    pub const UPPERCASE_MAPPING: u16 = 0x0400;
    pub const LOWERCASE_MAPPING: u16 = 0x0800;
    pub const TITLECASE_MAPPING: u16 = 0x1000;
    pub const CONTRIBUTORY_PROPERTIES: u16 = 0x2000;
    pub const CORE_PROPERTIES: u16 = 0x4000;
    /// Bits not assigned to any field.
    pub const RESERVED: u16 = 0x8000;

    const NUMERIC_TYPE_SHIFT: u16 = 6;

    pub fn new(bits: u16) -> Result<Self> {
        if bits & Self::RESERVED != 0 {
            return Err(UcdError::InvalidFormat(format!(
                "Reserved presence bits set in record mask {:#06x}",
                bits
            )));
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn has(self, field: u16) -> bool {
        self.0 & field != 0
    }

    pub fn numeric_type(self) -> NumericType {
        NumericType::from_bits(((self.0 & Self::NUMERIC_TYPE) >> Self::NUMERIC_TYPE_SHIFT) as u8)
    }
}

/// Reads one character-data record.
///
/// # Errors
/// - `TruncatedStream` if the stream ends inside the record
/// - `InvalidFormat` for reserved mask bits, unknown enumeration values, invalid
///   ranges, invalid UTF-8 or a zero numeric denominator
pub fn read_character_data<R: Read>(reader: &mut R) -> Result<CharacterData> {
    let mask = FieldMask::new(reader.read_u16::<BigEndian>()?)?;

    let range = if mask.has(FieldMask::RANGE) {
        read_range_pair(reader)?
    } else {
        let codepoint = read_codepoint(reader)?;
        decoded_range(codepoint, codepoint)?
    };
    let mut data = CharacterData::new(range);

    if mask.has(FieldMask::NAME) {
        data.name = Some(utils::read_string(reader)?);
    }
    if mask.has(FieldMask::CATEGORY) {
        data.category = GeneralCategory::try_from(reader.read_u8()?)?;
    }
    if mask.has(FieldMask::COMBINING_CLASS) {
        data.canonical_combining_class = CanonicalCombiningClass(reader.read_u8()?);
    }
    if mask.has(FieldMask::BIDI_CLASS) {
        data.bidi_class = BidiClass::try_from(reader.read_u8()?)?;
    }
    if mask.has(FieldMask::DECOMPOSITION) {
        data.decomposition_tag = DecompositionTag::try_from(reader.read_u8()?)?;
        data.decomposition_mapping = Some(utils::read_string(reader)?);
    }

    data.numeric_type = mask.numeric_type();
    if data.numeric_type != NumericType::None {
        let numerator = reader.read_i64::<BigEndian>()?;
        let denominator = reader.read_u8()?;
        data.numeric_value = Some(RationalNumber::new(numerator, denominator)?);
    }

    data.bidi_mirrored = mask.has(FieldMask::BIDI_MIRRORED);

    if mask.has(FieldMask::OLD_NAME) {
        data.old_name = Some(utils::read_string(reader)?);
    }
    if mask.has(FieldMask::UPPERCASE_MAPPING) {
        data.simple_uppercase_mapping = Some(utils::read_string(reader)?);
    }
    if mask.has(FieldMask::LOWERCASE_MAPPING) {
        data.simple_lowercase_mapping = Some(utils::read_string(reader)?);
    }
    if mask.has(FieldMask::TITLECASE_MAPPING) {
        data.simple_titlecase_mapping = Some(utils::read_string(reader)?);
    }
    if mask.has(FieldMask::CONTRIBUTORY_PROPERTIES) {
        let bits = reader.read_u32::<BigEndian>()?;
        data.contributory_properties = ContributoryProperties::from_bits(bits);
    }
    if mask.has(FieldMask::CORE_PROPERTIES) {
        data.core_properties = CoreProperties::from_bits(utils::read_u24_le(reader)?);
    }

    trace!("Decoded character data {} (mask {:#06x})", data.range, mask.bits());
    Ok(data)
}

/// Reads one block record: a range pair and the block name.
pub fn read_block<R: Read>(reader: &mut R) -> Result<BlockEntry> {
    let range = read_range_pair(reader)?;
    let name = utils::read_string(reader)?;
    trace!("Decoded block {} '{}'", range, name);
    Ok(BlockEntry { range, name })
}

fn read_range_pair<R: Read>(reader: &mut R) -> Result<CodepointRange> {
    let first = read_codepoint(reader)?;
    let last = read_codepoint(reader)?;
    decoded_range(first, last)
}

/// Bad ranges in the stream are a format problem, not a caller error.
fn decoded_range(first: u32, last: u32) -> Result<CodepointRange> {
    CodepointRange::new(first, last).map_err(|e| match e {
        UcdError::InvalidCodepoint(cp) => {
            UcdError::InvalidFormat(format!("Decoded codepoint {:#X} is above U+10FFFF", cp))
        }
        UcdError::InvalidRange(first, last) => {
            UcdError::InvalidFormat(format!(
                "Decoded range {:04X}..{:04X} is reversed",
                first, last
            ))
        }
        other => other,
    })
}
