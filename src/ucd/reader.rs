use std::io::Read;
use byteorder::ReadBytesExt;
use log::{debug, info, trace};

use super::codec::codepoint::read_codepoint;
use super::codec::compression::{self, SnapshotStream};
use super::config::{Compression, LoadOptions};
use super::format::{header, records};
use super::lookup::{self, CharInfo};
use super::types::error::Result;
use super::types::models::{check_codepoint, BlockEntry, CharacterData, UnicodeVersion};

/// A loaded Unicode Character Database snapshot.
///
/// Immutable after loading: every query takes `&self`, so one instance can be shared
/// across threads (behind `Arc`, a `static`, or [`crate::ucd::global`]) without locking.
#[derive(Debug, Clone)]
pub struct UnicodeData {
    unicode_version: UnicodeVersion,
    characters: Vec<CharacterData>,
    blocks: Vec<BlockEntry>,
}

impl UnicodeData {
    /// Loads an uncompressed snapshot with the strict version check.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The stream does not start with the `UCD` magic
    /// - The format version is not supported
    /// - The stream ends before the last record
    /// - A record holds an invalid value
    ///
    /// No partially loaded data is ever returned.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        Self::load_with(reader, &LoadOptions::default())
    }

    /// Loads a snapshot using explicit [`LoadOptions`].
    pub fn load_with<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        debug!("Loading UCD snapshot with {:?}", options);
        let mut stream = SnapshotStream::new(reader, options.compression);
        Self::parse(&mut stream, options)
    }

    /// Loads an uncompressed snapshot held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::load(bytes)
    }

    /// Loads a snapshot wrapped in raw DEFLATE, as packaged with applications.
    pub fn from_deflate<R: Read>(reader: R) -> Result<Self> {
        Self::load_with(reader, &LoadOptions::new().compression(Compression::Deflate))
    }

    /// Loads a DEFLATE-wrapped snapshot held in memory.
    pub fn from_deflate_bytes(bytes: &[u8]) -> Result<Self> {
        let inflated = compression::inflate(bytes)?;
        Self::from_bytes(&inflated)
    }

    fn parse<R: Read>(reader: &mut R, options: &LoadOptions) -> Result<Self> {
        info!("Parsing UCD snapshot");
        let header = header::parse(reader, options.version_check)?;

        let character_count = read_codepoint(reader)? as usize;
        trace!("Character data entries declared: {}", character_count);
        let mut characters = Vec::with_capacity(character_count.min(0x10000));
        for _ in 0..character_count {
            characters.push(records::read_character_data(reader)?);
        }

        let block_count = usize::from(reader.read_u8()?);
        trace!("Block entries declared: {}", block_count);
        let mut blocks = Vec::with_capacity(block_count);
        for _ in 0..block_count {
            blocks.push(records::read_block(reader)?);
        }

        info!(
            "UCD snapshot loaded: Unicode {}, {} character entries, {} blocks",
            header.unicode_version,
            characters.len(),
            blocks.len()
        );

        Ok(Self {
            unicode_version: header.unicode_version,
            characters,
            blocks,
        })
    }

    /// The Unicode version the snapshot was built from.
    pub fn unicode_version(&self) -> UnicodeVersion {
        self.unicode_version
    }

    /// Character data entry containing `codepoint`, if any.
    pub fn find_character(&self, codepoint: u32) -> Option<&CharacterData> {
        lookup::find_entry(&self.characters, codepoint)
    }

    /// Name of the block containing `codepoint`, if any.
    pub fn find_block_name(&self, codepoint: u32) -> Option<&str> {
        lookup::find_entry(&self.blocks, codepoint).map(|block| block.name.as_str())
    }

    /// All known properties of `codepoint`.
    ///
    /// Character data and block are looked up independently; either may be absent.
    ///
    /// # Errors
    /// Returns `InvalidCodepoint` if `codepoint` is above U+10FFFF.
    pub fn char_info(&self, codepoint: u32) -> Result<CharInfo<'_>> {
        check_codepoint(codepoint)?;
        Ok(CharInfo::new(
            codepoint,
            self.find_character(codepoint),
            self.find_block_name(codepoint),
        ))
    }

    /// Shortcut for `char_info(c as u32)`; every `char` is a valid codepoint.
    pub fn char_info_for(&self, c: char) -> CharInfo<'_> {
        let codepoint = u32::from(c);
        CharInfo::new(codepoint, self.find_character(codepoint), self.find_block_name(codepoint))
    }

    /// A copy of the block table.
    pub fn list_blocks(&self) -> Vec<BlockEntry> {
        self.blocks.clone()
    }

    /// The block table, sorted by range.
    pub fn blocks(&self) -> &[BlockEntry] {
        &self.blocks
    }

    /// The character data table, sorted by range.
    pub fn characters(&self) -> &[CharacterData] {
        &self.characters
    }
}
