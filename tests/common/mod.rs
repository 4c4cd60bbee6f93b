//! Synthetic snapshot writer shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::DeflateEncoder;
use ucd_snapshot::ucd::codec::codepoint::write_codepoint;
use ucd_snapshot::ucd::format::records::FieldMask;
use ucd_snapshot::{CharacterData, NumericType};

pub struct SnapshotWriter {
    format_version: u8,
    major: u16,
    minor: u8,
    characters: Vec<CharacterData>,
    blocks: Vec<(u32, u32, String)>,
}

impl SnapshotWriter {
    pub fn new(major: u16, minor: u8) -> Self {
        Self {
            format_version: 1,
            major,
            minor,
            characters: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn format_version(mut self, version: u8) -> Self {
        self.format_version = version;
        self
    }

    pub fn character(mut self, data: CharacterData) -> Self {
        self.characters.push(data);
        self
    }

    pub fn block(mut self, first: u32, last: u32, name: &str) -> Self {
        self.blocks.push((first, last, name.to_string()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = b"UCD".to_vec();
        out.push(self.format_version);
        out.extend_from_slice(&self.major.to_be_bytes());
        out.push(self.minor);
        write_codepoint(&mut out, self.characters.len() as u32).unwrap();
        for data in &self.characters {
            write_character(&mut out, data);
        }
        out.push(self.blocks.len() as u8);
        for (first, last, name) in &self.blocks {
            write_codepoint(&mut out, *first).unwrap();
            write_codepoint(&mut out, *last).unwrap();
            write_string(&mut out, name);
        }
        out
    }

    pub fn build_deflate(&self) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), flate2::Compression::best());
        encoder.write_all(&self.build()).unwrap();
        encoder.finish().unwrap()
    }
}

pub fn write_string(out: &mut Vec<u8>, text: &str) {
    let mut len = text.len() as u32;
    loop {
        let byte = (len & 0x7F) as u8;
        len >>= 7;
        if len == 0 {
            out.push(byte);
            break;
        }
        out.push(byte | 0x80);
    }
    out.extend_from_slice(text.as_bytes());
}

pub fn write_character(out: &mut Vec<u8>, data: &CharacterData) {
    let mut mask = 0u16;
    if !data.range.is_single() {
        mask |= FieldMask::RANGE;
    }
    if data.name.is_some() {
        mask |= FieldMask::NAME;
    }
    if data.category != Default::default() {
        mask |= FieldMask::CATEGORY;
    }
    if data.canonical_combining_class.0 != 0 {
        mask |= FieldMask::COMBINING_CLASS;
    }
    if data.bidi_class != Default::default() {
        mask |= FieldMask::BIDI_CLASS;
    }
    if data.decomposition_mapping.is_some() {
        mask |= FieldMask::DECOMPOSITION;
    }
    mask |= (data.numeric_type as u16) << 6;
    if data.bidi_mirrored {
        mask |= FieldMask::BIDI_MIRRORED;
    }
    if data.old_name.is_some() {
        mask |= FieldMask::OLD_NAME;
    }
    if data.simple_uppercase_mapping.is_some() {
        mask |= FieldMask::UPPERCASE_MAPPING;
    }
    if data.simple_lowercase_mapping.is_some() {
        mask |= FieldMask::LOWERCASE_MAPPING;
    }
    if data.simple_titlecase_mapping.is_some() {
        mask |= FieldMask::TITLECASE_MAPPING;
    }
    if !data.contributory_properties.is_empty() {
        mask |= FieldMask::CONTRIBUTORY_PROPERTIES;
    }
    if !data.core_properties.is_empty() {
        mask |= FieldMask::CORE_PROPERTIES;
    }

    out.extend_from_slice(&mask.to_be_bytes());
    write_codepoint(out, data.range.first()).unwrap();
    if !data.range.is_single() {
        write_codepoint(out, data.range.last()).unwrap();
    }
    if let Some(name) = &data.name {
        write_string(out, name);
    }
    if mask & FieldMask::CATEGORY != 0 {
        out.push(data.category as u8);
    }
    if mask & FieldMask::COMBINING_CLASS != 0 {
        out.push(data.canonical_combining_class.0);
    }
    if mask & FieldMask::BIDI_CLASS != 0 {
        out.push(data.bidi_class as u8);
    }
    if let Some(mapping) = &data.decomposition_mapping {
        out.push(data.decomposition_tag as u8);
        write_string(out, mapping);
    }
    if data.numeric_type != NumericType::None {
        let value = data.numeric_value.expect("numeric type without value");
        out.extend_from_slice(&value.numerator.to_be_bytes());
        out.push(value.denominator);
    }
    for text in [
        &data.old_name,
        &data.simple_uppercase_mapping,
        &data.simple_lowercase_mapping,
        &data.simple_titlecase_mapping,
    ]
    .into_iter()
    .flatten()
    {
        write_string(out, text);
    }
    if mask & FieldMask::CONTRIBUTORY_PROPERTIES != 0 {
        out.extend_from_slice(&data.contributory_properties.bits().to_be_bytes());
    }
    if mask & FieldMask::CORE_PROPERTIES != 0 {
        let bits = data.core_properties.bits();
        out.extend_from_slice(&[bits as u8, (bits >> 8) as u8, (bits >> 16) as u8]);
    }
}
