//! Range-table lookups.
//!
//! Both tables (character data and blocks) are sorted by range start and never
//! overlap, so one binary search over the three-way range comparison finds the
//! only entry that can contain a codepoint.

use std::borrow::Cow;

use super::names;
use super::types::models::{CharacterData, RangeEntry};
use super::types::properties::{
    BidiClass, CanonicalCombiningClass, ContributoryProperties, CoreProperties, DecompositionTag,
    GeneralCategory, NumericType, RationalNumber,
};

/// Finds the entry whose range contains `codepoint`.
///
/// `entries` must be sorted ascending by range start with no overlaps. A table that
/// breaks this gives unspecified (but memory-safe) answers.
pub fn find_entry<T: RangeEntry>(entries: &[T], codepoint: u32) -> Option<&T> {
    entries
        .binary_search_by(|entry| entry.range().compare_codepoint(codepoint))
        .ok()
        .map(|index| &entries[index])
}

/// Everything known about one codepoint.
///
/// Borrowed from the [`UnicodeData`](crate::ucd::UnicodeData) that produced it. Property
/// accessors fall back to the UCD defaults when the codepoint has no character data.
#[derive(Debug, Clone, Copy)]
pub struct CharInfo<'a> {
    codepoint: u32,
    data: Option<&'a CharacterData>,
    block: Option<&'a str>,
}

impl<'a> CharInfo<'a> {
    pub(crate) fn new(
        codepoint: u32,
        data: Option<&'a CharacterData>,
        block: Option<&'a str>,
    ) -> Self {
        Self { codepoint, data, block }
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// The matching character data entry, if the codepoint has one.
    pub fn data(&self) -> Option<&'a CharacterData> {
        self.data
    }

    /// Name of the enclosing block, if any.
    pub fn block(&self) -> Option<&'a str> {
        self.block
    }

    /// The character name.
    ///
    /// Hangul syllables and range entries get their algorithmic name
    /// (`HANGUL SYLLABLE GAG`, `CJK UNIFIED IDEOGRAPH-4E00`).
    pub fn name(&self) -> Option<Cow<'a, str>> {
        if let Some(name) = names::hangul_syllable_name(self.codepoint) {
            return Some(Cow::Owned(name));
        }
        let data = self.data?;
        let stored = data.name.as_deref()?;
        if data.range.is_single() {
            Some(Cow::Borrowed(stored))
        } else {
            Some(Cow::Owned(names::range_member_name(stored, self.codepoint)))
        }
    }

    /// Unicode 1.0 name.
    pub fn old_name(&self) -> Option<&'a str> {
        self.data?.old_name.as_deref()
    }

    pub fn category(&self) -> GeneralCategory {
        self.data.map_or(GeneralCategory::Unassigned, |d| d.category)
    }

    pub fn canonical_combining_class(&self) -> CanonicalCombiningClass {
        self.data
            .map_or(CanonicalCombiningClass::NOT_REORDERED, |d| d.canonical_combining_class)
    }

    pub fn bidi_class(&self) -> BidiClass {
        self.data.map_or(BidiClass::LeftToRight, |d| d.bidi_class)
    }

    pub fn bidi_mirrored(&self) -> bool {
        self.data.is_some_and(|d| d.bidi_mirrored)
    }

    pub fn decomposition_tag(&self) -> DecompositionTag {
        self.data.map_or(DecompositionTag::Canonical, |d| d.decomposition_tag)
    }

    pub fn decomposition_mapping(&self) -> Option<&'a str> {
        self.data?.decomposition_mapping.as_deref()
    }

    pub fn numeric_type(&self) -> NumericType {
        self.data.map_or(NumericType::None, |d| d.numeric_type)
    }

    pub fn numeric_value(&self) -> Option<RationalNumber> {
        self.data?.numeric_value
    }

    pub fn simple_uppercase_mapping(&self) -> Option<&'a str> {
        self.data?.simple_uppercase_mapping.as_deref()
    }

    pub fn simple_lowercase_mapping(&self) -> Option<&'a str> {
        self.data?.simple_lowercase_mapping.as_deref()
    }

    pub fn simple_titlecase_mapping(&self) -> Option<&'a str> {
        self.data?.simple_titlecase_mapping.as_deref()
    }

    pub fn contributory_properties(&self) -> ContributoryProperties {
        self.data.map(|d| d.contributory_properties).unwrap_or_default()
    }

    pub fn core_properties(&self) -> CoreProperties {
        self.data.map(|d| d.core_properties).unwrap_or_default()
    }

    /// Printable text for showing this codepoint in a UI.
    ///
    /// Controls become Control Pictures, combining marks are shown on a dotted circle
    /// and codepoints that are not scalar values become U+FFFD.
    pub fn display_text(&self) -> String {
        names::display_text(self.codepoint, self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucd::types::models::{BlockEntry, CodepointRange};

    fn blocks(ranges: &[(u32, u32)]) -> Vec<BlockEntry> {
        ranges
            .iter()
            .map(|&(first, last)| BlockEntry {
                range: CodepointRange::new(first, last).unwrap(),
                name: format!("{:04X}", first),
            })
            .collect()
    }

    #[test]
    fn exhaustive_small_table() {
        let table = blocks(&[(0x00, 0x00), (0x02, 0x05), (0x07, 0x07), (0x08, 0x0A), (0x10, 0x1F)]);
        for cp in 0..0x30 {
            let expected = table.iter().find(|b| b.range.contains(cp));
            assert_eq!(find_entry(&table, cp), expected, "codepoint {:#X}", cp);
        }
    }

    #[test]
    fn empty_and_single_entry_tables() {
        let empty: Vec<BlockEntry> = Vec::new();
        assert!(find_entry(&empty, 0).is_none());

        let single = blocks(&[(0x100, 0x17F)]);
        assert!(find_entry(&single, 0xFF).is_none());
        assert_eq!(find_entry(&single, 0x100).unwrap().name, "0100");
        assert_eq!(find_entry(&single, 0x17F).unwrap().name, "0100");
        assert!(find_entry(&single, 0x180).is_none());
    }

    #[test]
    fn defaults_without_data() {
        let info = CharInfo::new(0x0378, None, Some("Greek and Coptic"));
        assert_eq!(info.category(), GeneralCategory::Unassigned);
        assert_eq!(info.bidi_class(), BidiClass::LeftToRight);
        assert_eq!(info.numeric_type(), NumericType::None);
        assert!(info.name().is_none());
        assert!(!info.bidi_mirrored());
        assert!(info.core_properties().is_empty());
        assert_eq!(info.block(), Some("Greek and Coptic"));
    }

    #[test]
    fn range_entry_names() {
        let mut data = CharacterData::new(CodepointRange::new(0x4E00, 0x9FFF).unwrap());
        data.name = Some("CJK UNIFIED IDEOGRAPH-".to_string());
        let info = CharInfo::new(0x4E2D, Some(&data), None);
        assert_eq!(info.name().as_deref(), Some("CJK UNIFIED IDEOGRAPH-4E2D"));

        data.name = None;
        let info = CharInfo::new(0x4E2D, Some(&data), None);
        assert!(info.name().is_none());

        let info = CharInfo::new(0xAC01, None, None);
        assert_eq!(info.name().as_deref(), Some("HANGUL SYLLABLE GAG"));
    }
}
