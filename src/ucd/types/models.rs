//! Core data structures decoded from a UCD snapshot.
//!
//! This module defines the fundamental types used throughout the library:
//! - Codepoint ranges and their ordering against a codepoint
//! - Character data and block entries
//! - The Unicode version carried by a snapshot

use std::cmp::Ordering;
use std::fmt;

use super::error::{Result, UcdError};
use super::properties::{
    BidiClass, CanonicalCombiningClass, ContributoryProperties, CoreProperties, DecompositionTag,
    GeneralCategory, NumericType, RationalNumber,
};

/// The highest valid Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Fails with [`UcdError::InvalidCodepoint`] for values above [`MAX_CODEPOINT`].
pub fn check_codepoint(codepoint: u32) -> Result<u32> {
    if codepoint > MAX_CODEPOINT {
        Err(UcdError::InvalidCodepoint(codepoint))
    } else {
        Ok(codepoint)
    }
}

/// An inclusive range of codepoints. A single codepoint has `first == last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    first: u32,
    last: u32,
}

impl CodepointRange {
    /// Creates `[first, last]`, rejecting reversed bounds and values above U+10FFFF.
    pub fn new(first: u32, last: u32) -> Result<Self> {
        check_codepoint(first)?;
        check_codepoint(last)?;
        if first > last {
            return Err(UcdError::InvalidRange(first, last));
        }
        Ok(Self { first, last })
    }

    /// Creates a range covering exactly one codepoint.
    pub fn single(codepoint: u32) -> Result<Self> {
        Self::new(codepoint, codepoint)
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.first <= codepoint && codepoint <= self.last
    }

    /// Number of codepoints in the range.
    pub fn count(&self) -> u32 {
        self.last - self.first + 1
    }

    /// Compares this range against a codepoint.
    ///
    /// - `Less`: the whole range lies below `codepoint`
    /// - `Equal`: `codepoint` is inside the range
    /// - `Greater`: the whole range lies above `codepoint`
    ///
    /// This is the ordering `slice::binary_search_by` expects from its comparator.
    pub fn compare_codepoint(&self, codepoint: u32) -> Ordering {
        if self.last < codepoint {
            Ordering::Less
        } else if self.first > codepoint {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "U+{:04X}", self.first)
        } else {
            write!(f, "U+{:04X}..U+{:04X}", self.first, self.last)
        }
    }
}

/// Unicode version a snapshot was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion {
    pub major: u16,
    pub minor: u8,
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// All properties recorded for one codepoint or one range of identical codepoints.
///
/// Every field not present in the record holds its UCD default.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterData {
    pub range: CodepointRange,
    /// For range entries, the prefix of the algorithmic name, if any.
    pub name: Option<String>,
    pub category: GeneralCategory,
    pub canonical_combining_class: CanonicalCombiningClass,
    pub bidi_class: BidiClass,
    pub decomposition_tag: DecompositionTag,
    pub decomposition_mapping: Option<String>,
    pub numeric_type: NumericType,
    /// Present exactly when `numeric_type` is not `NumericType::None`.
    pub numeric_value: Option<RationalNumber>,
    pub bidi_mirrored: bool,
    /// Unicode 1.0 name.
    pub old_name: Option<String>,
    pub simple_uppercase_mapping: Option<String>,
    pub simple_lowercase_mapping: Option<String>,
    pub simple_titlecase_mapping: Option<String>,
    pub contributory_properties: ContributoryProperties,
    pub core_properties: CoreProperties,
}

impl CharacterData {
    /// An entry for `range` with every property at its default value.
    pub fn new(range: CodepointRange) -> Self {
        Self {
            range,
            name: None,
            category: GeneralCategory::Unassigned,
            canonical_combining_class: CanonicalCombiningClass::NOT_REORDERED,
            bidi_class: BidiClass::LeftToRight,
            decomposition_tag: DecompositionTag::Canonical,
            decomposition_mapping: None,
            numeric_type: NumericType::None,
            numeric_value: None,
            bidi_mirrored: false,
            old_name: None,
            simple_uppercase_mapping: None,
            simple_lowercase_mapping: None,
            simple_titlecase_mapping: None,
            contributory_properties: ContributoryProperties::empty(),
            core_properties: CoreProperties::empty(),
        }
    }
}

/// A named Unicode block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntry {
    pub range: CodepointRange,
    pub name: String,
}

/// Anything stored in a sorted, non-overlapping range table.
pub trait RangeEntry {
    fn range(&self) -> &CodepointRange;
}

impl RangeEntry for CharacterData {
    fn range(&self) -> &CodepointRange {
        &self.range
    }
}

impl RangeEntry for BlockEntry {
    fn range(&self) -> &CodepointRange {
        &self.range
    }
}
