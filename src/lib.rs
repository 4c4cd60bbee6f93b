//! # ucd-snapshot
//!
//! A reader for compact binary snapshots of the Unicode Character Database.
//! Decodes the snapshot once into immutable tables and answers per-codepoint
//! property queries and block lookups with a binary search.
//!
//! ```no_run
//! # use ucd_snapshot::UnicodeData;
//! let bytes = std::fs::read("ucd.bin").unwrap();
//! let data = UnicodeData::from_bytes(&bytes).unwrap();
//! let info = data.char_info(0x41).unwrap();
//! println!("{:?} {} {:?}", info.name(), info.category(), info.block());
//! ```
pub mod ucd;

// Re-export the main types for convenience
pub use ucd::{
    CharInfo, Compression, LoadOptions, Result, UcdError, UnicodeData, VersionCheck,
    types::{
        models::{BlockEntry, CharacterData, CodepointRange, MAX_CODEPOINT, UnicodeVersion},
        properties::{
            BidiClass, CanonicalCombiningClass, ContributoryProperties, CoreProperties,
            DecompositionTag, GeneralCategory, NumericType, RationalNumber,
        },
    },
};
