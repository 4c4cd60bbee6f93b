//! Algorithmic character names and display text.
//!
//! Names of Hangul syllables and of codepoints inside range entries are not stored
//! in the snapshot; they are derived with the rules NR1 and NR2 of the Unicode
//! Standard, chapter 4.8.

use super::types::properties::GeneralCategory;

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_L_COUNT: u32 = 19;
const HANGUL_V_COUNT: u32 = 21;
const HANGUL_T_COUNT: u32 = 28;
const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
const HANGUL_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI",
    "YU", "EU", "YI", "I",
];
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B",
    "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// Control Pictures start at U+2400 for NUL; U+2421 pictures DEL.
const CONTROL_PICTURES_BASE: u32 = 0x2400;
const DELETE_PICTURE: char = '\u{2421}';
const DOTTED_CIRCLE: char = '\u{25CC}';

pub fn is_hangul_syllable(codepoint: u32) -> bool {
    (HANGUL_BASE..HANGUL_BASE + HANGUL_COUNT).contains(&codepoint)
}

/// NR1: `HANGUL SYLLABLE ` followed by the short names of the syllable's jamo.
pub fn hangul_syllable_name(codepoint: u32) -> Option<String> {
    if !is_hangul_syllable(codepoint) {
        return None;
    }
    let index = codepoint - HANGUL_BASE;
    let l = (index / HANGUL_N_COUNT) as usize;
    let v = (index % HANGUL_N_COUNT / HANGUL_T_COUNT) as usize;
    let t = (index % HANGUL_T_COUNT) as usize;
    Some(format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l], JAMO_V[v], JAMO_T[t]))
}

/// NR2: the entry's name prefix followed by the codepoint in hex,
/// e.g. `CJK UNIFIED IDEOGRAPH-4E00`.
pub fn range_member_name(prefix: &str, codepoint: u32) -> String {
    format!("{}{:04X}", prefix, codepoint)
}

/// Text suitable for rendering a single codepoint on its own.
pub fn display_text(codepoint: u32, category: GeneralCategory) -> String {
    let Some(ch) = char::from_u32(codepoint) else {
        return char::REPLACEMENT_CHARACTER.to_string();
    };
    match codepoint {
        0x00..=0x1F => char::from_u32(CONTROL_PICTURES_BASE + codepoint)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        0x7F => DELETE_PICTURE.to_string(),
        _ => match category {
            GeneralCategory::NonspacingMark | GeneralCategory::EnclosingMark => {
                [DOTTED_CIRCLE, ch].iter().collect()
            }
            _ => ch.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_names() {
        assert_eq!(hangul_syllable_name(0xAC00).as_deref(), Some("HANGUL SYLLABLE GA"));
        assert_eq!(hangul_syllable_name(0xAC01).as_deref(), Some("HANGUL SYLLABLE GAG"));
        assert_eq!(hangul_syllable_name(0xD4DB).as_deref(), Some("HANGUL SYLLABLE PWILH"));
        assert_eq!(hangul_syllable_name(0xD7A3).as_deref(), Some("HANGUL SYLLABLE HIH"));
        assert_eq!(hangul_syllable_name(0xC544).as_deref(), Some("HANGUL SYLLABLE A"));
        assert!(hangul_syllable_name(0xABFF).is_none());
        assert!(hangul_syllable_name(0xD7A4).is_none());
    }

    #[test]
    fn range_names_use_at_least_four_hex_digits() {
        const CJK: &str = "CJK UNIFIED IDEOGRAPH-";
        assert_eq!(range_member_name(CJK, 0x4E00), "CJK UNIFIED IDEOGRAPH-4E00");
        assert_eq!(range_member_name(CJK, 0x20000), "CJK UNIFIED IDEOGRAPH-20000");
        assert_eq!(range_member_name("TANGUT IDEOGRAPH-", 0x17000), "TANGUT IDEOGRAPH-17000");
    }

    #[test]
    fn display_text_variants() {
        assert_eq!(display_text(0x00, GeneralCategory::Control), "\u{2400}");
        assert_eq!(display_text(0x0A, GeneralCategory::Control), "\u{240A}");
        assert_eq!(display_text(0x7F, GeneralCategory::Control), "\u{2421}");
        assert_eq!(display_text(0x0301, GeneralCategory::NonspacingMark), "\u{25CC}\u{0301}");
        assert_eq!(display_text(0xD800, GeneralCategory::Surrogate), "\u{FFFD}");
        assert_eq!(display_text(0x41, GeneralCategory::UppercaseLetter), "A");
    }
}
