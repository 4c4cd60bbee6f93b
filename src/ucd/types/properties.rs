//! Unicode property value types stored in a snapshot.
//!
//! Enumerated properties are serialized as a single byte each. The byte values are
//! fixed by the snapshot format and must never be reordered.

use std::fmt;
use std::ops::BitOr;

use super::error::{Result, UcdError};

/// Declares a byte-backed property enumeration with its UCD short alias.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $alias:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// All values, in wire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The short property value alias used by the UCD files.
            pub fn abbreviation(self) -> &'static str {
                match self {
                    $( $name::$variant => $alias, )+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UcdError;
            fn try_from(value: u8) -> Result<Self> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    _ => Err(UcdError::InvalidFormat(format!(
                        concat!("Unknown ", $what, ": {}"),
                        value
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.abbreviation())
            }
        }
    };
}

byte_enum! {
    /// General Category (`gc`), UnicodeData.txt field 2.
    pub enum GeneralCategory: "general category" {
        UppercaseLetter = 0 => "Lu",
        LowercaseLetter = 1 => "Ll",
        TitlecaseLetter = 2 => "Lt",
        ModifierLetter = 3 => "Lm",
        OtherLetter = 4 => "Lo",
        NonspacingMark = 5 => "Mn",
        SpacingMark = 6 => "Mc",
        EnclosingMark = 7 => "Me",
        DecimalNumber = 8 => "Nd",
        LetterNumber = 9 => "Nl",
        OtherNumber = 10 => "No",
        SpaceSeparator = 11 => "Zs",
        LineSeparator = 12 => "Zl",
        ParagraphSeparator = 13 => "Zp",
        Control = 14 => "Cc",
        Format = 15 => "Cf",
        Surrogate = 16 => "Cs",
        PrivateUse = 17 => "Co",
        ConnectorPunctuation = 18 => "Pc",
        DashPunctuation = 19 => "Pd",
        OpenPunctuation = 20 => "Ps",
        ClosePunctuation = 21 => "Pe",
        InitialPunctuation = 22 => "Pi",
        FinalPunctuation = 23 => "Pf",
        OtherPunctuation = 24 => "Po",
        MathSymbol = 25 => "Sm",
        CurrencySymbol = 26 => "Sc",
        ModifierSymbol = 27 => "Sk",
        OtherSymbol = 28 => "So",
        /// Cn, also the value of every codepoint without character data.
        Unassigned = 29 => "Cn",
    }
}

impl GeneralCategory {
    /// The long property value alias, e.g. `Uppercase_Letter`.
    pub fn long_name(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            UppercaseLetter => "Uppercase_Letter",
            LowercaseLetter => "Lowercase_Letter",
            TitlecaseLetter => "Titlecase_Letter",
            ModifierLetter => "Modifier_Letter",
            OtherLetter => "Other_Letter",
            NonspacingMark => "Nonspacing_Mark",
            SpacingMark => "Spacing_Mark",
            EnclosingMark => "Enclosing_Mark",
            DecimalNumber => "Decimal_Number",
            LetterNumber => "Letter_Number",
            OtherNumber => "Other_Number",
            SpaceSeparator => "Space_Separator",
            LineSeparator => "Line_Separator",
            ParagraphSeparator => "Paragraph_Separator",
            Control => "Control",
            Format => "Format",
            Surrogate => "Surrogate",
            PrivateUse => "Private_Use",
            ConnectorPunctuation => "Connector_Punctuation",
            DashPunctuation => "Dash_Punctuation",
            OpenPunctuation => "Open_Punctuation",
            ClosePunctuation => "Close_Punctuation",
            InitialPunctuation => "Initial_Punctuation",
            FinalPunctuation => "Final_Punctuation",
            OtherPunctuation => "Other_Punctuation",
            MathSymbol => "Math_Symbol",
            CurrencySymbol => "Currency_Symbol",
            ModifierSymbol => "Modifier_Symbol",
            OtherSymbol => "Other_Symbol",
            Unassigned => "Unassigned",
        }
    }

    /// The major class letter (`L`, `M`, `N`, `Z`, `C`, `P` or `S`).
    pub fn major_class(self) -> char {
        // Every short alias starts with its major class.
        self.abbreviation().as_bytes()[0] as char
    }

    /// `true` for Lu, Ll and Lt (the `LC` group).
    pub fn is_cased_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
        )
    }
}

impl Default for GeneralCategory {
    fn default() -> Self {
        GeneralCategory::Unassigned
    }
}

byte_enum! {
    /// Bidi Class (`bc`), UnicodeData.txt field 4.
    pub enum BidiClass: "bidi class" {
        LeftToRight = 0 => "L",
        RightToLeft = 1 => "R",
        ArabicLetter = 2 => "AL",
        EuropeanNumber = 3 => "EN",
        EuropeanSeparator = 4 => "ES",
        EuropeanTerminator = 5 => "ET",
        ArabicNumber = 6 => "AN",
        CommonSeparator = 7 => "CS",
        NonspacingMark = 8 => "NSM",
        BoundaryNeutral = 9 => "BN",
        ParagraphSeparator = 10 => "B",
        SegmentSeparator = 11 => "S",
        WhiteSpace = 12 => "WS",
        OtherNeutral = 13 => "ON",
        LeftToRightEmbedding = 14 => "LRE",
        LeftToRightOverride = 15 => "LRO",
        RightToLeftEmbedding = 16 => "RLE",
        RightToLeftOverride = 17 => "RLO",
        PopDirectionalFormat = 18 => "PDF",
        LeftToRightIsolate = 19 => "LRI",
        RightToLeftIsolate = 20 => "RLI",
        FirstStrongIsolate = 21 => "FSI",
        PopDirectionalIsolate = 22 => "PDI",
    }
}

impl Default for BidiClass {
    fn default() -> Self {
        BidiClass::LeftToRight
    }
}

byte_enum! {
    /// Decomposition type, the `<tag>` prefix of UnicodeData.txt field 5.
    pub enum DecompositionTag: "decomposition tag" {
        /// No tag: the mapping is canonical.
        Canonical = 0 => "",
        Font = 1 => "<font>",
        NoBreak = 2 => "<noBreak>",
        Initial = 3 => "<initial>",
        Medial = 4 => "<medial>",
        Final = 5 => "<final>",
        Isolated = 6 => "<isolated>",
        Circle = 7 => "<circle>",
        Super = 8 => "<super>",
        Sub = 9 => "<sub>",
        Vertical = 10 => "<vertical>",
        Wide = 11 => "<wide>",
        Narrow = 12 => "<narrow>",
        Small = 13 => "<small>",
        Square = 14 => "<square>",
        Fraction = 15 => "<fraction>",
        Compat = 16 => "<compat>",
    }
}

impl DecompositionTag {
    pub fn is_compatibility(self) -> bool {
        self != DecompositionTag::Canonical
    }
}

impl Default for DecompositionTag {
    fn default() -> Self {
        DecompositionTag::Canonical
    }
}

/// Canonical Combining Class (`ccc`), UnicodeData.txt field 3.
///
/// Every byte is a valid class; the named positions from UAX #44 are exposed as constants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalCombiningClass(pub u8);

impl CanonicalCombiningClass {
    pub const NOT_REORDERED: Self = Self(0);
    pub const OVERLAY: Self = Self(1);
    pub const HAN_READING: Self = Self(6);
    pub const NUKTA: Self = Self(7);
    pub const KANA_VOICING: Self = Self(8);
    pub const VIRAMA: Self = Self(9);
    pub const ATTACHED_BELOW_LEFT: Self = Self(200);
    pub const ATTACHED_BELOW: Self = Self(202);
    pub const ATTACHED_ABOVE: Self = Self(214);
    pub const ATTACHED_ABOVE_RIGHT: Self = Self(216);
    pub const BELOW_LEFT: Self = Self(218);
    pub const BELOW: Self = Self(220);
    pub const BELOW_RIGHT: Self = Self(222);
    pub const LEFT: Self = Self(224);
    pub const RIGHT: Self = Self(226);
    pub const ABOVE_LEFT: Self = Self(228);
    pub const ABOVE: Self = Self(230);
    pub const ABOVE_RIGHT: Self = Self(232);
    pub const DOUBLE_BELOW: Self = Self(233);
    pub const DOUBLE_ABOVE: Self = Self(234);
    pub const IOTA_SUBSCRIPT: Self = Self(240);

    /// Starters have class 0 and never reorder.
    pub fn is_starter(self) -> bool {
        self.0 == 0
    }

    /// Classes 10..=199 are fixed-position classes.
    pub fn is_fixed_position(self) -> bool {
        (10..=199).contains(&self.0)
    }
}

impl From<u8> for CanonicalCombiningClass {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Numeric Type (`nt`), selected by bits 6-7 of the record presence mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NumericType {
    #[default]
    None = 0,
    Decimal = 1,
    Digit = 2,
    Numeric = 3,
}

impl NumericType {
    /// Decodes the 2-bit numeric type subfield. Only the low two bits are considered.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => NumericType::None,
            1 => NumericType::Decimal,
            2 => NumericType::Digit,
            _ => NumericType::Numeric,
        }
    }
}

/// An exact Numeric Value (`nv`), e.g. `1/3` for U+2153 VULGAR FRACTION ONE THIRD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalNumber {
    pub numerator: i64,
    pub denominator: u8,
}

impl RationalNumber {
    /// Creates a rational number, rejecting a zero denominator.
    pub fn new(numerator: i64, denominator: u8) -> Result<Self> {
        if denominator == 0 {
            return Err(UcdError::InvalidFormat(format!(
                "Numeric value {}/0 has a zero denominator",
                numerator
            )));
        }
        Ok(Self { numerator, denominator })
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Lossy floating-point view. Use the fields for exact arithmetic.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / f64::from(self.denominator)
    }
}

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Declares a flag set newtype whose bit `n` is the `n`-th listed property.
macro_rules! property_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $( $flag:ident = $bit:literal => $prop:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name($repr);

        impl $name {
            $( pub const $flag: Self = Self(1 << $bit); )+

            const NAMES: &'static [(&'static str, $repr)] = &[$(($prop, 1 << $bit)),+];

            pub const fn empty() -> Self {
                Self(0)
            }

            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// `true` if every flag of `other` is also set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// UCD names of the set properties, in bit order.
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMES
                    .iter()
                    .filter(move |(_, bit)| self.0 & bit != 0)
                    .map(|(name, _)| *name)
            }
        }

        impl BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}

property_flags! {
    /// Binary properties from PropList.txt, one bit each.
    pub struct ContributoryProperties(u32) {
        ASCII_HEX_DIGIT = 0 => "ASCII_Hex_Digit",
        BIDI_CONTROL = 1 => "Bidi_Control",
        DASH = 2 => "Dash",
        DEPRECATED = 3 => "Deprecated",
        DIACRITIC = 4 => "Diacritic",
        EXTENDER = 5 => "Extender",
        HEX_DIGIT = 6 => "Hex_Digit",
        HYPHEN = 7 => "Hyphen",
        IDEOGRAPHIC = 8 => "Ideographic",
        IDS_BINARY_OPERATOR = 9 => "IDS_Binary_Operator",
        IDS_TRINARY_OPERATOR = 10 => "IDS_Trinary_Operator",
        JOIN_CONTROL = 11 => "Join_Control",
        LOGICAL_ORDER_EXCEPTION = 12 => "Logical_Order_Exception",
        NONCHARACTER_CODE_POINT = 13 => "Noncharacter_Code_Point",
        OTHER_ALPHABETIC = 14 => "Other_Alphabetic",
        OTHER_DEFAULT_IGNORABLE_CODE_POINT = 15 => "Other_Default_Ignorable_Code_Point",
        OTHER_GRAPHEME_EXTEND = 16 => "Other_Grapheme_Extend",
        OTHER_ID_CONTINUE = 17 => "Other_ID_Continue",
        OTHER_ID_START = 18 => "Other_ID_Start",
        OTHER_LOWERCASE = 19 => "Other_Lowercase",
        OTHER_MATH = 20 => "Other_Math",
        OTHER_UPPERCASE = 21 => "Other_Uppercase",
        PATTERN_SYNTAX = 22 => "Pattern_Syntax",
        PATTERN_WHITE_SPACE = 23 => "Pattern_White_Space",
        QUOTATION_MARK = 24 => "Quotation_Mark",
        RADICAL = 25 => "Radical",
        SOFT_DOTTED = 26 => "Soft_Dotted",
        STERM = 27 => "STerm",
        TERMINAL_PUNCTUATION = 28 => "Terminal_Punctuation",
        UNIFIED_IDEOGRAPH = 29 => "Unified_Ideograph",
        VARIATION_SELECTOR = 30 => "Variation_Selector",
        WHITE_SPACE = 31 => "White_Space",
    }
}

property_flags! {
    /// Derived properties from DerivedCoreProperties.txt. Serialized in 24 bits.
    pub struct CoreProperties(u32) {
        MATH = 0 => "Math",
        ALPHABETIC = 1 => "Alphabetic",
        LOWERCASE = 2 => "Lowercase",
        UPPERCASE = 3 => "Uppercase",
        CASED = 4 => "Cased",
        CASE_IGNORABLE = 5 => "Case_Ignorable",
        CHANGES_WHEN_LOWERCASED = 6 => "Changes_When_Lowercased",
        CHANGES_WHEN_UPPERCASED = 7 => "Changes_When_Uppercased",
        CHANGES_WHEN_TITLECASED = 8 => "Changes_When_Titlecased",
        CHANGES_WHEN_CASEFOLDED = 9 => "Changes_When_Casefolded",
        CHANGES_WHEN_CASEMAPPED = 10 => "Changes_When_Casemapped",
        ID_START = 11 => "ID_Start",
        ID_CONTINUE = 12 => "ID_Continue",
        XID_START = 13 => "XID_Start",
        XID_CONTINUE = 14 => "XID_Continue",
        DEFAULT_IGNORABLE_CODE_POINT = 15 => "Default_Ignorable_Code_Point",
        GRAPHEME_EXTEND = 16 => "Grapheme_Extend",
        GRAPHEME_BASE = 17 => "Grapheme_Base",
        GRAPHEME_LINK = 18 => "Grapheme_Link",
    }
}
