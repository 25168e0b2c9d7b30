//! Skin-tone selection and variant resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::{EmojiRecord, VariantRecord};
use super::codepoint;

/// One of the five Fitzpatrick modifiers.
/// Ordinals run 1..=5 in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    #[serde(rename = "1F3FB")]
    Light,
    #[serde(rename = "1F3FC")]
    MediumLight,
    #[serde(rename = "1F3FD")]
    Medium,
    #[serde(rename = "1F3FE")]
    MediumDark,
    #[serde(rename = "1F3FF")]
    Dark,
}

impl SkinTone {
    /// All tones in ordinal order
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// Map a 1-based ordinal to a tone.
    ///
    /// `0` means "no selection". Ordinals above 5 are a caller error and are
    /// treated as no selection as well.
    pub fn from_ordinal(ordinal: u8) -> Option<SkinTone> {
        match ordinal {
            1..=5 => Some(Self::ALL[usize::from(ordinal) - 1]),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            SkinTone::Light => 1,
            SkinTone::MediumLight => 2,
            SkinTone::Medium => 3,
            SkinTone::MediumDark => 4,
            SkinTone::Dark => 5,
        }
    }

    /// Modifier code point as used for variation keys
    pub fn code(&self) -> &'static str {
        match self {
            SkinTone::Light => "1F3FB",
            SkinTone::MediumLight => "1F3FC",
            SkinTone::Medium => "1F3FD",
            SkinTone::MediumDark => "1F3FE",
            SkinTone::Dark => "1F3FF",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SkinTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown skin tone code: {}", s))
    }
}

/// Anything that renders as a single emoji glyph
pub trait Glyph {
    /// Hyphen-joined hex code points
    fn unified(&self) -> &str;

    /// Image file name for this glyph
    fn image(&self) -> &str;

    /// The literal character sequence, empty if the code points don't decode.
    /// Records from the catalog loader always decode.
    fn to_literal(&self) -> String {
        codepoint::unified_to_literal(self.unified()).unwrap_or_default()
    }
}

impl Glyph for EmojiRecord {
    fn unified(&self) -> &str {
        &self.unified
    }

    fn image(&self) -> &str {
        &self.image
    }
}

impl Glyph for VariantRecord {
    fn unified(&self) -> &str {
        &self.unified
    }

    fn image(&self) -> &str {
        &self.image
    }
}

/// Outcome of resolving a record against a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Base(&'a EmojiRecord),
    Variant(&'a VariantRecord),
}

impl Resolved<'_> {
    pub fn is_variant(&self) -> bool {
        matches!(self, Resolved::Variant(_))
    }
}

impl Glyph for Resolved<'_> {
    fn unified(&self) -> &str {
        match self {
            Resolved::Base(record) => record.unified(),
            Resolved::Variant(variant) => variant.unified(),
        }
    }

    fn image(&self) -> &str {
        match self {
            Resolved::Base(record) => record.image(),
            Resolved::Variant(variant) => variant.image(),
        }
    }
}

/// Pick the variant for `tone`, falling back to the base record
pub fn resolve(record: &EmojiRecord, tone: Option<SkinTone>) -> Resolved<'_> {
    tone.and_then(|tone| record.variant(tone))
        .map(Resolved::Variant)
        .unwrap_or(Resolved::Base(record))
}

/// Decode any glyph into its literal characters
pub fn to_literal<G: Glyph + ?Sized>(glyph: &G) -> String {
    glyph.to_literal()
}
