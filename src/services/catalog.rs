//! Catalog loading for the emoji dataset
//!
//! The raw dataset is an array of emoji-datasource style objects. Each element
//! is parsed and validated on its own: anything that fails to deserialize or
//! validate is dropped, and only records with image support on the target
//! platform are kept. Output order follows input order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use super::categories::CategoryTag;
use super::codepoint;
use super::skin_tone::SkinTone;
use crate::error::MojiResult;

/// Image set an emoji must have artwork in to be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Apple,
    Google,
    Twitter,
    Emojione,
    Facebook,
    Messenger,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Apple => "apple",
            Platform::Google => "google",
            Platform::Twitter => "twitter",
            Platform::Emojione => "emojione",
            Platform::Facebook => "facebook",
            Platform::Messenger => "messenger",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform image support flags, as they appear in the dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSupport {
    #[serde(default)]
    pub has_img_apple: bool,
    #[serde(default)]
    pub has_img_google: bool,
    #[serde(default)]
    pub has_img_twitter: bool,
    #[serde(default)]
    pub has_img_emojione: bool,
    #[serde(default)]
    pub has_img_facebook: bool,
    #[serde(default)]
    pub has_img_messenger: bool,
}

impl PlatformSupport {
    pub fn supports(&self, platform: Platform) -> bool {
        match platform {
            Platform::Apple => self.has_img_apple,
            Platform::Google => self.has_img_google,
            Platform::Twitter => self.has_img_twitter,
            Platform::Emojione => self.has_img_emojione,
            Platform::Facebook => self.has_img_facebook,
            Platform::Messenger => self.has_img_messenger,
        }
    }
}

/// A skin variation exactly as the dataset ships it
#[derive(Debug, Clone, Deserialize)]
pub struct RawVariation {
    pub unified: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub support: PlatformSupport,
}

/// One dataset element before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawEmoji {
    #[serde(default)]
    pub name: Option<String>,
    pub unified: String,
    #[serde(default)]
    pub image: Option<String>,
    pub short_name: String,
    #[serde(default)]
    pub short_names: Option<Vec<Option<String>>>,
    pub category: String,
    pub sort_order: u32,
    #[serde(flatten)]
    pub support: PlatformSupport,
    #[serde(default)]
    pub skin_variations: Option<BTreeMap<String, RawVariation>>,
}

/// A skin-tone specific rendering of an [`EmojiRecord`].
/// It has no name and is only reachable through its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub unified: String,
    pub image: String,
    pub support: PlatformSupport,
}

/// A validated base emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    /// Canonical (descriptive) name, e.g. "THUMBS UP SIGN"
    pub name: String,
    /// Primary shortcode
    pub short_name: String,
    /// Every shortcode, usually including the primary one
    pub short_names: Vec<String>,
    pub unified: String,
    pub image: String,
    /// Raw category label from the source taxonomy
    pub category: String,
    pub sort_order: u32,
    pub support: PlatformSupport,
    pub skin_variations: BTreeMap<SkinTone, VariantRecord>,
}

impl EmojiRecord {
    /// Variant for a tone, if this emoji has one
    pub fn variant(&self, tone: SkinTone) -> Option<&VariantRecord> {
        self.skin_variations.get(&tone)
    }

    pub fn has_variations(&self) -> bool {
        !self.skin_variations.is_empty()
    }

    /// Canonical category this record is grouped under
    pub fn category_tag(&self) -> CategoryTag {
        CategoryTag::from_label(&self.category)
    }
}

/// Image file name the dataset would use for a sequence
fn default_image(unified: &str) -> String {
    format!("{}.png", unified.to_lowercase())
}

fn validate_variations(
    short_name: &str,
    raw: Option<BTreeMap<String, RawVariation>>,
) -> BTreeMap<SkinTone, VariantRecord> {
    let mut variations = BTreeMap::new();

    for (key, variation) in raw.unwrap_or_default() {
        // Multi-person emoji key variations by tone pairs; only single tones are addressable
        let Ok(tone) = SkinTone::from_str(&key) else {
            tracing::debug!(short_name, key = %key, "skipping skin variation with unknown tone key");
            continue;
        };
        if codepoint::parse_unified(&variation.unified).is_none() {
            tracing::debug!(short_name, key = %key, "skipping skin variation with bad code points");
            continue;
        }
        let image = variation
            .image
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| default_image(&variation.unified));
        variations.insert(
            tone,
            VariantRecord {
                unified: variation.unified,
                image,
                support: variation.support,
            },
        );
    }

    variations
}

impl TryFrom<RawEmoji> for EmojiRecord {
    type Error = &'static str;

    fn try_from(raw: RawEmoji) -> Result<Self, Self::Error> {
        // Keys are registered verbatim, only blank ones are rejected
        let short_name = raw.short_name;
        if short_name.trim().is_empty() {
            return Err("empty short name");
        }
        if codepoint::parse_unified(&raw.unified).is_none() {
            return Err("undecodable unified code points");
        }

        let short_names: Vec<String> = raw
            .short_names
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .collect();

        let name = raw
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| short_name.clone());
        let image = raw
            .image
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| default_image(&raw.unified));
        let skin_variations = validate_variations(&short_name, raw.skin_variations);

        Ok(EmojiRecord {
            name,
            short_name,
            short_names,
            unified: raw.unified,
            image,
            category: raw.category,
            sort_order: raw.sort_order,
            support: raw.support,
            skin_variations,
        })
    }
}

/// Deserialize dataset elements one by one, dropping the ones that don't fit
pub fn parse_records(values: Vec<serde_json::Value>) -> Vec<RawEmoji> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value(value) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::debug!(position, error = %e, "dropping malformed dataset element");
                None
            }
        })
        .collect()
}

/// Keep the records supported on `platform`, validated into typed records
pub fn load(raw: Vec<RawEmoji>, platform: Platform) -> Vec<EmojiRecord> {
    let total = raw.len();
    let records: Vec<EmojiRecord> = raw
        .into_iter()
        .filter(|emoji| emoji.support.supports(platform))
        .filter_map(|emoji| {
            let short_name = emoji.short_name.clone();
            match EmojiRecord::try_from(emoji) {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::debug!(short_name = %short_name, reason, "dropping invalid emoji");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(%platform, total, kept = records.len(), "loaded emoji catalog");
    records
}

/// Load a catalog from a JSON document
pub fn load_json(json: &str, platform: Platform) -> MojiResult<Vec<EmojiRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(load(parse_records(values), platform))
}

/// Load a catalog from any reader producing a JSON document
pub fn load_reader<R: Read>(reader: R, platform: Platform) -> MojiResult<Vec<EmojiRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    Ok(load(parse_records(values), platform))
}

/// Load a catalog from a JSON file on disk
pub fn load_path(path: &Path, platform: Platform) -> MojiResult<Vec<EmojiRecord>> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file), platform)
}
