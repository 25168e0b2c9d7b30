//! The assembled, immutable emoji index
//!
//! [`EmojiIndex`] owns the filtered catalog and every index derived from it.
//! It is built once and only read afterwards, so a shared reference (or an
//! `Arc`) can serve any number of threads without locking.

use std::path::Path;

use crate::config::Config;
use crate::error::MojiResult;
use crate::services::catalog::{self, EmojiRecord, RawEmoji};
use crate::services::categories::{CategoryIndex, CategoryTag};
use crate::services::codepoint;
use crate::services::images::ImageSource;
use crate::services::names::NameIndex;
use crate::services::search_index::{SearchIndex, SearchOptions};
use crate::services::shortcodes::{self, ShortcodeLookup, Token};
use crate::services::skin_tone::{self, Glyph, Resolved, SkinTone};

pub struct EmojiIndex {
    records: Vec<EmojiRecord>,
    names: NameIndex,
    categories: CategoryIndex,
    search: SearchIndex,
    images: ImageSource,
}

impl EmojiIndex {
    /// Build every index from an already filtered catalog
    pub fn new(records: Vec<EmojiRecord>, config: &Config) -> Self {
        let names = NameIndex::build(&records);
        let categories = CategoryIndex::build(&records);
        let search = SearchIndex::build(&records, config.search.clone());

        tracing::info!(
            records = records.len(),
            names = names.len(),
            categories = categories.len(),
            "built emoji index"
        );

        Self {
            records,
            names,
            categories,
            search,
            images: config.images.clone(),
        }
    }

    /// Filter raw dataset records for the configured platform, then index them
    pub fn from_raw(raw: Vec<RawEmoji>, config: &Config) -> Self {
        Self::new(catalog::load(raw, config.catalog.platform), config)
    }

    pub fn from_json(json: &str, config: &Config) -> MojiResult<Self> {
        let records = catalog::load_json(json, config.catalog.platform)?;
        Ok(Self::new(records, config))
    }

    pub fn from_path(path: &Path, config: &Config) -> MojiResult<Self> {
        let records = catalog::load_path(path, config.catalog.platform)?;
        Ok(Self::new(records, config))
    }

    /// The filtered catalog in dataset order
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record registered under a shortcode or alias
    pub fn lookup(&self, name: &str) -> Option<&EmojiRecord> {
        self.names.lookup(name).map(|position| &self.records[position])
    }

    pub fn is_known_name(&self, name: &str) -> bool {
        self.names.is_known_name(name)
    }

    /// Variant for `tone`, or the record itself when there is none
    pub fn resolve<'a>(&self, record: &'a EmojiRecord, tone: Option<SkinTone>) -> Resolved<'a> {
        skin_tone::resolve(record, tone)
    }

    /// True only when `name` is known and has a real variant for `tone`
    pub fn has_variant(&self, name: &str, tone: Option<SkinTone>) -> bool {
        match (self.lookup(name), tone) {
            (Some(record), Some(tone)) => record.variant(tone).is_some(),
            _ => false,
        }
    }

    pub fn to_literal<G: Glyph + ?Sized>(&self, glyph: &G) -> String {
        skin_tone::to_literal(glyph)
    }

    /// Literal emoji for a shortcode.
    /// `None` for unknown names and for glyphs whose code points don't decode.
    pub fn convert_short_name(&self, name: &str, tone: Option<SkinTone>) -> Option<String> {
        let record = self.lookup(name)?;
        codepoint::unified_to_literal(self.resolve(record, tone).unified())
    }

    /// Image path for a shortcode's glyph, `None` for unknown names
    pub fn image_path(&self, name: &str, tone: Option<SkinTone>) -> Option<String> {
        self.lookup(name)
            .map(|record| self.images.path_for(&self.resolve(record, tone)))
    }

    /// Replace every known `:shortcode:` in `text` with its emoji
    pub fn replace(&self, text: &str) -> String {
        shortcodes::replace_colons(text, self)
    }

    /// Shortcode-shaped tokens in `text` that name a known emoji
    pub fn known_tokens(&self, text: &str) -> Vec<Token> {
        shortcodes::find_tokens(text)
            .into_iter()
            .filter(|token| self.is_known_name(&token.name))
            .collect()
    }

    /// Fuzzy search over names and aliases, best match first
    pub fn search(&self, query: &str) -> Vec<&EmojiRecord> {
        self.search
            .search(query)
            .into_iter()
            .map(|position| &self.records[position])
            .collect()
    }

    pub fn search_options(&self) -> &SearchOptions {
        self.search.options()
    }

    /// Records in one category, ordered by `sort_order`
    pub fn category(&self, tag: CategoryTag) -> Vec<&EmojiRecord> {
        self.categories
            .get(tag)
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Every non-empty category with its ordered records
    pub fn categories(&self) -> Vec<(CategoryTag, Vec<&EmojiRecord>)> {
        self.categories
            .iter()
            .map(|(tag, positions)| {
                let records = positions.iter().map(|&p| &self.records[p]).collect();
                (tag, records)
            })
            .collect()
    }
}

impl ShortcodeLookup for EmojiIndex {
    fn is_known_name(&self, name: &str) -> bool {
        EmojiIndex::is_known_name(self, name)
    }

    fn convert_short_name(&self, name: &str, tone: Option<SkinTone>) -> Option<String> {
        EmojiIndex::convert_short_name(self, name, tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::index;

    #[test]
    fn test_lookup() {
        let index = index();
        let thumbs = index.lookup("thumbsup").unwrap();
        assert_eq!(thumbs.short_name, "+1");
        assert_eq!(index.lookup("+1"), Some(thumbs));
        assert!(index.lookup("nope").is_none());
    }

    #[test]
    fn test_has_variant() {
        let index = index();
        assert!(index.has_variant("thumbsup", Some(SkinTone::Light)));
        assert!(!index.has_variant("thumbsup", None));
        assert!(!index.has_variant("grinning", Some(SkinTone::Light)));
        assert!(!index.has_variant("nope", Some(SkinTone::Light)));
        assert!(!index.has_variant("couple", Some(SkinTone::Light)));
        assert!(index.has_variant("couple", Some(SkinTone::Dark)));
    }

    #[test]
    fn test_has_variant_agrees_with_resolve() {
        let index = index();
        for record in index.records() {
            // Primary names can be shadowed by aliases, so go through lookup
            let owner = index.lookup(&record.short_name).unwrap();
            for tone in SkinTone::ALL {
                assert_eq!(
                    index.resolve(owner, Some(tone)).is_variant(),
                    index.has_variant(&record.short_name, Some(tone))
                );
            }
        }
    }

    #[test]
    fn test_replace() {
        let index = index();
        assert_eq!(index.replace("Hi :thumbsup: there"), "Hi \u{1f44d} there");
        assert_eq!(
            index.replace("Hi :thumbsup::skin-tone-2: there"),
            "Hi \u{1f44d}\u{1f3fc} there"
        );
        assert_eq!(index.replace(":not-a-real-emoji:"), ":not-a-real-emoji:");
        assert_eq!(index.replace(""), "");
        assert_eq!(index.replace("at 10:15:00"), "at 10:15:00");
    }

    #[test]
    fn test_replace_multi_code_point() {
        let index = index();
        assert_eq!(index.replace(":heart: :flag-us:"), "\u{2764}\u{fe0f} \u{1f1fa}\u{1f1f8}");
    }

    #[test]
    fn test_replace_standalone_modifier_token() {
        let index = index();
        assert_eq!(index.replace(":skin-tone-2:"), "\u{1f3fc}");
    }

    #[test]
    fn test_known_tokens() {
        let index = index();
        let tokens = index.known_tokens(":smile: :nope: :+1::skin-tone-3:");
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["smile", "+1"]);
        assert_eq!(tokens[1].skin_tone(), Some(SkinTone::Medium));
    }

    #[test]
    fn test_convert_short_name() {
        let index = index();
        assert_eq!(
            index.convert_short_name("+1", Some(SkinTone::Dark)).as_deref(),
            Some("\u{1f44d}\u{1f3ff}")
        );
        assert_eq!(
            index.convert_short_name("grinning", Some(SkinTone::Dark)).as_deref(),
            Some("\u{1f600}")
        );
        assert_eq!(index.convert_short_name("nope", None), None);
    }

    #[test]
    fn test_undecodable_record_leaves_token_in_place() {
        let mut records = index().records().to_vec();
        let grinning = records.iter_mut().find(|r| r.short_name == "grinning").unwrap();
        grinning.unified = "ZZZ".to_string();

        let index = EmojiIndex::new(records, &Config::default());
        assert_eq!(index.convert_short_name("grinning", None), None);
        assert_eq!(index.replace("a :grinning: b"), "a :grinning: b");
        assert_eq!(index.replace(":grinning: :smile:"), ":grinning: \u{1f604}");
    }

    #[test]
    fn test_image_path() {
        let index = index();
        assert_eq!(
            index.image_path("thumbsup", Some(SkinTone::Medium)).as_deref(),
            Some("node_modules/emoji-datasource-apple/img/apple/64/1f44d-1f3fd.png")
        );
        assert_eq!(
            index.image_path("thumbsup", None).as_deref(),
            Some("node_modules/emoji-datasource-apple/img/apple/64/1f44d.png")
        );
        assert_eq!(index.image_path("nope", None), None);
    }

    #[test]
    fn test_search() {
        let index = index();
        assert!(index.search("").is_empty());
        let results = index.search("pizza");
        assert_eq!(results.first().map(|r| r.short_name.as_str()), Some("pizza"));
    }

    #[test]
    fn test_categories() {
        let index = index();
        let total: usize = index.categories().iter().map(|(_, r)| r.len()).sum();
        assert_eq!(total, index.len());

        let emoji: Vec<&str> = index
            .category(CategoryTag::Emoji)
            .iter()
            .map(|r| r.short_name.as_str())
            .collect();
        assert_eq!(
            emoji,
            vec!["grinning", "smile", "smiley", "sweat_smile", "thinking_face", "couple", "+1", "-1"]
        );
        assert_eq!(
            index.category(CategoryTag::Misc)[0].short_name,
            "skin-tone-2"
        );
    }

    #[test]
    fn test_platform_from_config() {
        let mut config = Config::default();
        config.catalog.platform = catalog::Platform::Google;
        let index = EmojiIndex::from_json(crate::test_support::FIXTURE, &config).unwrap();
        assert!(index.is_known_name("apple_only_missing"));
        assert!(!index.is_known_name("smile"));
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EmojiIndex>();
    }
}
