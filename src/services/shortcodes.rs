//! `:shortcode:` replacement in free text
//!
//! A token is a colon, one or more of `[A-Za-z0-9_+-]`, a closing colon, and
//! optionally a directly following `:skin-tone-N:` with N in 1..=5. Tokens
//! whose name isn't a known shortcode are left exactly as written, so times
//! like `12:30:45` and other colon-heavy text survive untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

use super::skin_tone::SkinTone;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([A-Za-z0-9_+\-]+):(?:(?i::skin-tone-)([1-5]):)?").expect("shortcode regex")
});

/// Name resolution used by the replacer
pub trait ShortcodeLookup {
    /// Whether `name` is any registered shortcode
    fn is_known_name(&self, name: &str) -> bool;

    /// Literal emoji for a known name, using the tone variant when one exists
    fn convert_short_name(&self, name: &str, tone: Option<SkinTone>) -> Option<String>;
}

/// A shortcode-shaped token found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the whole match, skin-tone suffix included
    pub range: Range<usize>,
    /// Lowercased name between the first pair of colons
    pub name: String,
    /// Tone ordinal from the suffix, 0 when absent
    pub tone: u8,
}

impl Token {
    fn from_captures(caps: &Captures<'_>) -> Token {
        // Group 0 and 1 always participate in a match
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        let name = caps
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let tone = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        Token {
            range: whole,
            name,
            tone,
        }
    }

    pub fn skin_tone(&self) -> Option<SkinTone> {
        SkinTone::from_ordinal(self.tone)
    }
}

/// Every token-shaped match, left to right and non-overlapping.
/// Unknown names are included; callers decide what to do with them.
pub fn find_tokens(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .map(|caps| Token::from_captures(&caps))
        .collect()
}

/// Replace every known `:shortcode:` (with optional tone suffix) by its emoji
pub fn replace_colons<L: ShortcodeLookup + ?Sized>(text: &str, lookup: &L) -> String {
    TOKEN_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let token = Token::from_captures(caps);
            let original = caps.get(0).map(|m| m.as_str()).unwrap_or_default();

            if token.name.is_empty() || !lookup.is_known_name(&token.name) {
                return original.to_string();
            }

            lookup
                .convert_short_name(&token.name, token.skin_tone())
                .unwrap_or_else(|| original.to_string())
        })
        .into_owned()
}
