//! Typo-tolerant emoji search
//!
//! Each record contributes one or more key fields (descriptive name, primary
//! shortcode, aliases). A field matches a query when either:
//!
//! - the whole query occurs in it, scored by how far in it starts
//!   (`offset / distance`), or
//! - every query token is within a small edit distance of some field token
//!   (or of that token's prefix), scored by the mean normalized distance.
//!
//! Scores run from 0.0 (perfect) upward; fields scoring above `threshold` are
//! discarded. Exact field matches always rank first, then lower scores, then
//! the skim fuzzy score, then catalog order.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::catalog::EmojiRecord;
use crate::error::{MojiError, MojiResult};

/// Default pattern splitting compound names into tokens
pub const DEFAULT_TOKEN_SEPARATORS: &str = r"[-_\s]+";

/// Record field that participates in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKey {
    /// Descriptive name, e.g. "THUMBS UP SIGN"
    Name,
    /// Primary shortcode
    ShortName,
    /// Every alias shortcode
    ShortNames,
}

/// Tunables for the search index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Match strictness; lower is stricter. 0.2 lets a 5 character token carry one typo.
    pub threshold: f64,
    /// Regex splitting names and queries into independently matched tokens
    pub token_separators: String,
    /// Fields indexed for matching
    pub keys: Vec<SearchKey>,
    /// Queries longer than this many characters are truncated
    pub max_pattern_length: usize,
    /// How quickly a substring match loses score the later it starts
    pub distance: usize,
    /// Optional cap on returned results
    pub max_results: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            token_separators: DEFAULT_TOKEN_SEPARATORS.to_string(),
            keys: vec![SearchKey::Name, SearchKey::ShortName, SearchKey::ShortNames],
            max_pattern_length: 32,
            distance: 100,
            max_results: None,
        }
    }
}

impl SearchOptions {
    /// Clamp values to usable ranges
    pub fn validate(&mut self) {
        if !self.threshold.is_finite() {
            self.threshold = Self::default().threshold;
        }
        self.threshold = self.threshold.clamp(0.0, 1.0);
        self.max_pattern_length = self.max_pattern_length.clamp(1, 64);
        self.distance = self.distance.max(1);
        if self.keys.is_empty() {
            self.keys = Self::default().keys;
        }
    }

    /// Compile `token_separators`
    pub fn separator_regex(&self) -> MojiResult<Regex> {
        Regex::new(&self.token_separators).map_err(|e| {
            MojiError::Config(format!(
                "invalid token separator pattern {:?}: {}",
                self.token_separators, e
            ))
        })
    }
}

/// A token with its length in characters
struct Token {
    text: String,
    chars: usize,
}

/// One searchable string of a record
struct SearchField {
    text: String,
    tokens: Vec<Token>,
}

struct SearchEntry {
    position: usize,
    fields: Vec<SearchField>,
}

/// Best match of a query against one record
#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: usize,
    exact: bool,
    score: f64,
    fuzzy: i64,
}

/// Fuzzy index over the catalog's name fields, built once
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    separators: Regex,
    options: SearchOptions,
    matcher: SkimMatcherV2,
}

impl SearchIndex {
    pub fn build(records: &[EmojiRecord], mut options: SearchOptions) -> Self {
        options.validate();

        let separators = match options.separator_regex() {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!(error = %e, "using default token separators");
                options.token_separators = DEFAULT_TOKEN_SEPARATORS.to_string();
                Regex::new(DEFAULT_TOKEN_SEPARATORS).expect("default separator regex")
            }
        };

        let entries = records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                let mut texts: Vec<String> = Vec::new();
                for key in &options.keys {
                    match key {
                        SearchKey::Name => texts.push(record.name.to_lowercase()),
                        SearchKey::ShortName => texts.push(record.short_name.to_lowercase()),
                        SearchKey::ShortNames => {
                            texts.extend(record.short_names.iter().map(|n| n.to_lowercase()))
                        }
                    }
                }

                let mut fields: Vec<SearchField> = Vec::with_capacity(texts.len());
                for text in texts {
                    if text.is_empty() || fields.iter().any(|f| f.text == text) {
                        continue;
                    }
                    let tokens = tokenize(&separators, &text);
                    fields.push(SearchField { text, tokens });
                }

                SearchEntry { position, fields }
            })
            .collect();

        Self {
            entries,
            separators,
            options,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Catalog positions matching `query`, best first
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.search_scored(query)
            .into_iter()
            .map(|(position, _)| position)
            .collect()
    }

    /// Like [`search`](Self::search), with each match's score (0.0 is perfect)
    pub fn search_scored(&self, query: &str) -> Vec<(usize, f64)> {
        let truncated: String = query.chars().take(self.options.max_pattern_length).collect();
        let query = truncated.trim().to_lowercase();

        if query.is_empty() {
            return Vec::new();
        }

        let query_tokens = tokenize(&self.separators, &query);
        let mut candidates: Vec<Candidate> = self
            .entries
            .iter()
            .filter_map(|entry| self.score_entry(entry, &query, &query_tokens))
            .collect();

        // Stable, so equal candidates keep catalog order
        candidates.sort_by(|a, b| {
            b.exact
                .cmp(&a.exact)
                .then_with(|| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))
                .then_with(|| b.fuzzy.cmp(&a.fuzzy))
        });

        let limit = self.options.max_results.unwrap_or(usize::MAX);
        candidates
            .into_iter()
            .take(limit)
            .map(|c| (c.position, c.score))
            .collect()
    }

    fn score_entry(&self, entry: &SearchEntry, query: &str, query_tokens: &[Token]) -> Option<Candidate> {
        let mut best: Option<(bool, f64)> = None;
        let mut fuzzy: i64 = 0;

        for field in &entry.fields {
            if let Some(score) = self.matcher.fuzzy_match(&field.text, query) {
                fuzzy = fuzzy.max(score);
            }

            let exact = field.text == query;
            let Some(score) = self.score_field(field, query, query_tokens) else {
                continue;
            };

            best = Some(match best {
                Some((best_exact, best_score)) => (best_exact || exact, best_score.min(score)),
                None => (exact, score),
            });
        }

        best.map(|(exact, score)| Candidate {
            position: entry.position,
            exact,
            score,
            fuzzy,
        })
    }

    fn score_field(&self, field: &SearchField, query: &str, query_tokens: &[Token]) -> Option<f64> {
        let threshold = self.options.threshold;

        if let Some(offset) = field.text.find(query) {
            let chars_before = field.text[..offset].chars().count();
            let score = chars_before as f64 / self.options.distance as f64;
            if score <= threshold {
                return Some(score);
            }
        }

        if query_tokens.is_empty() || field.tokens.is_empty() {
            return None;
        }

        let mut total = 0.0;
        for query_token in query_tokens {
            let best = field
                .tokens
                .iter()
                .map(|token| token_score(query_token, token))
                .fold(f64::INFINITY, f64::min);
            if best > threshold {
                return None;
            }
            total += best;
        }

        Some(total / query_tokens.len() as f64)
    }
}

fn tokenize(separators: &Regex, text: &str) -> Vec<Token> {
    separators
        .split(text)
        .filter(|token| !token.is_empty())
        .map(|token| Token {
            text: token.to_string(),
            chars: token.chars().count(),
        })
        .collect()
}

/// Normalized optimal-string-alignment distance between a query token and a
/// field token, also trying the field token cut to the query's length.
fn token_score(query: &Token, token: &Token) -> f64 {
    if query.chars == 0 {
        return f64::INFINITY;
    }

    let prefix = match token.text.char_indices().nth(query.chars) {
        Some((end, _)) => &token.text[..end],
        None => token.text.as_str(),
    };
    let whole = strsim::osa_distance(&query.text, &token.text);
    let cut = strsim::osa_distance(&query.text, prefix);
    whole.min(cut) as f64 / query.chars as f64
}
