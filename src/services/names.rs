//! Shortcode to record index
//!
//! Keys are registered in two passes: every primary short name first, then
//! every alias. A later registration overwrites an earlier one, so an alias
//! claimed by two records belongs to the one enumerated last, and an alias
//! can take over another record's primary name. This precedence comes from
//! dataset enumeration order and can shift when the dataset changes.
//!
//! Keys are stored exactly as the dataset spells them, without trimming or
//! case folding.

use std::collections::HashMap;

use super::catalog::EmojiRecord;

/// Maps every shortcode to the position of its record in the catalog
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    by_name: HashMap<String, usize>,
}

impl NameIndex {
    pub fn build(records: &[EmojiRecord]) -> Self {
        let mut by_name = HashMap::with_capacity(records.len() * 2);

        for (position, record) in records.iter().enumerate() {
            by_name.insert(record.short_name.clone(), position);
        }

        for (position, record) in records.iter().enumerate() {
            for alias in &record.short_names {
                by_name.insert(alias.clone(), position);
            }
        }

        Self { by_name }
    }

    /// Catalog position of the record owning `name`
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Whether `name` is any registered primary name or alias
    pub fn is_known_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
