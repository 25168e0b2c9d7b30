//! Category grouping for browsable pickers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::catalog::EmojiRecord;

/// Canonical picker category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Emoji,
    Animal,
    Food,
    Activity,
    Travel,
    Object,
    Symbol,
    Flag,
    Misc,
}

impl CategoryTag {
    pub const ALL: [CategoryTag; 9] = [
        CategoryTag::Emoji,
        CategoryTag::Animal,
        CategoryTag::Food,
        CategoryTag::Activity,
        CategoryTag::Travel,
        CategoryTag::Object,
        CategoryTag::Symbol,
        CategoryTag::Flag,
        CategoryTag::Misc,
    ];

    /// Map a dataset category label to its tag. Unknown labels land in `Misc`.
    pub fn from_label(label: &str) -> CategoryTag {
        match label {
            "Activities" => CategoryTag::Activity,
            "Animals & Nature" => CategoryTag::Animal,
            "Flags" => CategoryTag::Flag,
            "Food & Drink" => CategoryTag::Food,
            "Objects" => CategoryTag::Object,
            "Travel & Places" => CategoryTag::Travel,
            // Newer datasets split this label in two
            "Smileys & People" | "Smileys & Emotion" | "People & Body" => CategoryTag::Emoji,
            "Symbols" => CategoryTag::Symbol,
            _ => CategoryTag::Misc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Emoji => "emoji",
            CategoryTag::Animal => "animal",
            CategoryTag::Food => "food",
            CategoryTag::Activity => "activity",
            CategoryTag::Travel => "travel",
            CategoryTag::Object => "object",
            CategoryTag::Symbol => "symbol",
            CategoryTag::Flag => "flag",
            CategoryTag::Misc => "misc",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog positions grouped by tag, each group ordered by `sort_order`
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    groups: BTreeMap<CategoryTag, Vec<usize>>,
}

impl CategoryIndex {
    pub fn build(records: &[EmojiRecord]) -> Self {
        let mut groups: BTreeMap<CategoryTag, Vec<usize>> = BTreeMap::new();

        for (position, record) in records.iter().enumerate() {
            groups.entry(record.category_tag()).or_default().push(position);
        }

        // sort_by_key is stable, so ties keep catalog order
        for positions in groups.values_mut() {
            positions.sort_by_key(|&position| records[position].sort_order);
        }

        Self { groups }
    }

    /// Positions in one category, empty if the category has no records
    pub fn get(&self, tag: CategoryTag) -> &[usize] {
        self.groups.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty categories in tag order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryTag, &[usize])> {
        self.groups
            .iter()
            .map(|(tag, positions)| (*tag, positions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{load_json, Platform};
    use crate::test_support::FIXTURE;

    #[test]
    fn test_label_mapping() {
        assert_eq!(CategoryTag::from_label("Activities"), CategoryTag::Activity);
        assert_eq!(CategoryTag::from_label("Animals & Nature"), CategoryTag::Animal);
        assert_eq!(CategoryTag::from_label("Flags"), CategoryTag::Flag);
        assert_eq!(CategoryTag::from_label("Food & Drink"), CategoryTag::Food);
        assert_eq!(CategoryTag::from_label("Objects"), CategoryTag::Object);
        assert_eq!(CategoryTag::from_label("Travel & Places"), CategoryTag::Travel);
        assert_eq!(CategoryTag::from_label("Smileys & People"), CategoryTag::Emoji);
        assert_eq!(CategoryTag::from_label("Symbols"), CategoryTag::Symbol);
    }

    #[test]
    fn test_unknown_labels_are_misc() {
        assert_eq!(CategoryTag::from_label("Skin Tones"), CategoryTag::Misc);
        assert_eq!(CategoryTag::from_label(""), CategoryTag::Misc);
        assert_eq!(CategoryTag::from_label("symbols"), CategoryTag::Misc);
    }

    #[test]
    fn test_partitions_every_record_once() {
        let records = load_json(FIXTURE, Platform::Apple).unwrap();
        let index = CategoryIndex::build(&records);

        let mut seen: Vec<usize> = index.iter().flat_map(|(_, p)| p.iter().copied()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..records.len()).collect::<Vec<_>>());

        for (tag, positions) in index.iter() {
            for &position in positions {
                assert_eq!(records[position].category_tag(), tag);
            }
        }
    }

    #[test]
    fn test_groups_sorted_with_stable_ties() {
        let records = load_json(FIXTURE, Platform::Apple).unwrap();
        let index = CategoryIndex::build(&records);

        for (_, positions) in index.iter() {
            for pair in positions.windows(2) {
                let (a, b) = (&records[pair[0]], &records[pair[1]]);
                assert!(a.sort_order <= b.sort_order);
                if a.sort_order == b.sort_order {
                    assert!(pair[0] < pair[1]);
                }
            }
        }

        let animals: Vec<&str> = index
            .get(CategoryTag::Animal)
            .iter()
            .map(|&p| records[p].short_name.as_str())
            .collect();
        assert_eq!(animals, vec!["monkey_face", "dog", "cat"]);
    }

    #[test]
    fn test_empty_category() {
        let index = CategoryIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.get(CategoryTag::Flag).is_empty());
    }
}
