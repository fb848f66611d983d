//! Tag index built once per catalog
//!
//! Groups every catalog tag by its comparison key (trimmed, lowercased) and
//! records which entries carry it. Both tag extraction and filtering read this
//! table instead of rescanning entries.

use serde::Serialize;
use std::collections::HashMap;

use super::model::CatalogEntry;

/// Comparison key for a tag: surrounding whitespace removed, Unicode lowercase
pub fn fold_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// All catalog tags sharing one comparison key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub key: String,
    /// Distinct original spellings, first-seen order
    pub spellings: Vec<String>,
    /// Ascending positions of the entries carrying this tag
    pub entries: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    groups: Vec<TagGroup>,
    by_key: HashMap<String, usize>,
}

impl TagIndex {
    pub fn build(entries: &[CatalogEntry]) -> Self {
        let mut index = Self::default();

        for (position, entry) in entries.iter().enumerate() {
            for tag in &entry.tags {
                let key = fold_tag(tag);
                if key.is_empty() {
                    continue;
                }

                let slot = match index.by_key.get(&key).copied() {
                    Some(slot) => slot,
                    None => {
                        index.groups.push(TagGroup {
                            key: key.clone(),
                            spellings: Vec::new(),
                            entries: Vec::new(),
                        });
                        index.by_key.insert(key, index.groups.len() - 1);
                        index.groups.len() - 1
                    }
                };

                let group = &mut index.groups[slot];
                if !group.spellings.iter().any(|s| s == tag) {
                    group.spellings.push(tag.clone());
                }
                // Positions arrive in ascending order, so only the tail can repeat
                if group.entries.last() != Some(&position) {
                    group.entries.push(position);
                }
            }
        }

        index
    }

    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Look up by an already folded key
    pub fn group(&self, key: &str) -> Option<&TagGroup> {
        self.by_key.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
