//! Catalog data model
//!
//! A catalog is an ordered, read-only list of content entries. Each entry has
//! an authored identifier, opaque display fields and a list of tags kept in
//! their original casing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use super::error::{CatalogError, CatalogResult};
use super::index::TagIndex;
use super::report::LoadWarning;

/// Entry identifier as authored in the catalog source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        EntryId::Number(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId::Text(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId::Text(value)
    }
}

/// A single piece of curated content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    /// Display fields (title, body, url, ...) in source order
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub tags: Vec<String>,
}

impl CatalogEntry {
    pub fn new<I, S>(id: impl Into<EntryId>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            fields: Map::new(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a display field, keeping insertion order
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if let EntryId::Text(id) = &self.id {
            if id.trim().is_empty() {
                return Err("identifier must not be blank".to_string());
            }
        }
        Ok(())
    }
}

/// How repeated identifiers are resolved when a catalog is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later record replaces the earlier one at the earlier one's position
    #[default]
    LastWins,
    /// Later records are skipped
    KeepFirst,
    /// The whole build fails
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DuplicatePolicy::LastWins => "last_wins",
            DuplicatePolicy::KeepFirst => "keep_first",
            DuplicatePolicy::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// Immutable, ordered collection of entries with a precomputed tag index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<EntryId, usize>,
    index: TagIndex,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build with the default last-write-wins policy, discarding warnings
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        // LastWins never rejects
        Self::build(entries, DuplicatePolicy::LastWins)
            .map(|(catalog, _)| catalog)
            .unwrap_or_default()
    }

    /// Build applying `policy` to repeated identifiers.
    ///
    /// Every resolved duplicate is reported back as a warning; `Reject` stops
    /// at the first one.
    pub fn build(
        entries: Vec<CatalogEntry>,
        policy: DuplicatePolicy,
    ) -> CatalogResult<(Self, Vec<LoadWarning>)> {
        let mut kept: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        let mut by_id: HashMap<EntryId, usize> = HashMap::new();
        let mut warnings = Vec::new();

        for entry in entries {
            let Some(position) = by_id.get(&entry.id).copied() else {
                by_id.insert(entry.id.clone(), kept.len());
                kept.push(entry);
                continue;
            };

            match policy {
                DuplicatePolicy::Reject => return Err(CatalogError::DuplicateId(entry.id)),
                DuplicatePolicy::LastWins => {
                    warnings.push(LoadWarning::DuplicateId {
                        id: entry.id.clone(),
                        policy,
                    });
                    kept[position] = entry;
                }
                DuplicatePolicy::KeepFirst => {
                    warnings.push(LoadWarning::DuplicateId {
                        id: entry.id,
                        policy,
                    });
                }
            }
        }

        Ok((Self::assemble(kept, by_id), warnings))
    }

    fn assemble(entries: Vec<CatalogEntry>, by_id: HashMap<EntryId, usize>) -> Self {
        let index = TagIndex::build(&entries);
        Self {
            entries,
            by_id,
            index,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> &TagIndex {
        &self.index
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
