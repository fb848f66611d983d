//! Tag-filtered retrieval over a catalog snapshot

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::debug;

use super::index::fold_tag;
use super::model::{Catalog, CatalogEntry};

/// Returns entries whose tags intersect a requested set ("any of")
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    catalog: Arc<Catalog>,
}

impl CatalogFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filter the catalog by tags, case-insensitively.
    ///
    /// An empty request returns the whole catalog. Otherwise every entry
    /// carrying at least one requested tag is returned once, in catalog order;
    /// blank or unknown tags match nothing.
    pub fn filter<I, S>(&self, requested: I) -> Vec<&CatalogEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any_requested = false;
        let keys: BTreeSet<String> = requested
            .into_iter()
            .inspect(|_| any_requested = true)
            .map(|tag| fold_tag(tag.as_ref()))
            .filter(|key| !key.is_empty())
            .collect();

        if !any_requested {
            return self.catalog.iter().collect();
        }

        let index = self.catalog.index();
        let positions: BTreeSet<usize> = keys
            .iter()
            .filter_map(|key| index.group(key))
            .flat_map(|group| group.entries.iter().copied())
            .collect();

        let entries = self.catalog.entries();
        let mut emitted = HashSet::with_capacity(positions.len());
        let mut result = Vec::with_capacity(positions.len());
        for position in positions {
            let entry = &entries[position];
            if emitted.insert(&entry.id) {
                result.push(entry);
            }
        }

        debug!(requested = ?keys, matched = result.len(), "catalog filter");
        result
    }
}
