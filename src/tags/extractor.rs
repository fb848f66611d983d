//! Concept tag extraction from generated text
//!
//! Two sources feed the result:
//! 1. Keyword hits: vocabulary keywords found as substrings of the text
//! 2. Fuzzy hits: catalog tags whose similarity to a detected keyword exceeds
//!    the threshold, reported in the catalog's original spelling
//!
//! Catalog and vocabulary are both fixed, so the fuzzy table (keyword ->
//! close catalog tags) is computed once when the extractor is built.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::debug;

use super::similarity::{ratio, DEFAULT_THRESHOLD};
use super::vocabulary::Vocabulary;
use crate::catalog::Catalog;

/// Why a tag was reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MatchSource {
    /// The keyword occurs in the text
    Keyword,
    /// A catalog tag close to `keyword`
    Fuzzy { keyword: String, score: u8 },
}

/// An extracted tag with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    pub tag: String,
    #[serde(flatten)]
    pub source: MatchSource,
}

#[derive(Debug, Clone)]
pub struct TagExtractor {
    catalog: Arc<Catalog>,
    vocabulary: Vocabulary,
    threshold: u8,
    /// Close catalog tags per keyword, parallel to `vocabulary`
    fuzzy: Vec<Vec<TagMatch>>,
}

impl TagExtractor {
    pub fn new(catalog: Arc<Catalog>, vocabulary: Vocabulary) -> Self {
        let fuzzy = fuzzy_table(&catalog, &vocabulary, DEFAULT_THRESHOLD);
        Self {
            catalog,
            vocabulary,
            threshold: DEFAULT_THRESHOLD,
            fuzzy,
        }
    }

    /// Set similarity threshold (exclusive) and rebuild the fuzzy table
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self.fuzzy = fuzzy_table(&self.catalog, &self.vocabulary, threshold);
        self
    }

    /// Tags judged present in `text`.
    ///
    /// The set is sorted only because `BTreeSet` is; callers should not read
    /// meaning into the order.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.explain(text).into_iter().map(|m| m.tag).collect()
    }

    /// Same tags as `extract`, with the reason each one was reported.
    ///
    /// Keyword hits come first in vocabulary order, then fuzzy hits grouped by
    /// keyword. A tag already reported is not repeated.
    pub fn explain(&self, text: &str) -> Vec<TagMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut detected = Vec::new();
        let mut matches = Vec::new();

        for (slot, keyword) in self.vocabulary.iter().enumerate() {
            if !lowered.contains(keyword.as_str()) {
                continue;
            }
            detected.push(slot);
            if seen.insert(keyword) {
                matches.push(TagMatch {
                    tag: keyword.clone(),
                    source: MatchSource::Keyword,
                });
            }
        }

        let direct = matches.len();
        for slot in detected {
            for hit in &self.fuzzy[slot] {
                if seen.insert(&hit.tag) {
                    matches.push(hit.clone());
                }
            }
        }

        debug!(
            keyword_hits = direct,
            fuzzy_hits = matches.len() - direct,
            "extracted tags"
        );
        matches
    }

    /// Catalog tags that fuzzy-match `keyword`
    pub fn fuzzy_for(&self, keyword: &str) -> &[TagMatch] {
        self.vocabulary
            .iter()
            .position(|k| k == keyword)
            .map(|slot| self.fuzzy[slot].as_slice())
            .unwrap_or(&[])
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Score every catalog tag spelling against every keyword once.
///
/// Row `i` lists, in catalog tag order, each original spelling scoring above
/// `threshold` against keyword `i`. Spellings are scored as written; the
/// trimmed grouping key only orders them.
fn fuzzy_table(catalog: &Catalog, vocabulary: &Vocabulary, threshold: u8) -> Vec<Vec<TagMatch>> {
    let groups = catalog.index().groups();

    vocabulary
        .iter()
        .map(|keyword| {
            let mut row = Vec::new();
            for spelling in groups.iter().flat_map(|group| &group.spellings) {
                let score = ratio(spelling, keyword);
                if score > threshold {
                    row.push(TagMatch {
                        tag: spelling.clone(),
                        source: MatchSource::Fuzzy {
                            keyword: keyword.clone(),
                            score,
                        },
                    });
                }
            }
            row
        })
        .collect()
}
