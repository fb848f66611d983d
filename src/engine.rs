//! Concept engine - one catalog snapshot shared by extraction and retrieval
//!
//! The engine can only be built from a finished load, so readers never see a
//! half-built catalog. A missing source produces an engine over the empty
//! catalog.

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry, CatalogFilter, CatalogResult, LoadOutcome, LoadReport};
use crate::core::paths::ProjectPaths;
use crate::tags::{TagExtractor, TagMatch, Vocabulary};

/// A generated response with the concepts detected in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedResponse {
    pub response: String,
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct ConceptEngine {
    catalog: Arc<Catalog>,
    extractor: TagExtractor,
    filter: CatalogFilter,
    report: Option<LoadReport>,
}

impl ConceptEngine {
    pub fn new(catalog: Catalog, vocabulary: Vocabulary) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            extractor: TagExtractor::new(Arc::clone(&catalog), vocabulary),
            filter: CatalogFilter::new(Arc::clone(&catalog)),
            catalog,
            report: None,
        }
    }

    pub fn from_outcome(outcome: LoadOutcome, vocabulary: Vocabulary) -> Self {
        let mut engine = Self::new(outcome.catalog, vocabulary);
        engine.report = Some(outcome.report);
        engine
    }

    /// Load the configured catalog and build the engine
    pub fn load(paths: &ProjectPaths) -> CatalogResult<Self> {
        let outcome = paths.config.catalog.loader().load(&paths.catalog)?;
        let extraction = &paths.config.extraction;
        Ok(Self::from_outcome(outcome, extraction.vocabulary()).with_threshold(extraction.threshold))
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.extractor = self.extractor.with_threshold(threshold);
        self
    }

    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.extractor.extract(text)
    }

    pub fn explain(&self, text: &str) -> Vec<TagMatch> {
        self.extractor.explain(text)
    }

    /// Trim a generated response and attach its concept tags
    pub fn annotate(&self, response: &str) -> AnnotatedResponse {
        let response = response.trim().to_string();
        let tags = self.extractor.extract(&response);
        AnnotatedResponse { response, tags }
    }

    pub fn filter<I, S>(&self, requested: I) -> Vec<&CatalogEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.filter(requested)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &TagExtractor {
        &self.extractor
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.extractor.vocabulary()
    }

    /// Present when the engine was built from a load
    pub fn report(&self) -> Option<&LoadReport> {
        self.report.as_ref()
    }
}
