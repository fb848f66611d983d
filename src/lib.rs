//! Concept tagging and tag-filtered retrieval for a tutoring backend.
//!
//! A curated content catalog is loaded once and shared read-only. Generated
//! tutor responses are scanned for curriculum concepts ([`TagExtractor`]), and
//! catalog entries are retrieved by tag ([`CatalogFilter`]).
//!
//! ```no_run
//! use tutor_concepts::{ConceptEngine, ProjectPaths};
//!
//! let engine = ConceptEngine::load(&ProjectPaths::new())?;
//! let tags = engine.extract("Let's solve this quadratic equation");
//! let lessons = engine.filter(&tags);
//! # Ok::<(), tutor_concepts::CatalogError>(())
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod tags;

pub use catalog::{
    Catalog, CatalogEntry, CatalogError, CatalogFilter, CatalogLoader, EntryId, LoadReport,
};
pub use crate::core::{Config, ProjectPaths};
pub use engine::{AnnotatedResponse, ConceptEngine};
pub use tags::{TagExtractor, TagMatch, Vocabulary};
