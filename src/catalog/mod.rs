//! Content catalog
//!
//! The catalog is loaded once from an external source and shared read-only.
//!
//! # Components
//!
//! - `model`: entries, identifiers and the immutable `Catalog`
//! - `index`: tag groups keyed by case-folded tag
//! - `loader`: JSON/YAML loading with duplicate and malformed-record policies
//! - `filter`: "any of" tag retrieval in catalog order

pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod report;

pub use error::{CatalogError, CatalogResult};
pub use filter::CatalogFilter;
pub use index::{fold_tag, TagGroup, TagIndex};
pub use loader::{CatalogLoader, MalformedPolicy, SourceFormat};
pub use model::{Catalog, CatalogEntry, DuplicatePolicy, EntryId};
pub use report::{LoadOutcome, LoadReport, LoadWarning};

/// Default catalog source, relative to the project root
pub const DEFAULT_CATALOG_PATH: &str = "data/content_feed.json";
