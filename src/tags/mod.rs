//! Concept tagging
//!
//! Detects curriculum concepts in generated text.
//!
//! # Components
//!
//! - `vocabulary`: built-in keyword list
//! - `similarity`: fuzzy ratio used to relate catalog tags to keywords
//! - `extractor`: keyword + fuzzy tag extraction

pub mod extractor;
pub mod similarity;
pub mod vocabulary;

pub use extractor::{MatchSource, TagExtractor, TagMatch};
pub use similarity::{ratio, DEFAULT_THRESHOLD};
pub use vocabulary::{Vocabulary, DEFAULT_KEYWORDS, DEFAULT_VOCABULARY};
