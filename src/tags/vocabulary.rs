//! Keyword vocabulary for direct concept detection
//!
//! The embedded default covers the algebra curriculum the tutor teaches.

use lazy_static::lazy_static;
use serde::Serialize;

/// Built-in concept keywords, lowercase, in priority order
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // === Foundations ===
    "algebra",
    "variable",
    "expression",
    "coefficient",
    "integer",
    "fraction",
    "exponent",
    "radical",
    "square root",
    "absolute value",
    "order of operations",
    "distributive property",
    "like terms",
    // === Equations & inequalities ===
    "equation",
    "linear equation",
    "inequality",
    "system of equations",
    "substitution",
    "elimination",
    // === Functions & graphs ===
    "function",
    "slope",
    "intercept",
    "graph",
    "parabola",
    "vertex",
    // === Polynomials ===
    "polynomial",
    "monomial",
    "binomial",
    "trinomial",
    "factoring",
    "quadratic",
    "quadratic formula",
    "completing the square",
    "discriminant",
];

lazy_static! {
    pub static ref DEFAULT_VOCABULARY: Vocabulary = Vocabulary::new(DEFAULT_KEYWORDS.iter().copied());
}

/// Ordered, duplicate-free list of lowercase keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    keywords: Vec<String>,
}

impl Vocabulary {
    /// Keywords are trimmed and lowercased; blanks and repeats are dropped,
    /// keeping the first occurrence's position.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keywords.iter()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}
