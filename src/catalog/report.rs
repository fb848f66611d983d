//! Load report produced alongside a catalog

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use super::model::{Catalog, DuplicatePolicy, EntryId};

/// Non-fatal problem found while loading a catalog source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    MissingSource {
        path: String,
    },
    MalformedRecord {
        file: String,
        position: usize,
        reason: String,
    },
    DuplicateId {
        id: EntryId,
        policy: DuplicatePolicy,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingSource { path } => {
                write!(f, "catalog source {} not found, using empty catalog", path)
            }
            LoadWarning::MalformedRecord {
                file,
                position,
                reason,
            } => write!(
                f,
                "skipped malformed record at index {} in {}: {}",
                position, file, reason
            ),
            LoadWarning::DuplicateId { id, policy } => match policy {
                DuplicatePolicy::KeepFirst => {
                    write!(f, "duplicate id {}: kept first occurrence", id)
                }
                _ => write!(f, "duplicate id {}: later record replaced earlier one", id),
            },
        }
    }
}

/// Summary of one catalog load
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub source: String,
    pub files: usize,
    pub records_read: usize,
    pub entries_loaded: usize,
    pub distinct_tags: usize,
    pub warnings: Vec<LoadWarning>,
    pub loaded_at: DateTime<Local>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn source_missing(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::MissingSource { .. }))
    }
}

/// A loaded catalog and the report describing how it was loaded
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub report: LoadReport,
}
