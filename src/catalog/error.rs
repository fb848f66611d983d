//! Errors raised while loading a catalog source

use std::path::PathBuf;

use thiserror::Error;

use super::model::EntryId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in catalog source {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in catalog source {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to walk catalog directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unsupported catalog format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(
        "catalog source {} must be a sequence of records or a mapping with an `entries` sequence",
        .path.display()
    )]
    UnexpectedShape { path: PathBuf },

    #[error("malformed record at index {position} in {}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        position: usize,
        reason: String,
    },

    #[error("duplicate entry identifier: {0}")]
    DuplicateId(EntryId),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
