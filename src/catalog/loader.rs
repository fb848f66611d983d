//! Catalog loading from JSON or YAML sources
//!
//! A source is a single file or a directory of files. Each file holds either a
//! top-level sequence of records or a mapping with an `entries` sequence.
//! A missing source is not an error: it yields an empty catalog and a warning.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::error::{CatalogError, CatalogResult};
use super::model::{Catalog, CatalogEntry, DuplicatePolicy};
use super::report::{LoadOutcome, LoadReport, LoadWarning};

/// What to do with a record that cannot be turned into an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    #[default]
    Skip,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader {
    duplicates: DuplicatePolicy,
    malformed: MalformedPolicy,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Load a catalog from a file or directory
    pub fn load(&self, path: &Path) -> CatalogResult<LoadOutcome> {
        if !path.exists() {
            let warning = LoadWarning::MissingSource {
                path: path.display().to_string(),
            };
            warn!("{}", warning);
            return Ok(LoadOutcome {
                report: report(path, 0, 0, &Catalog::empty(), vec![warning]),
                catalog: Catalog::empty(),
            });
        }

        let files = if path.is_dir() {
            collect_source_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

        let mut sources = Vec::with_capacity(files.len());
        for file in &files {
            let format =
                SourceFormat::from_path(file).ok_or_else(|| CatalogError::UnsupportedFormat(file.clone()))?;
            let content = fs::read_to_string(file).map_err(|source| CatalogError::Io {
                path: file.clone(),
                source,
            })?;
            sources.push((file.clone(), parse_records(file, &content, format)?));
        }

        self.assemble(path, sources)
    }

    /// Load a catalog from in-memory JSON, e.g. data embedded in the binary
    pub fn load_json_str(&self, origin: &str, content: &str) -> CatalogResult<LoadOutcome> {
        let path = PathBuf::from(origin);
        let records = parse_records(&path, content, SourceFormat::Json)?;
        self.assemble(&path, vec![(path.clone(), records)])
    }

    fn assemble(
        &self,
        source: &Path,
        sources: Vec<(PathBuf, Vec<Value>)>,
    ) -> CatalogResult<LoadOutcome> {
        let files = sources.len();
        let mut records_read = 0;
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for (file, records) in sources {
            records_read += records.len();
            for (position, record) in records.into_iter().enumerate() {
                match parse_entry(record) {
                    Ok(entry) => entries.push(entry),
                    Err(reason) => match self.malformed {
                        MalformedPolicy::Reject => {
                            return Err(CatalogError::MalformedRecord {
                                path: file,
                                position,
                                reason,
                            })
                        }
                        MalformedPolicy::Skip => warnings.push(LoadWarning::MalformedRecord {
                            file: file.display().to_string(),
                            position,
                            reason,
                        }),
                    },
                }
            }
        }

        let (catalog, duplicates) = Catalog::build(entries, self.duplicates)?;
        warnings.extend(duplicates);

        for warning in &warnings {
            warn!("{}", warning);
        }
        info!(
            source = %source.display(),
            files,
            records = records_read,
            entries = catalog.len(),
            tags = catalog.index().len(),
            "catalog loaded"
        );

        Ok(LoadOutcome {
            report: report(source, files, records_read, &catalog, warnings),
            catalog,
        })
    }
}

fn report(
    source: &Path,
    files: usize,
    records_read: usize,
    catalog: &Catalog,
    warnings: Vec<LoadWarning>,
) -> LoadReport {
    LoadReport {
        source: source.display().to_string(),
        files,
        records_read,
        entries_loaded: catalog.len(),
        distinct_tags: catalog.index().len(),
        warnings,
        loaded_at: Local::now(),
    }
}

fn parse_records(path: &Path, content: &str, format: SourceFormat) -> CatalogResult<Vec<Value>> {
    let document: Value = match format {
        SourceFormat::Json => serde_json::from_str(content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        SourceFormat::Yaml => {
            // An empty YAML document means no records
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_yaml::from_str(content).map_err(|source| CatalogError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("entries") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(CatalogError::UnexpectedShape {
                path: path.to_path_buf(),
            }),
        },
        _ => Err(CatalogError::UnexpectedShape {
            path: path.to_path_buf(),
        }),
    }
}

fn parse_entry(record: Value) -> Result<CatalogEntry, String> {
    let entry: CatalogEntry = serde_json::from_value(record).map_err(|e| e.to_string())?;
    entry.validate()?;
    Ok(entry)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Every supported file below `dir`, hidden paths excluded, sorted by path
fn collect_source_files(dir: &Path) -> CatalogResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && SourceFormat::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(dir = %dir.display(), files = files.len(), "collected catalog files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;
    use tempfile::TempDir;

    const FEED: &str = r#"[
        {"id": 1, "title": "Quadratic basics", "tags": ["Quadratics"]},
        {"id": 2, "title": "Factoring trinomials", "tags": ["Factoring"]}
    ]"#;

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, FEED).unwrap();

        let outcome = CatalogLoader::new().load(&path).unwrap();
        assert_eq!(outcome.catalog.len(), 2);
        assert_eq!(outcome.report.records_read, 2);
        assert_eq!(outcome.report.distinct_tags, 2);
        assert!(outcome.report.is_clean());
    }

    #[test]
    fn test_missing_source_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let outcome = CatalogLoader::new()
            .load(&dir.path().join("absent.json"))
            .unwrap();

        assert!(outcome.catalog.is_empty());
        assert!(outcome.report.source_missing());
    }

    #[test]
    fn test_entries_wrapper_and_yaml() {
        let yaml = "entries:\n  - id: alg-1\n    title: Slope\n    tags: [Linear, Slope]\n";
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.yaml");
        fs::write(&path, yaml).unwrap();

        let outcome = CatalogLoader::new().load(&path).unwrap();
        let entry = &outcome.catalog.entries()[0];
        assert_eq!(entry.id, EntryId::from("alg-1"));
        assert_eq!(entry.title(), Some("Slope"));
        assert_eq!(entry.tags, vec!["Linear", "Slope"]);
    }

    #[test]
    fn test_malformed_records_skipped_with_warning() {
        let json = r#"[
            {"id": 1, "tags": ["a"]},
            {"title": "no id", "tags": ["b"]},
            {"id": 3},
            {"id": "  ", "tags": []},
            "not a record",
            {"id": 6, "tags": ["c"]}
        ]"#;

        let outcome = CatalogLoader::new().load_json_str("inline", json).unwrap();
        let ids: Vec<String> = outcome.catalog.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "6"]);
        assert_eq!(outcome.report.records_read, 6);
        assert_eq!(outcome.report.warnings.len(), 4);
        assert!(matches!(
            outcome.report.warnings[0],
            LoadWarning::MalformedRecord { position: 1, .. }
        ));
    }

    #[test]
    fn test_malformed_reject_policy() {
        let err = CatalogLoader::new()
            .with_malformed(MalformedPolicy::Reject)
            .load_json_str("inline", r#"[{"id": 1}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { position: 0, .. }));
    }

    #[test]
    fn test_duplicate_policy_applied() {
        let json = r#"[{"id": 1, "tags": ["a"]}, {"id": 1, "tags": ["b"]}]"#;

        let outcome = CatalogLoader::new().load_json_str("inline", json).unwrap();
        assert_eq!(outcome.catalog.entries()[0].tags, vec!["b"]);
        assert_eq!(outcome.report.warnings.len(), 1);

        let err = CatalogLoader::new()
            .with_duplicates(DuplicatePolicy::Reject)
            .load_json_str("inline", json)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_broken_source_is_an_error() {
        let err = CatalogLoader::new()
            .load_json_str("inline", "{ not json")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));

        let err = CatalogLoader::new()
            .load_json_str("inline", r#"{"items": []}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_directory_source_in_path_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::create_dir(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join("a.json"), r#"[{"id": 1, "tags": ["x"]}]"#).unwrap();
        fs::write(dir.path().join("b/c.yml"), "- id: 2\n  tags: [y]\n").unwrap();
        fs::write(dir.path().join(".hidden/d.json"), r#"[{"id": 9, "tags": []}]"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let outcome = CatalogLoader::new().load(dir.path()).unwrap();
        let ids: Vec<String> = outcome.catalog.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(outcome.report.files, 2);
    }

    #[test]
    fn test_unsupported_file_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.csv");
        fs::write(&path, "id,tags").unwrap();

        let err = CatalogLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }
}
