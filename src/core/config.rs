//! Project configuration
//!
//! Loaded from `.tutor-concepts.json` in the project root. Every field has a
//! default, so a partial file (or none at all) is valid.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::catalog::{CatalogLoader, DuplicatePolicy, MalformedPolicy, DEFAULT_CATALOG_PATH};
use crate::tags::{Vocabulary, DEFAULT_THRESHOLD};

pub const CONFIG_FILE: &str = ".tutor-concepts.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Catalog source and load policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// File or directory, relative to the project root unless absolute
    #[serde(default = "default_catalog_path")]
    pub path: String,

    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    #[serde(default)]
    pub malformed: MalformedPolicy,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            duplicates: DuplicatePolicy::default(),
            malformed: MalformedPolicy::default(),
        }
    }
}

impl CatalogConfig {
    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::new()
            .with_duplicates(self.duplicates)
            .with_malformed(self.malformed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Fuzzy scores must be strictly above this (0-100)
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Replaces the built-in keyword list when set
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            keywords: None,
        }
    }
}

impl ExtractionConfig {
    pub fn vocabulary(&self) -> Vocabulary {
        match &self.keywords {
            Some(keywords) => Vocabulary::new(keywords),
            None => Vocabulary::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: CatalogConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Config {
    /// Load from the project root, falling back to defaults on any problem
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                if config.version > CONFIG_VERSION {
                    warn!(
                        "config version {} is newer than supported version {}",
                        config.version, CONFIG_VERSION
                    );
                }
                if config.extraction.threshold > 100 {
                    warn!(
                        "extraction threshold {} is above 100; no fuzzy matches will be found",
                        config.extraction.threshold
                    );
                }
                config
            }
            Err(e) => {
                warn!("failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(root.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Absolute catalog source for this project
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog.path)
    }
}
