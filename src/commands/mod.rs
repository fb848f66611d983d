pub mod catalog;
pub mod extract;
pub mod filter;
pub mod vocab;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use tutor_concepts::{ConceptEngine, ProjectPaths};

/// Global options shared by every command
pub struct Project {
    pub root: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl Project {
    pub fn paths(&self) -> ProjectPaths {
        let paths = match &self.root {
            Some(root) => ProjectPaths::from_root(root.clone()),
            None => ProjectPaths::new(),
        };
        match &self.catalog {
            Some(catalog) => paths.with_catalog(catalog.clone()),
            None => paths,
        }
    }

    pub fn engine(&self) -> Result<ConceptEngine> {
        let paths = self.paths();
        ConceptEngine::load(&paths)
            .with_context(|| format!("Failed to load catalog from {}", paths.catalog.display()))
    }
}

/// Use `text` as given, or read all of stdin when it is "-"
pub fn read_text(text: &str) -> Result<String> {
    if text != "-" {
        return Ok(text.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}
