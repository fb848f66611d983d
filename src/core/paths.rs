//! Project root detection and path resolution

use std::path::PathBuf;
use tracing::warn;

use super::config::Config;

/// Environment variable for the project root
pub const ROOT_ENV: &str = "TUTOR_CONCEPTS_ROOT";

/// Project root together with its loaded configuration
pub struct ProjectPaths {
    pub root: PathBuf,
    pub catalog: PathBuf,
    pub config: Config,
}

impl ProjectPaths {
    /// Resolve from the environment variable or the current directory
    pub fn new() -> Self {
        Self::from_root(get_project_root())
    }

    pub fn from_root(root: PathBuf) -> Self {
        let config = Config::load(&root);
        Self::from_root_with_config(root, config)
    }

    pub fn from_root_with_config(root: PathBuf, config: Config) -> Self {
        Self {
            catalog: config.catalog_path(&root),
            root,
            config,
        }
    }

    /// Replace the configured catalog source
    pub fn with_catalog(mut self, catalog: PathBuf) -> Self {
        self.catalog = self.root.join(catalog);
        self
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Priority: TUTOR_CONCEPTS_ROOT env var > current directory
pub fn get_project_root() -> PathBuf {
    if let Ok(path) = std::env::var(ROOT_ENV) {
        let root = PathBuf::from(&path);
        if root.exists() {
            return root;
        }
        warn!(
            "{} is set to '{}' but path does not exist. Falling back to current directory.",
            ROOT_ENV, path
        );
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_follows_config() {
        let mut config = Config::default();
        config.catalog.path = "content/feed.yaml".to_string();
        let paths = ProjectPaths::from_root_with_config(PathBuf::from("/srv/tutor"), config);
        assert_eq!(paths.catalog, PathBuf::from("/srv/tutor/content/feed.yaml"));
    }

    #[test]
    fn test_with_catalog_override() {
        let paths = ProjectPaths::from_root_with_config(PathBuf::from("/srv/tutor"), Config::default())
            .with_catalog(PathBuf::from("other.json"));
        assert_eq!(paths.catalog, PathBuf::from("/srv/tutor/other.json"));
    }
}
