pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, ExtractionConfig, CONFIG_FILE};
pub use paths::{get_project_root, ProjectPaths, ROOT_ENV};
