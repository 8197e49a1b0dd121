//! Bookshelf configuration
//!
//! Configuration is a small YAML file:
//!
//! ```yaml
//! dataset: data/library_books.csv   # relative to this file
//! reference_year: 2024              # fixes the year used for book ages
//! ```
//!
//! Every field is optional. A missing configuration file is not an error.

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "BOOKSHELF_CONFIG";

/// Dataset used when the configuration names none
pub const DEFAULT_DATASET: &str = "library_books.csv";

const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// CSV dataset to load the catalog from
    pub dataset: Option<PathBuf>,

    /// Year used to compute book ages instead of the current year
    pub reference_year: Option<i32>,

    /// Directory of the file this config came from
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl BookshelfConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse bookshelf config YAML")
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Find and load configuration
    ///
    /// Resolution order:
    /// 1. `cli_override` (must exist)
    /// 2. `$BOOKSHELF_CONFIG` (must exist)
    /// 3. `config.yml` in the platform config directory
    /// 4. Defaults
    pub fn discover(cli_override: Option<&Path>) -> Result<Self> {
        trace!("Discovering bookshelf configuration");

        if let Some(path) = cli_override {
            debug!("Using --config override: {}", path.display());
            return Self::load_from_path(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            debug!("Using {} = {}", CONFIG_ENV_VAR, path.display());
            return Self::load_from_path(&path);
        }

        if let Some(path) = Self::platform_config_path() {
            if path.exists() {
                debug!("Found configuration at {}", path.display());
                return Self::load_from_path(&path);
            }
            trace!("No configuration at {}", path.display());
        }

        debug!("No configuration found, using defaults");
        Ok(Self::default())
    }

    /// Platform config file location, e.g. `~/.config/bookshelf/config.yml` on Linux
    pub fn platform_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bookshelf")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Dataset path, with relative paths resolved against the config file's directory
    pub fn dataset_path(&self) -> PathBuf {
        let dataset = self
            .dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

        match &self.base_dir {
            Some(base) if dataset.is_relative() => base.join(dataset),
            _ => dataset,
        }
    }

    /// Year to measure book ages against
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}
