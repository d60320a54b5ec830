//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use mxtoolbox_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Blacklist store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("cz", "mxtoolbox", "mxbl")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, or the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_table() {
        let config: Config = toml::from_str(
            r#"
            output_format = "json"

            [store]
            base_path = "/srv/blacklists"
            search_data_dir = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.store.base_path, Some(PathBuf::from("/srv/blacklists")));
        assert!(!config.store.search_data_dir);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.output_format.is_none());
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load(Some(Path::new("/nonexistent/mxbl.toml"))).unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }
}
