//! Store configuration: where blacklist files live and how rebuilds behave.

use mxtoolbox_core::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a [`BlacklistStore`](crate::BlacklistStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit blacklist directory. Adopted verbatim, skipping auto-detection.
    pub base_path: Option<PathBuf>,

    /// Directory relative search paths are joined onto
    /// (default: directory of the running executable).
    pub search_root: Option<PathBuf>,

    /// Candidate blacklist directories, probed in order.
    pub search_paths: Vec<PathBuf>,

    /// Also probe the platform data directory after `search_paths`.
    pub search_data_dir: bool,

    /// Leave the scratch file on disk when promoting it fails.
    pub keep_temp_on_rename_failure: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            search_root: None,
            search_paths: default_search_paths(),
            search_data_dir: true,
            keep_temp_on_rename_failure: false,
        }
    }
}

impl StoreConfig {
    /// Config with an explicit blacklist directory.
    #[must_use]
    pub fn with_base_path(path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Set the search root
    #[must_use]
    pub fn search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = Some(root.into());
        self
    }

    /// Replace the candidate directories
    #[must_use]
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the platform data-directory candidate
    #[must_use]
    pub const fn search_data_dir(mut self, enabled: bool) -> Self {
        self.search_data_dir = enabled;
        self
    }

    /// Keep or discard the scratch file when the final rename fails
    #[must_use]
    pub const fn keep_temp_on_rename_failure(mut self, keep: bool) -> Self {
        self.keep_temp_on_rename_failure = keep;
        self
    }

    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StoreError::Config(e.to_string()))
    }
}

/// Install layouts probed when no explicit directory is configured.
///
/// Relative to the search root, in order: the primary install layout,
/// a copy next to the binary (CI), a vendored source-tree checkout.
fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("../share/mxtoolbox-blacklists"),
        PathBuf::from("mxtoolbox-blacklists"),
        PathBuf::from("vendor/mxtoolbox-blacklists/mxtoolbox-blacklists"),
    ]
}
