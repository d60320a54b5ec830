//! Blacklist directory auto-detection.
//!
//! A candidate directory is accepted only if it holds the anchor file
//! (`blacklists.txt`). Candidates are probed in order and the first hit
//! wins.

use mxtoolbox_core::files::{DATA_DIR_NAME, MASTER_FILE};
use mxtoolbox_core::{Result, StoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::StoreConfig;

/// Probes an ordered list of candidate directories for the master list.
#[derive(Debug, Clone)]
pub struct PathResolver {
    candidates: Vec<PathBuf>,
}

impl PathResolver {
    /// Build a resolver from explicit candidates, used as given.
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Build a resolver from store configuration.
    ///
    /// Relative search paths are joined onto the configured search root,
    /// or the directory of the running executable if none is set.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        let root = config.search_root.clone().or_else(install_root);

        let mut candidates: Vec<PathBuf> = config
            .search_paths
            .iter()
            .filter_map(|p| {
                if p.is_absolute() {
                    Some(p.clone())
                } else {
                    root.as_ref().map(|r| r.join(p))
                }
            })
            .collect();

        if config.search_data_dir {
            if let Some(data) = default_data_dir() {
                candidates.push(data);
            }
        }

        Self { candidates }
    }

    /// Candidate directories in probe order.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first candidate holding the anchor file.
    pub fn resolve(&self) -> Result<PathBuf> {
        for dir in &self.candidates {
            let anchor = dir.join(MASTER_FILE);
            if anchor.is_file() {
                debug!(path = %dir.display(), "blacklist directory found");
                return Ok(dir.clone());
            }
            debug!(path = %dir.display(), "anchor file missing, skipping candidate");
        }

        Err(StoreError::PathResolution {
            searched: self.candidates.clone(),
        })
    }
}

/// Directory containing the running executable.
fn install_root() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Platform data directory for blacklist files.
///
/// `~/.local/share/mxtoolbox-blacklists` on Linux, the platform
/// equivalent elsewhere.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn with_anchor(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(MASTER_FILE), "zen.spamhaus.org\n").unwrap();
    }

    #[test]
    fn test_first_candidate_with_anchor_wins() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("primary");
        let fallback = tmp.path().join("fallback");
        with_anchor(&primary);
        with_anchor(&fallback);

        let resolver = PathResolver::new(vec![primary.clone(), fallback]);
        assert_eq!(resolver.resolve().unwrap(), primary);
    }

    #[test]
    fn test_skips_candidate_without_anchor() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("primary");
        let fallback = tmp.path().join("fallback");
        // Directory exists but has no anchor file.
        fs::create_dir_all(&primary).unwrap();
        with_anchor(&fallback);

        let resolver = PathResolver::new(vec![primary, fallback.clone()]);
        assert_eq!(resolver.resolve().unwrap(), fallback);
    }

    #[test]
    fn test_no_candidate_fails_with_searched_list() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");

        let err = PathResolver::new(vec![a.clone(), b.clone()])
            .resolve()
            .unwrap_err();
        match err {
            StoreError::PathResolution { searched } => assert_eq!(searched, vec![a, b]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_relative_paths_join_search_root() {
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("bin");
        let share = tmp.path().join("share").join("mxtoolbox-blacklists");
        fs::create_dir_all(&bin).unwrap();
        with_anchor(&share);

        let config = StoreConfig::default()
            .search_root(&bin)
            .search_paths(["../share/mxtoolbox-blacklists", "/absolute/elsewhere"])
            .search_data_dir(false);
        let resolver = PathResolver::from_config(&config);

        assert_eq!(
            resolver.candidates(),
            [
                bin.join("../share/mxtoolbox-blacklists"),
                PathBuf::from("/absolute/elsewhere")
            ]
        );
        let found = resolver.resolve().unwrap();
        assert!(found.join(MASTER_FILE).is_file());
    }

    #[test]
    fn test_data_dir_is_probed_last() {
        let config = StoreConfig::default()
            .search_root("/opt/mxbl/bin")
            .search_paths(["mxtoolbox-blacklists"]);
        let resolver = PathResolver::from_config(&config);

        if let Some(data) = default_data_dir() {
            assert_eq!(resolver.candidates().last(), Some(&data));
            assert_eq!(resolver.candidates().len(), 2);
        }
    }
}
