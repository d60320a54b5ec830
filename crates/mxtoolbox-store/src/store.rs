//! The blacklist store: one base directory, one loaded host-name list.

use mxtoolbox_core::files::{ALIVE_FILE, MASTER_FILE};
use mxtoolbox_core::{AliveCheckResult, HostList, Result, StoreError};
use std::borrow::Cow;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::alive;
use crate::config::StoreConfig;
use crate::paths::PathResolver;

/// Lifecycle of a [`BlacklistStore`].
///
/// `Unconfigured -> PathSet -> Loaded`. Reloading replaces the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoreState {
    /// No base directory yet; the next operation auto-detects one.
    #[default]
    Unconfigured,
    /// Base directory known, nothing loaded.
    PathSet {
        /// Blacklist directory
        base: PathBuf,
    },
    /// Base directory known and a non-empty list loaded from it.
    Loaded {
        /// Blacklist directory
        base: PathBuf,
        /// Host names from the last successful load
        hosts: HostList,
    },
}

impl StoreState {
    /// Base directory, if one is set
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        match self {
            Self::Unconfigured => None,
            Self::PathSet { base } | Self::Loaded { base, .. } => Some(base),
        }
    }
}

/// Reads the master blacklist and maintains the derived alive subset.
///
/// All operations are synchronous local file operations. A store holds at
/// most one loaded list; `load` replaces it.
///
/// # Example
///
/// ```rust,no_run
/// use mxtoolbox_core::AliveCheckResult;
/// use mxtoolbox_store::BlacklistStore;
///
/// let mut store = BlacklistStore::with_base_path("/usr/share/mxtoolbox-blacklists");
/// store.load_master()?;
///
/// let results: Vec<AliveCheckResult> = store
///     .host_names()?
///     .iter()
///     .map(|h| AliveCheckResult::alive(h.as_str()))
///     .collect();
/// store.write_alive_subset(&results)?;
/// # Ok::<(), mxtoolbox_core::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlacklistStore {
    config: StoreConfig,
    state: StoreState,
}

impl BlacklistStore {
    /// Create a store. An explicit `base_path` in the config is adopted
    /// as-is; otherwise the directory is detected on first use.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let state = config
            .base_path
            .clone()
            .map_or(StoreState::Unconfigured, |base| StoreState::PathSet { base });
        Self { config, state }
    }

    /// Create a store rooted at an explicit directory.
    #[must_use]
    pub fn with_base_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::with_base_path(path))
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Store configuration
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Base directory, if resolved
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        self.state.base_path()
    }

    /// Path of the master list, if the base directory is resolved
    #[must_use]
    pub fn master_path(&self) -> Option<PathBuf> {
        self.base_path().map(|b| b.join(MASTER_FILE))
    }

    /// Path of the alive subset, if the base directory is resolved
    #[must_use]
    pub fn alive_path(&self) -> Option<PathBuf> {
        self.base_path().map(|b| b.join(ALIVE_FILE))
    }

    /// Set or detect the base directory.
    ///
    /// An explicit path is adopted verbatim without checking that it
    /// exists, and discards any loaded list. Without one, a directory is
    /// auto-detected only if none is set yet, so repeated calls are
    /// no-ops.
    pub fn resolve_path(&mut self, explicit: Option<&Path>) -> Result<&Path> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "using explicit blacklist directory");
            self.state = StoreState::PathSet {
                base: path.to_path_buf(),
            };
        }
        self.ensure_base()
    }

    /// Forget the base directory and any loaded list.
    pub fn reset(&mut self) {
        self.state = StoreState::Unconfigured;
    }

    /// Load host names from `file_name` inside the base directory.
    ///
    /// `file_name` must be a plain relative name; absolute paths and `..`
    /// are rejected so the target always stays under the base directory.
    /// Empty lines and line terminators are dropped; order and duplicates
    /// are kept. Bytes that are not valid UTF-8 are replaced with U+FFFD
    /// rather than failing the whole list. On success the loaded list is
    /// replaced and its length returned. On failure the previous state is
    /// left as it was.
    pub fn load(&mut self, file_name: impl AsRef<Path>) -> Result<usize> {
        let file_name = file_name.as_ref();
        if !is_plain_relative(file_name) {
            return Err(StoreError::InvalidInput(format!(
                "list file name must be relative to the blacklist directory: {}",
                file_name.display()
            )));
        }

        let base = self.ensure_base()?.to_path_buf();
        let target = base.join(file_name);

        let bytes = std::fs::read(&target).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                StoreError::FileNotFound {
                    path: target.clone(),
                }
            }
            _ => StoreError::Read {
                path: target.clone(),
                source: e,
            },
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!(path = %target.display(), "invalid UTF-8 in blacklist file, bad bytes replaced");
        }

        let hosts = HostList::parse(&content);
        if hosts.is_empty() {
            return Err(StoreError::EmptyFile { path: target });
        }

        let count = hosts.len();
        info!(path = %target.display(), hosts = count, "blacklist loaded");
        self.state = StoreState::Loaded { base, hosts };
        Ok(count)
    }

    /// Load the master list (`blacklists.txt`).
    pub fn load_master(&mut self) -> Result<usize> {
        self.load(MASTER_FILE)
    }

    /// Host names from the last successful load.
    pub fn host_names(&self) -> Result<&HostList> {
        match &self.state {
            StoreState::Loaded { hosts, .. } if !hosts.is_empty() => Ok(hosts),
            _ => Err(StoreError::NotLoaded),
        }
    }

    /// Rebuild `blacklistsAlive.txt` from the responsive entries of `results`.
    ///
    /// Input is validated before any file is touched. The new file replaces
    /// the old one atomically; see [`alive::rebuild`].
    pub fn write_alive_subset(&mut self, results: &[AliveCheckResult]) -> Result<usize> {
        alive::validate(results)?;
        let base = self.ensure_base()?.to_path_buf();
        alive::rebuild(&base, results, self.config.keep_temp_on_rename_failure)
    }

    /// Delete `blacklistsAlive.txt` if it exists. Returns whether it did.
    pub fn delete_alive_subset(&mut self) -> Result<bool> {
        let base = self.ensure_base()?.to_path_buf();
        alive::remove(&base)
    }

    fn ensure_base(&mut self) -> Result<&Path> {
        if matches!(self.state, StoreState::Unconfigured) {
            let base = PathResolver::from_config(&self.config).resolve()?;
            info!(path = %base.display(), "blacklist directory resolved");
            self.state = StoreState::PathSet { base };
        }
        self.state
            .base_path()
            .ok_or_else(|| StoreError::PathResolution {
                searched: Vec::new(),
            })
    }
}

/// A non-empty path made only of normal components (no root, no `..`).
fn is_plain_relative(path: &Path) -> bool {
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxtoolbox_core::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with_master(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MASTER_FILE), content).unwrap();
        dir
    }

    /// Store that can only auto-detect `search_root/<candidate>`.
    fn detecting_store(search_root: &Path, candidate: &str) -> BlacklistStore {
        BlacklistStore::new(
            StoreConfig::default()
                .search_root(search_root)
                .search_paths([candidate])
                .search_data_dir(false),
        )
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = dir_with_master("a.com\n\nb.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());

        assert_eq!(store.load_master().unwrap(), 2);
        assert_eq!(store.host_names().unwrap().as_slice(), ["a.com", "b.com"]);
    }

    #[test]
    fn test_load_preserves_order_and_duplicates() {
        let dir = dir_with_master("zen.spamhaus.org\r\nbl.spamcop.net\r\n\r\nzen.spamhaus.org\r\n");
        let mut store = BlacklistStore::with_base_path(dir.path());
        store.load_master().unwrap();

        assert_eq!(
            store.host_names().unwrap().as_slice(),
            ["zen.spamhaus.org", "bl.spamcop.net", "zen.spamhaus.org"]
        );
    }

    #[test]
    fn test_load_empty_file_fails() {
        for content in ["", "\n\n\n", "\r\n\r\n"] {
            let dir = dir_with_master(content);
            let mut store = BlacklistStore::with_base_path(dir.path());
            let err = store.load_master().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyFile);
            assert!(err.is_precondition());
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        let err = store.load("nope.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.path(), Some(dir.path().join("nope.txt").as_path()));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        let err = store.load("sub").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }

    #[test]
    fn test_load_keeps_whitespace_only_lines() {
        let dir = dir_with_master("a.com\n  \n\t\nb.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());

        assert_eq!(store.load_master().unwrap(), 4);
        assert_eq!(
            store.host_names().unwrap().as_slice(),
            ["a.com", "  ", "\t", "b.com"]
        );
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MASTER_FILE), b"a.com\n\xe9bad.org\nb.com\n").unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        assert_eq!(store.load_master().unwrap(), 3);
        let hosts = store.host_names().unwrap();
        assert_eq!(hosts[0], "a.com");
        assert_eq!(hosts[1], "\u{fffd}bad.org");
        assert_eq!(hosts[2], "b.com");
    }

    #[test]
    fn test_load_rejects_paths_outside_base() {
        let base = dir_with_master("a.com\n");
        let outside = dir_with_master("secret.org\n");
        let mut store = BlacklistStore::with_base_path(base.path().join("sub"));
        fs::create_dir(base.path().join("sub")).unwrap();

        let absolute = outside.path().join(MASTER_FILE);
        let parent = Path::new("..").join(MASTER_FILE);
        for name in [absolute.as_path(), parent.as_path(), Path::new("")] {
            let err = store.load(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{}", name.display());
        }
        assert_eq!(store.state(), &StoreState::PathSet { base: base.path().join("sub") });

        // Nested relative names stay allowed.
        fs::write(base.path().join("sub").join("extra.txt"), "x.org\n").unwrap();
        assert_eq!(store.load("./extra.txt").unwrap(), 1);
    }

    #[test]
    fn test_host_names_before_load_fails() {
        let dir = dir_with_master("a.com\n");
        let store = BlacklistStore::with_base_path(dir.path());
        assert_eq!(store.host_names().unwrap_err().kind(), ErrorKind::NotLoaded);

        let unconfigured = BlacklistStore::default();
        assert_eq!(
            unconfigured.host_names().unwrap_err().kind(),
            ErrorKind::NotLoaded
        );
    }

    #[test]
    fn test_reload_replaces_list() {
        let dir = dir_with_master("a.com\nb.com\n");
        fs::write(dir.path().join("other.txt"), "c.com\n").unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        store.load_master().unwrap();
        store.load("other.txt").unwrap();
        assert_eq!(store.host_names().unwrap().as_slice(), ["c.com"]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_list() {
        let dir = dir_with_master("a.com\n");
        fs::write(dir.path().join("empty.txt"), "\n").unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        store.load_master().unwrap();
        assert!(store.load("empty.txt").is_err());
        assert!(store.load("missing.txt").is_err());
        assert_eq!(store.host_names().unwrap().as_slice(), ["a.com"]);
    }

    #[test]
    fn test_explicit_path_is_not_checked() {
        let mut store = BlacklistStore::default();
        let base = store.resolve_path(Some(Path::new("/custom/dir"))).unwrap();
        assert_eq!(base, Path::new("/custom/dir"));
        assert_eq!(
            store.alive_path(),
            Some(PathBuf::from("/custom/dir/blacklistsAlive.txt"))
        );
    }

    #[test]
    fn test_explicit_path_beats_auto_detection() {
        let root = TempDir::new().unwrap();
        let detected = root.path().join("detected");
        fs::create_dir(&detected).unwrap();
        fs::write(detected.join(MASTER_FILE), "auto.org\n").unwrap();
        let explicit = dir_with_master("explicit.org\n");

        let mut store = detecting_store(root.path(), "detected");
        store.resolve_path(Some(explicit.path())).unwrap();
        store.load_master().unwrap();

        assert_eq!(store.base_path(), Some(explicit.path()));
        assert_eq!(store.host_names().unwrap().as_slice(), ["explicit.org"]);
    }

    #[test]
    fn test_load_resolves_lazily() {
        let root = TempDir::new().unwrap();
        let detected = root.path().join("blacklists");
        fs::create_dir(&detected).unwrap();
        fs::write(detected.join(MASTER_FILE), "lazy.org\n").unwrap();

        let mut store = detecting_store(root.path(), "blacklists");
        assert_eq!(store.state(), &StoreState::Unconfigured);

        store.load_master().unwrap();
        assert_eq!(store.base_path(), Some(detected.as_path()));
        assert!(matches!(store.state(), StoreState::Loaded { .. }));
    }

    #[test]
    fn test_auto_detection_failure() {
        let root = TempDir::new().unwrap();
        let mut store = detecting_store(root.path(), "missing");

        let err = store.resolve_path(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathResolution);
        assert_eq!(store.state(), &StoreState::Unconfigured);

        let err = store.delete_alive_subset().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathResolution);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = dir_with_master("a.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());
        store.load_master().unwrap();

        // Auto-resolve on an already-set path changes nothing.
        store.resolve_path(None).unwrap();
        store.resolve_path(None).unwrap();
        assert!(store.host_names().is_ok());
    }

    #[test]
    fn test_explicit_path_drops_loaded_list() {
        let dir = dir_with_master("a.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());
        store.load_master().unwrap();

        store.resolve_path(Some(dir.path())).unwrap();
        assert_eq!(store.host_names().unwrap_err().kind(), ErrorKind::NotLoaded);
    }

    #[test]
    fn test_reset_returns_to_unconfigured() {
        let dir = dir_with_master("a.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());
        store.load_master().unwrap();

        store.reset();
        assert_eq!(store.state(), &StoreState::Unconfigured);
        assert!(store.base_path().is_none());
    }

    #[test]
    fn test_write_alive_subset_end_to_end() {
        let dir = dir_with_master("a.com\nb.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());
        store.load_master().unwrap();

        let results = vec![AliveCheckResult::alive("a.com"), AliveCheckResult::dead("b.com")];
        assert_eq!(store.write_alive_subset(&results).unwrap(), 1);

        let content = fs::read_to_string(store.alive_path().unwrap()).unwrap();
        assert_eq!(content, "a.com\n");

        // The alive subset can be read back like any list file.
        store.load(ALIVE_FILE).unwrap();
        assert_eq!(store.host_names().unwrap().as_slice(), ["a.com"]);
    }

    #[test]
    fn test_write_alive_subset_rejects_empty_input_before_resolving() {
        let root = TempDir::new().unwrap();
        let mut store = detecting_store(root.path(), "missing");

        let err = store.write_alive_subset(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(store.state(), &StoreState::Unconfigured);
    }

    #[test]
    fn test_write_alive_subset_no_alive_keeps_existing() {
        let dir = dir_with_master("a.com\n");
        let alive = dir.path().join(ALIVE_FILE);
        fs::write(&alive, "previous.org\n").unwrap();
        let mut store = BlacklistStore::with_base_path(dir.path());

        let err = store
            .write_alive_subset(&[AliveCheckResult::dead("a.com")])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoAliveEntries);
        assert_eq!(fs::read_to_string(&alive).unwrap(), "previous.org\n");
    }

    #[test]
    fn test_delete_alive_subset_idempotent() {
        let dir = dir_with_master("a.com\n");
        let mut store = BlacklistStore::with_base_path(dir.path());

        assert!(!store.delete_alive_subset().unwrap());
        store
            .write_alive_subset(&[AliveCheckResult::alive("a.com")])
            .unwrap();
        assert!(store.delete_alive_subset().unwrap());
        assert!(!store.delete_alive_subset().unwrap());
        assert!(dir.path().join(MASTER_FILE).exists());
    }
}
