use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for blacklist store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when reading or rebuilding blacklist files
#[derive(Error, Debug)]
pub enum StoreError {
    /// Host names were requested before a list was loaded
    #[error("blacklist is not loaded, load a blacklist file first")]
    NotLoaded,

    /// The file was read but held no host names
    #[error("blacklist file is empty: {}", path.display())]
    EmptyFile {
        /// File that was read
        path: PathBuf,
    },

    /// Caller passed input that violates the operation's contract
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The file does not exist or is not readable
    #[error("blacklist file does not exist in: {}", path.display())]
    FileNotFound {
        /// File that was looked up
        path: PathBuf,
    },

    /// The read itself failed
    #[error("cannot get contents from {}: {source}", path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// No candidate directory contains the master list
    #[error("standard path to the blacklist file not found (searched {})", display_paths(searched))]
    PathResolution {
        /// Every directory probed, in order
        searched: Vec<PathBuf>,
    },

    /// The scratch file could not be created
    #[error("cannot create new file in {}: {source}", path.display())]
    WriteOpen {
        /// Directory the scratch file was created in
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing to the open scratch file failed
    #[error("cannot write to {}: {source}", path.display())]
    Write {
        /// Scratch file being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// No result was responsive, so there is nothing to publish
    #[error("no responsive blacklists, {} left unchanged", path.display())]
    NoAliveEntries {
        /// Alive file that was not replaced
        path: PathBuf,
    },

    /// Promoting the scratch file over the alive file failed
    #[error("cannot create alive blacklist file {}, rename failed: {source}", path.display())]
    Rename {
        /// Alive file that was the rename target
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Removing the alive file failed for a reason other than absence
    #[error("cannot delete {}: {source}", path.display())]
    Delete {
        /// Alive file that was being removed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Store configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Discriminant of a [`StoreError`], for branching without matching fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotLoaded,
    EmptyFile,
    InvalidInput,
    FileNotFound,
    Read,
    PathResolution,
    WriteOpen,
    Write,
    NoAliveEntries,
    Rename,
    Delete,
    Config,
}

impl StoreError {
    /// Returns the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotLoaded => ErrorKind::NotLoaded,
            Self::EmptyFile { .. } => ErrorKind::EmptyFile,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Read { .. } => ErrorKind::Read,
            Self::PathResolution { .. } => ErrorKind::PathResolution,
            Self::WriteOpen { .. } => ErrorKind::WriteOpen,
            Self::Write { .. } => ErrorKind::Write,
            Self::NoAliveEntries { .. } => ErrorKind::NoAliveEntries,
            Self::Rename { .. } => ErrorKind::Rename,
            Self::Delete { .. } => ErrorKind::Delete,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns true if the caller broke a contract, as opposed to the
    /// file system being in an unexpected state
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotLoaded | Self::EmptyFile { .. } | Self::InvalidInput(_)
        )
    }

    /// Returns the path the failing operation was working on, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::EmptyFile { path }
            | Self::FileNotFound { path }
            | Self::Read { path, .. }
            | Self::WriteOpen { path, .. }
            | Self::Write { path, .. }
            | Self::NoAliveEntries { path }
            | Self::Rename { path, .. }
            | Self::Delete { path, .. } => Some(path),
            Self::NotLoaded
            | Self::InvalidInput(_)
            | Self::PathResolution { .. }
            | Self::Config(_) => None,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::from("no candidates");
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = StoreError::FileNotFound {
            path: PathBuf::from("/srv/bl/blacklists.txt"),
        };
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(!err.is_precondition());

        assert_eq!(StoreError::NotLoaded.kind(), ErrorKind::NotLoaded);
        assert!(StoreError::NotLoaded.is_precondition());
        assert!(StoreError::InvalidInput("empty".into()).is_precondition());
    }

    #[test]
    fn test_display_includes_path() {
        let err = StoreError::EmptyFile {
            path: PathBuf::from("/srv/bl/blacklists.txt"),
        };
        assert!(err.to_string().contains("/srv/bl/blacklists.txt"));
        assert_eq!(err.path(), Some(std::path::Path::new("/srv/bl/blacklists.txt")));
    }

    #[test]
    fn test_path_resolution_lists_candidates() {
        let err = StoreError::PathResolution {
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/a, /b"));
        assert!(err.path().is_none());

        let none = StoreError::PathResolution { searched: vec![] };
        assert!(none.to_string().contains("no candidates"));
    }

    #[test]
    fn test_io_source_is_exposed() {
        use std::error::Error as _;
        let err = StoreError::Rename {
            path: PathBuf::from("/srv/bl/blacklistsAlive.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert_eq!(err.kind(), ErrorKind::Rename);
    }
}
