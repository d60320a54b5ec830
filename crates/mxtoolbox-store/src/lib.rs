//! mxtoolbox-store: persisted DNSBL host-name lists.
//!
//! Owns the files of a blacklist directory:
//!
//! - `blacklists.txt` - master list, read by [`BlacklistStore::load`]
//! - `blacklistsAlive.txt` - blacklists that answered the last liveness
//!   check, rebuilt atomically by [`BlacklistStore::write_alive_subset`]
//!
//! The directory is either given explicitly or detected by probing an
//! ordered list of candidate directories for `blacklists.txt`
//! (see [`PathResolver`]).
//!
//! # Concurrency
//!
//! Operations are synchronous and take no locks. Each rebuild writes into
//! its own uniquely named scratch file before the final rename, so
//! concurrent rebuilds cannot corrupt each other's output; the last rename
//! wins.

pub mod alive;
pub mod config;
pub mod paths;
pub mod store;

// Re-exports for convenience.
pub use config::StoreConfig;
pub use mxtoolbox_core::{AliveCheckResult, ErrorKind, HostList, Result, StoreError};
pub use paths::PathResolver;
pub use store::{BlacklistStore, StoreState};
