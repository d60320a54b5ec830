//! Core types and errors for the DNSBL blacklist store.
//!
//! This crate provides the foundational types shared by the store and CLI:
//!
//! - **Types**: [`HostList`] (the loaded master list) and
//!   [`AliveCheckResult`] (one liveness probe outcome)
//! - **Files**: well-known file names inside a blacklist directory
//! - **Errors**: the store's error taxonomy with [`StoreError`] and [`ErrorKind`]
//!
//! # Example
//!
//! ```rust
//! use mxtoolbox_core::{AliveCheckResult, HostList};
//!
//! let hosts = HostList::parse("zen.spamhaus.org\n\nbl.spamcop.net\n");
//! assert_eq!(hosts.len(), 2);
//!
//! let results: Vec<AliveCheckResult> = hosts
//!     .iter()
//!     .map(|h| AliveCheckResult::alive(h.as_str()))
//!     .collect();
//! assert!(results.iter().all(|r| r.is_responsive));
//! ```

mod error;
pub mod files;
pub mod types;

pub use error::{ErrorKind, Result, StoreError};
pub use types::*;
