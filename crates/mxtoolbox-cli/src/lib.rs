//! # mxtoolbox-cli
//!
//! Command-line front-end over [`mxtoolbox_store::BlacklistStore`].
//!
//! ## Features
//!
//! - **Path**: show which blacklist directory is in use
//! - **List**: print the master list or the alive subset
//! - **Rebuild**: publish a new alive subset from liveness-check results
//! - **Delete**: remove the alive subset
//! - **Output formats**: pretty text or JSON

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
