//! Command implementations.

pub mod config;
pub mod delete;
pub mod list;
pub mod path;
pub mod rebuild;

use mxtoolbox_store::{BlacklistStore, StoreConfig};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective store configuration (config file plus `--dir`)
    pub store_config: StoreConfig,

    /// Config file given on the command line
    pub config_path: Option<PathBuf>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Create a blacklist store from the effective configuration.
    pub fn store(&self) -> BlacklistStore {
        BlacklistStore::new(self.store_config.clone())
    }
}
