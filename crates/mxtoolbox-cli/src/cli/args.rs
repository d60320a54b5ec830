//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Maintain DNSBL blacklist files
///
/// Reads the master blacklist (blacklists.txt) and publishes the subset
/// of blacklists that answered the last liveness check
/// (blacklistsAlive.txt).
#[derive(Parser, Debug)]
#[command(name = "mxbl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Blacklist directory (skips auto-detection)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (default: platform config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the blacklist directory in use
    Path,

    /// Print blacklist host names
    List(ListArgs),

    /// Rebuild the alive subset from liveness-check results
    Rebuild(RebuildArgs),

    /// Delete the alive subset
    Delete,

    /// Inspect CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// List command
// ============================================================================

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List file inside the blacklist directory
    #[arg(short, long, value_name = "NAME", conflicts_with = "alive")]
    pub file: Option<String>,

    /// List the alive subset instead of the master list
    #[arg(short, long)]
    pub alive: bool,
}

// ============================================================================
// Rebuild command
// ============================================================================

#[derive(Args, Debug)]
pub struct RebuildArgs {
    /// JSON array of {"host_name", "is_responsive"} results ("-" for stdin)
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Show config file path
    Path,
}
