//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Plain text when asked, and never escape codes next to JSON
    if cli.no_color || output_format.is_json() {
        colored::control::set_override(false);
    }

    // --dir overrides any configured directory
    let mut store_config = config.store;
    if let Some(dir) = cli.dir {
        store_config.base_path = Some(dir);
    }

    let ctx = commands::Context {
        store_config,
        config_path: cli.config,
        output_format,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Path => commands::path::execute(&ctx),
        Commands::List(args) => commands::list::execute(&ctx, &args),
        Commands::Rebuild(args) => commands::rebuild::execute(&ctx, &args),
        Commands::Delete => commands::delete::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, &args),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
