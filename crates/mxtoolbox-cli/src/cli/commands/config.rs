//! `mxbl config` - CLI configuration inspection.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{print_json, OutputFormat};

pub fn execute(ctx: &Context, args: &ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let store = &ctx.store_config;

    match ctx.output_format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "output_format": ctx.output_format,
                "store": store,
            }))?;
        }
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!("  {} {}", "output_format:".bold(), ctx.output_format);

            let base = store
                .base_path
                .as_ref()
                .map_or_else(|| "(auto-detect)".dimmed().to_string(), |p| p.display().to_string());
            println!("  {} {}", "base_path:".bold(), base);

            let root = store
                .search_root
                .as_ref()
                .map_or_else(|| "(executable directory)".dimmed().to_string(), |p| p.display().to_string());
            println!("  {} {}", "search_root:".bold(), root);

            println!("  {}", "search_paths:".bold());
            for path in &store.search_paths {
                println!("    {}", path.display());
            }
            println!("  {} {}", "search_data_dir:".bold(), store.search_data_dir);
            println!(
                "  {} {}",
                "keep_temp_on_rename_failure:".bold(),
                store.keep_temp_on_rename_failure
            );
        }
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = match &ctx.config_path {
        Some(p) => p.clone(),
        None => Config::path()?,
    };
    println!("{}", path.display());
    Ok(())
}
