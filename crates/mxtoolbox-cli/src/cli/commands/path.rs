//! `mxbl path` - Show the blacklist directory in use.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::{print_json, OutputFormat};

pub fn execute(ctx: &Context) -> Result<()> {
    let mut store = ctx.store();
    let base = store.resolve_path(None)?.to_path_buf();

    match ctx.output_format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "base_path": base,
                "master": store.master_path(),
                "alive": store.alive_path(),
            }))?;
        }
        OutputFormat::Pretty => {
            if ctx.verbose {
                println!("{} {}", "Directory:".bold(), base.display().to_string().cyan());
                if let Some(alive) = store.alive_path() {
                    let state = if alive.exists() { "present".green() } else { "absent".dimmed() };
                    println!("{} {}", "Alive file:".bold(), state);
                }
            } else {
                println!("{}", base.display());
            }
        }
    }

    Ok(())
}
