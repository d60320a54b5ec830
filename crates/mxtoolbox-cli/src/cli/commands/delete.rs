//! `mxbl delete` - Remove the alive subset.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::{print_json, OutputFormat};

pub fn execute(ctx: &Context) -> Result<()> {
    let mut store = ctx.store();
    let deleted = store.delete_alive_subset()?;

    match ctx.output_format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "deleted": deleted, "path": store.alive_path() }))?;
        }
        OutputFormat::Pretty => {
            if deleted {
                println!("{} alive blacklist file deleted.", "Success:".green().bold());
            } else {
                println!("{}", "No alive blacklist file to delete.".dimmed());
            }
        }
    }

    Ok(())
}
