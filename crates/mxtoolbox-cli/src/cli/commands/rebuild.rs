//! `mxbl rebuild` - Publish a new alive subset.

use anyhow::{Context as _, Result};
use colored::Colorize;
use mxtoolbox_core::AliveCheckResult;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::Context;
use crate::cli::args::RebuildArgs;
use crate::output::{print_json, OutputFormat};

pub fn execute(ctx: &Context, args: &RebuildArgs) -> Result<()> {
    let results = read_results(&args.results)?;

    let mut store = ctx.store();
    let written = store.write_alive_subset(&results)?;
    let alive = store.alive_path();

    match ctx.output_format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "checked": results.len(),
                "written": written,
                "path": alive,
            }))?;
        }
        OutputFormat::Pretty => {
            println!(
                "{} wrote {} of {} blacklists to {}",
                "Success:".green().bold(),
                written.to_string().cyan(),
                results.len(),
                alive.as_deref().map_or_else(String::new, |p| p.display().to_string())
            );
        }
    }

    Ok(())
}

fn read_results(source: &Path) -> Result<Vec<AliveCheckResult>> {
    let content = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read results from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read results {}", source.display()))?
    };

    let results: Vec<AliveCheckResult> = serde_json::from_str(&content)
        .context("results must be a JSON array of {host_name, is_responsive}")?;
    debug!(source = %source.display(), results = results.len(), "read liveness results");
    Ok(results)
}
