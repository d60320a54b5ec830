//! `mxbl list` - Print blacklist host names.

use anyhow::Result;
use colored::Colorize;
use mxtoolbox_core::files::{ALIVE_FILE, MASTER_FILE};

use super::Context;
use crate::cli::args::ListArgs;
use crate::output::{print_json, OutputFormat};

pub fn execute(ctx: &Context, args: &ListArgs) -> Result<()> {
    let file = match (&args.file, args.alive) {
        (Some(name), _) => name.as_str(),
        (None, true) => ALIVE_FILE,
        (None, false) => MASTER_FILE,
    };

    let mut store = ctx.store();
    store.load(file)?;
    let hosts = store.host_names()?;

    match ctx.output_format {
        OutputFormat::Json => {
            print_json(hosts)?;
        }
        OutputFormat::Pretty => {
            if ctx.verbose {
                let base = store.base_path().map(|p| p.join(file));
                eprintln!(
                    "{} {} blacklists in {}",
                    "Loaded:".bold(),
                    hosts.len().to_string().cyan(),
                    base.as_deref().map_or_else(String::new, |p| p.display().to_string())
                );
            }
            for host in hosts {
                println!("{host}");
            }
        }
    }

    Ok(())
}
