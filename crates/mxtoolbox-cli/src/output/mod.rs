//! Output format selection and machine-readable printing.
//!
//! Every command prints either coloured text for a terminal or one compact
//! JSON document per invocation, so `mxbl -o json ... | jq` always sees a
//! single value on stdout.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured text, one host name per line for lists
    #[default]
    Pretty,
    /// A single compact JSON document
    Json,
}

impl OutputFormat {
    /// Name as accepted by `--output` and the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `value` to stdout as one line of compact JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    write_json(&mut stdout.lock(), value)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode JSON output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}
