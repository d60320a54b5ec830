//! mxbl - DNSBL blacklist file maintenance
//!
//! Lists blacklist host names and rebuilds the alive subset from
//! liveness-check results.

use anyhow::Result;

fn main() -> Result<()> {
    mxtoolbox_cli::run()
}
