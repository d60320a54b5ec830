//! Alive-subset file: atomic rebuild and removal.
//!
//! The rebuild writes responsive host names into a uniquely named scratch
//! file in the blacklist directory and renames it over `blacklistsAlive.txt`
//! only once it is complete and non-empty. Readers of the alive file see
//! either the previous list or the new one, never a partial write.

use mxtoolbox_core::files::{ALIVE_FILE, ALIVE_TEMP_PREFIX, ALIVE_TEMP_SUFFIX};
use mxtoolbox_core::{AliveCheckResult, Result, StoreError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile, PersistError};
use tracing::{debug, info, warn};

/// Check that `results` can be used for a rebuild.
///
/// Every element is checked, not only the first.
pub fn validate(results: &[AliveCheckResult]) -> Result<()> {
    if results.is_empty() {
        return Err(StoreError::InvalidInput(String::from(
            "no alive-check results supplied, run the liveness check first",
        )));
    }
    if let Some(index) = results.iter().position(|r| r.host_name.trim().is_empty()) {
        return Err(StoreError::InvalidInput(format!(
            "alive-check result {index} has no host name"
        )));
    }
    Ok(())
}

/// Replace `dir/blacklistsAlive.txt` with the responsive hosts of `results`.
///
/// Returns the number of host names written. With no responsive entry the
/// existing alive file is left untouched and `NoAliveEntries` is returned.
/// When the final rename fails the scratch file is removed, unless
/// `keep_temp_on_rename_failure` is set.
pub fn rebuild(
    dir: &Path,
    results: &[AliveCheckResult],
    keep_temp_on_rename_failure: bool,
) -> Result<usize> {
    validate(results)?;

    let target = dir.join(ALIVE_FILE);
    let mut tmp = create_scratch(dir).map_err(|source| StoreError::WriteOpen {
        path: dir.to_path_buf(),
        source,
    })?;
    let tmp_path = tmp.path().to_path_buf();
    debug!(path = %tmp_path.display(), "writing alive blacklists to scratch file");

    let write_err = |source: io::Error| StoreError::Write {
        path: tmp_path.clone(),
        source,
    };
    let written = write_responsive(tmp.as_file_mut(), results).map_err(write_err)?;
    let size = tmp.as_file().metadata().map_err(write_err)?.len();

    if size == 0 {
        discard(tmp);
        warn!(path = %target.display(), "no responsive blacklists, alive file left unchanged");
        return Err(StoreError::NoAliveEntries { path: target });
    }

    tmp.as_file().sync_all().map_err(write_err)?;

    match tmp.persist(&target) {
        Ok(_) => {
            info!(path = %target.display(), hosts = written, "alive blacklist file rebuilt");
            Ok(written)
        }
        Err(PersistError { error, file }) => {
            if keep_temp_on_rename_failure {
                match file.keep() {
                    Ok((_, kept)) => {
                        warn!(path = %kept.display(), error = %error, "rename failed, scratch file kept");
                    }
                    Err(e) => {
                        warn!(path = %tmp_path.display(), error = %e.error, "rename failed, scratch file could not be kept");
                    }
                }
            } else {
                discard(file);
                warn!(path = %target.display(), error = %error, "rename failed, scratch file removed");
            }
            Err(StoreError::Rename {
                path: target,
                source: error,
            })
        }
    }
}

/// Remove `dir/blacklistsAlive.txt` if present.
///
/// Returns whether a file was removed. Absence is not an error.
pub fn remove(dir: &Path) -> Result<bool> {
    let path = dir.join(ALIVE_FILE);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "alive blacklist file deleted");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StoreError::Delete { path, source }),
    }
}

fn create_scratch(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(ALIVE_TEMP_PREFIX).suffix(ALIVE_TEMP_SUFFIX);
    // tempfile creates 0600; the alive list is read by other processes.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    builder.tempfile_in(dir)
}

fn write_responsive(file: &mut File, results: &[AliveCheckResult]) -> io::Result<usize> {
    let mut out = BufWriter::new(file);
    let mut count = 0;
    for result in results.iter().filter(|r| r.is_responsive) {
        writeln!(out, "{}", result.host_name)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

fn discard(tmp: NamedTempFile) {
    let path = tmp.path().to_path_buf();
    if let Err(e) = tmp.close() {
        warn!(path = %path.display(), error = %e, "failed to remove scratch file");
    }
}
