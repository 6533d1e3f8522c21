//! Command: stop tracking a file.
use anyhow::{Context as _, Result};
use std::path::Path;

use super::{CommandSetup, resolve_target};
use crate::cli::{FileOpts, GlobalOpts};
use crate::config::manifest::TrackedEntry;
use crate::error::{CommandError, DotsError};
use crate::logging::Logger;
use crate::resources::{Applicable as _, TrackedLink};

/// Replace the symlink with a plain copy, drop the manifest entry and delete
/// the stored copy.
///
/// # Errors
///
/// Returns an error if dots is not initialized, the file is not tracked,
/// something other than a symlink occupies the target, or any filesystem
/// step fails.
pub fn run(global: &GlobalOpts, opts: &FileOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    untrack(&setup, &opts.file, log)?;
    Ok(())
}

/// Untrack `file` under `setup` and return the removed entry.
///
/// # Errors
///
/// See [`run`].
pub fn untrack(setup: &CommandSetup, file: &Path, log: &Logger) -> Result<TrackedEntry> {
    setup.ensure_manifest_exists()?;
    let mut manifest = setup.load_manifest()?;
    let target = resolve_target(file)?;
    let entry = manifest
        .find(&target)
        .cloned()
        .ok_or_else(|| CommandError::NotTracked(target.clone()))?;

    let link = TrackedLink::new(entry.clone());
    link.remove().map_err(DotsError::from)?;
    log.debug(&format!("restored {}", link.description()));

    manifest.remove(&target);
    setup.save_manifest(&manifest)?;

    match std::fs::remove_file(&entry.source) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e)
                .with_context(|| format!("removing stored file {}", entry.source.display()));
        }
    }

    log.info(&format!(
        "\x1b[32mRemoved {} from dots\x1b[0m",
        setup.display(&entry.target)
    ));
    Ok(entry)
}
