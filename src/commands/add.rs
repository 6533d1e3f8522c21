//! Command: start tracking a file.
use anyhow::Result;
use std::path::Path;

use super::{CommandSetup, resolve_target};
use crate::cli::{FileOpts, GlobalOpts};
use crate::config::manifest::TrackedEntry;
use crate::error::{CommandError, DotsError};
use crate::logging::Logger;
use crate::resources::{store, symlink};

/// Copy `file` into `~/.dots`, record it in the manifest and replace the
/// original with a symlink to the stored copy.
///
/// # Errors
///
/// Returns an error if dots is not initialized, the file's stored copy would
/// land on the manifest, the file cannot be imported, the manifest cannot be
/// saved, or the symlink cannot be created.
pub fn run(global: &GlobalOpts, opts: &FileOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    track(&setup, &opts.file, log)?;
    Ok(())
}

/// Track `file` under `setup` and return the new manifest entry.
///
/// # Errors
///
/// See [`run`].
pub fn track(setup: &CommandSetup, file: &Path, log: &Logger) -> Result<TrackedEntry> {
    let target = resolve_target(file)?;
    setup.ensure_manifest_exists()?;
    let stored = store::stored_path(&setup.dots_dir, &target);
    if stored.as_deref() == Some(setup.manifest_path.as_path()) {
        return Err(CommandError::ReservedName(target).into());
    }
    let mut manifest = setup.load_manifest()?;

    if store::stored_path_taken(&setup.dots_dir, &target).map_err(DotsError::from)?
        && manifest
            .find(&target)
            .is_none_or(|existing| Some(&existing.source) != stored.as_ref())
    {
        log.warn(&format!(
            "{} overwrites an existing file in {}",
            setup.display(&target),
            setup.display(&setup.dots_dir)
        ));
    }

    let source = store::import_file(&setup.dots_dir, &target).map_err(DotsError::from)?;
    let entry = TrackedEntry::new(source, target);
    manifest.upsert(entry.clone());
    setup.save_manifest(&manifest)?;

    symlink::ensure_symlink(&entry.target, &entry.source).map_err(DotsError::from)?;
    log.info(&format!(
        "\x1b[32mTracked {} -> {}\x1b[0m",
        setup.display(&entry.target),
        setup.display(&entry.source)
    ));
    Ok(entry)
}
