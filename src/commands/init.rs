//! Command: create the managed directory.
use anyhow::{Context as _, Result};
use std::path::Path;

use super::CommandSetup;
use crate::cli::{GlobalOpts, InitOpts};
use crate::error::CommandError;
use crate::logging::Logger;

/// Create `~/.dots`, write the manifest (keeping any existing entries) and,
/// unless `--no-git` is given, initialize a git repository there.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the manifest cannot
/// be read or written, or git initialization fails.
pub fn run(global: &GlobalOpts, opts: &InitOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    initialize(&setup, !opts.no_git, log)
}

/// Initialize the managed directory described by `setup`.
///
/// # Errors
///
/// See [`run`].
pub fn initialize(setup: &CommandSetup, with_git: bool, log: &Logger) -> Result<()> {
    crate::config::ensure_dots_dir(&setup.home)
        .with_context(|| format!("creating {}", setup.dots_dir.display()))?;

    let manifest = setup.load_manifest()?;
    setup.save_manifest(&manifest)?;
    log.debug(&format!(
        "manifest {} holds {} entries",
        setup.manifest_path.display(),
        manifest.files.len()
    ));

    if with_git {
        init_git_repo(&setup.dots_dir)?;
        log.debug("git repository initialized");
    }

    log.info(&format!(
        "\x1b[32mInitialized dots at {}\x1b[0m",
        setup.dots_dir.display()
    ));
    Ok(())
}

fn init_git_repo(path: &Path) -> Result<(), CommandError> {
    git2::Repository::init(path)
        .map(|_| ())
        .map_err(|source| CommandError::GitInit {
            path: path.to_path_buf(),
            source,
        })
}
