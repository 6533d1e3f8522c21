//! Command: print tracked targets.
use anyhow::Result;

use super::CommandSetup;
use super::status::NOTHING_TRACKED;
use crate::cli::GlobalOpts;
use crate::config::manifest::Manifest;
use crate::logging::Logger;

/// Print every tracked target, sorted.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let manifest = setup.load_manifest()?;
    if manifest.is_empty() {
        log.info(&format!("\x1b[33m{NOTHING_TRACKED}\x1b[0m"));
        return Ok(());
    }
    for line in targets(&setup, &manifest) {
        println!("{line}");
    }
    Ok(())
}

/// Tracked targets in display form, sorted by path.
#[must_use]
pub fn targets(setup: &CommandSetup, manifest: &Manifest) -> Vec<String> {
    manifest
        .sorted_by_target()
        .into_iter()
        .map(|e| setup.display(&e.target))
        .collect()
}
