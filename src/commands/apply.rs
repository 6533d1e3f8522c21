//! Command: link every tracked file into place.
use anyhow::Result;

use super::CommandSetup;
use super::status::NOTHING_TRACKED;
use crate::cli::GlobalOpts;
use crate::config::manifest::Manifest;
use crate::error::DotsError;
use crate::logging::Logger;
use crate::resources::{Applicable as _, ResourceChange, TrackedLink};

/// Counts reported by an apply run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Links created or replaced.
    pub linked: usize,
    /// Links that were already correct.
    pub already_ok: usize,
}

/// Create or repair the symlink of every tracked file.
///
/// # Errors
///
/// Returns the first entry that cannot be linked; earlier entries stay
/// linked.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let manifest = setup.load_manifest()?;
    if manifest.is_empty() {
        log.info(&format!("\x1b[33m{NOTHING_TRACKED}\x1b[0m"));
        return Ok(());
    }

    log.stage("Applying links");
    let summary = apply_all(&setup, &manifest, log)?;
    log.info(&format!(
        "{} linked, {} already ok",
        summary.linked, summary.already_ok
    ));
    if let Some(path) = log.log_path() {
        log.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
    }
    Ok(())
}

/// Apply every entry in manifest order.
///
/// # Errors
///
/// See [`run`].
pub fn apply_all(setup: &CommandSetup, manifest: &Manifest, log: &Logger) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();
    for entry in &manifest.files {
        let link = TrackedLink::new(entry.clone());
        match link.apply().map_err(DotsError::from)? {
            ResourceChange::Applied => {
                summary.linked += 1;
                log.info(&format!(
                    "\x1b[32mLinked {} -> {}\x1b[0m",
                    setup.display(&entry.target),
                    setup.display(&entry.source)
                ));
            }
            ResourceChange::AlreadyCorrect => {
                summary.already_ok += 1;
                log.debug(&format!("ok: {}", link.description()));
            }
        }
    }
    Ok(summary)
}
