//! Command: report the sync state of every tracked file.
use anyhow::Result;
use std::io::IsTerminal as _;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::config::manifest::Manifest;
use crate::error::DotsError;
use crate::logging::Logger;
use crate::resources::{Resource as _, StatusEntry, SyncState, TrackedLink};

/// Message printed when the manifest is empty.
pub const NOTHING_TRACKED: &str = "No tracked dotfiles.";

/// Print one status line per tracked file, sorted by target.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or any entry cannot be
/// inspected.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let manifest = setup.load_manifest()?;
    if manifest.is_empty() {
        log.info(&format!("\x1b[33m{NOTHING_TRACKED}\x1b[0m"));
        return Ok(());
    }

    let colored = std::io::stdout().is_terminal();
    for status in collect(&manifest)? {
        log.debug(&format!(
            "{}: {}",
            status.entry.target.display(),
            status.state
        ));
        println!("{}", render_line(&setup, &status, colored));
    }
    Ok(())
}

/// Resolve the content status of every entry, sorted by target.
///
/// # Errors
///
/// Returns the first status resolution failure.
pub fn collect(manifest: &Manifest) -> Result<Vec<StatusEntry>> {
    manifest
        .sorted_by_target()
        .into_iter()
        .map(|entry| {
            TrackedLink::new(entry.clone())
                .current_state()
                .map_err(|e| DotsError::from(e).into())
        })
        .collect()
}

/// Display label for a state.
#[must_use]
pub const fn label(state: SyncState) -> &'static str {
    match state {
        SyncState::Linked => "synced",
        SyncState::Missing => "missing",
        SyncState::Diverged => "diverged",
        SyncState::Conflict => "conflict",
    }
}

const fn color(state: SyncState) -> &'static str {
    match state {
        SyncState::Linked => "\x1b[32m",
        SyncState::Missing => "\x1b[33m",
        SyncState::Diverged => "\x1b[31m",
        SyncState::Conflict => "\x1b[35m",
    }
}

/// Format `<label padded to 9> <target> (<qualifier>)`.
#[must_use]
pub fn render_line(setup: &CommandSetup, status: &StatusEntry, colored: bool) -> String {
    let padded = format!("{:<9}", label(status.state));
    let label = if colored {
        format!("{}{padded}\x1b[0m", color(status.state))
    } else {
        padded
    };
    let target = setup.display(&status.entry.target);
    status.info.as_ref().map_or_else(
        || format!("{label} {target}"),
        |info| format!("{label} {target} ({info})"),
    )
}
