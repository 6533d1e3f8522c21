//! Command: show content differences through the external `diff` tool.
use anyhow::Result;
use std::io::IsTerminal as _;

use super::status::NOTHING_TRACKED;
use super::{CommandSetup, resolve_target};
use crate::cli::{DiffOpts, GlobalOpts};
use crate::config::manifest::{Manifest, TrackedEntry};
use crate::error::{CommandError, DotsError};
use crate::exec;
use crate::logging::Logger;
use crate::resources::{Resource as _, SyncState, TrackedLink};

/// Show `diff -u <target> <stored>` for one file, or for every diverged file.
///
/// # Errors
///
/// Returns an error if dots is not initialized, `diff` is unavailable or
/// fails, or the requested file is not tracked.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, opts: &DiffOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    setup.ensure_manifest_exists()?;
    let manifest = setup.load_manifest()?;
    if manifest.is_empty() {
        log.info(&format!("\x1b[33m{NOTHING_TRACKED}\x1b[0m"));
        return Ok(());
    }

    let colored = std::io::stdout().is_terminal();
    if let Some(file) = &opts.file {
        let target = resolve_target(file)?;
        let entry = manifest
            .find(&target)
            .ok_or_else(|| CommandError::NotTracked(target.clone()))?;
        let output = run_diff(entry)?;
        if output.trim().is_empty() {
            log.info(&format!(
                "\x1b[33mNo differences for {}\x1b[0m",
                setup.display(&entry.target)
            ));
        } else {
            print!("{}", colorize(&output, colored));
        }
        return Ok(());
    }

    let outputs = diverged_diffs(&manifest, log)?;
    if outputs.is_empty() {
        log.info("\x1b[33mNo diverged files.\x1b[0m");
        return Ok(());
    }
    let rendered: Vec<String> = outputs.iter().map(|o| colorize(o, colored)).collect();
    print!("{}", rendered.join("\n"));
    Ok(())
}

/// Diff output of every entry whose content status is `Diverged`.
///
/// # Errors
///
/// Returns the first status or diff failure.
pub fn diverged_diffs(manifest: &Manifest, log: &Logger) -> Result<Vec<String>> {
    let mut outputs = Vec::new();
    for entry in &manifest.files {
        let status = TrackedLink::new(entry.clone())
            .current_state()
            .map_err(DotsError::from)?;
        if status.state != SyncState::Diverged {
            continue;
        }
        log.debug(&format!("diverged: {}", entry.target.display()));
        let output = run_diff(entry)?;
        if !output.trim().is_empty() {
            outputs.push(output);
        }
    }
    Ok(outputs)
}

/// Run `diff -u <target> <stored>`.
///
/// Exit status 0 (identical) and 1 (different) both yield the output.
///
/// # Errors
///
/// Returns [`CommandError::DiffUnavailable`] if `diff` is not on `PATH` and
/// [`CommandError::DiffFailed`] for any other exit status.
pub fn run_diff(entry: &TrackedEntry) -> Result<String> {
    if !exec::which("diff") {
        return Err(CommandError::DiffUnavailable.into());
    }
    let result = exec::run_unchecked(
        "diff",
        [
            std::ffi::OsStr::new("-u"),
            entry.target.as_os_str(),
            entry.source.as_os_str(),
        ],
    )?;
    match result.code {
        Some(0 | 1) => Ok(result.stdout),
        code => Err(CommandError::DiffFailed {
            code: code.unwrap_or(-1),
            stderr: result.stderr.trim().to_string(),
        }
        .into()),
    }
}

/// Color added lines green and removed lines red, leaving file headers alone.
#[must_use]
pub fn colorize(output: &str, colored: bool) -> String {
    let mut out = String::with_capacity(output.len());
    for line in output.lines() {
        let paint = if !colored {
            None
        } else if line.starts_with('+') && !line.starts_with("+++") {
            Some("\x1b[32m")
        } else if line.starts_with('-') && !line.starts_with("---") {
            Some("\x1b[31m")
        } else {
            None
        };
        match paint {
            Some(code) => {
                out.push_str(code);
                out.push_str(line);
                out.push_str("\x1b[0m");
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }
    out
}
