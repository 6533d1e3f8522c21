//! Status resolution for tracked entries.
//!
//! Resolution runs in two stages.  [`link_status`] costs a single `lstat`
//! (plus a `readlink`) and settles every case where the live target is a
//! symlink or occupied by something else.  [`content_status`] refines the
//! cases stage one leaves open by checking the stored copy and, only when
//! the live target was found missing, comparing SHA-256 digests.
//!
//! A detected [`SyncState::Conflict`] is never relabelled from content: a
//! plain file or a foreign link stays a conflict even if its bytes match.
use std::io;

use super::error::{ResourceError, Result};
use super::hash::file_digest;
use super::helpers::fs::probe;
use super::{StatusEntry, SyncState};
use crate::config::manifest::TrackedEntry;

/// Qualifier for a live target that exists but is not a symlink.
pub const NOT_A_SYMLINK: &str = "not a symlink";
/// Qualifier when the authoritative copy in the managed directory is gone.
pub const STORED_FILE_MISSING: &str = "stored file missing";
/// Qualifier when the live target is absent.
pub const TARGET_MISSING: &str = "target missing";

/// Stage one: inspect the live target without following a final symlink.
///
/// The link value is compared to the stored path byte for byte; no
/// canonicalization takes place.
///
/// # Errors
///
/// Returns [`ResourceError::FilesystemProbeFailed`] if the target cannot be
/// inspected for a reason other than not existing, or its link value cannot
/// be read.
pub fn link_status(entry: &TrackedEntry) -> Result<StatusEntry> {
    let Some(meta) = probe(&entry.target)? else {
        return Ok(StatusEntry::new(entry.clone(), SyncState::Missing));
    };

    if !meta.file_type().is_symlink() {
        return Ok(StatusEntry::with_info(
            entry.clone(),
            SyncState::Conflict,
            NOT_A_SYMLINK,
        ));
    }

    let link = std::fs::read_link(&entry.target).map_err(|source| {
        ResourceError::FilesystemProbeFailed {
            path: entry.target.clone(),
            source,
        }
    })?;

    if link.as_os_str() == entry.source.as_os_str() {
        Ok(StatusEntry::new(entry.clone(), SyncState::Linked))
    } else {
        Ok(StatusEntry::with_info(
            entry.clone(),
            SyncState::Conflict,
            format!("links to {}", link.display()),
        ))
    }
}

/// Stage two: refine [`link_status`] with the stored copy and content.
///
/// - `Linked` is returned as is, without touching the stored copy.
/// - A vanished stored copy yields `Missing` / `"stored file missing"`,
///   whatever stage one found.
/// - A `Conflict` with the stored copy present is returned unchanged.
/// - A `Missing` target is compared by digest: absent or identical content
///   is `Missing` / `"target missing"`, different content is `Diverged`.
///
/// # Errors
///
/// - [`ResourceError::FilesystemProbeFailed`] if either path cannot be
///   inspected
/// - [`ResourceError::HashFailed`] if the stored copy (or an existing live
///   target) cannot be read for comparison
pub fn content_status(entry: &TrackedEntry) -> Result<StatusEntry> {
    let status = link_status(entry)?;
    if status.state == SyncState::Linked {
        return Ok(status);
    }

    if !stored_copy_exists(entry)? {
        return Ok(StatusEntry::with_info(
            entry.clone(),
            SyncState::Missing,
            STORED_FILE_MISSING,
        ));
    }

    if status.state == SyncState::Conflict {
        return Ok(status);
    }

    if same_content(entry)? {
        Ok(StatusEntry::with_info(
            entry.clone(),
            SyncState::Missing,
            TARGET_MISSING,
        ))
    } else {
        Ok(StatusEntry::new(entry.clone(), SyncState::Diverged))
    }
}

/// `stat` the stored copy (following symlinks), mapping "not found" to
/// `false`.
fn stored_copy_exists(entry: &TrackedEntry) -> Result<bool> {
    match std::fs::metadata(&entry.source) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ResourceError::FilesystemProbeFailed {
            path: entry.source.clone(),
            source,
        }),
    }
}

/// Compare digests of the stored copy and the live target.
///
/// A live target that does not exist counts as matching so the caller keeps
/// reporting it as missing rather than diverged.
fn same_content(entry: &TrackedEntry) -> Result<bool> {
    let stored = file_digest(&entry.source).map_err(|source| ResourceError::HashFailed {
        path: entry.source.clone(),
        source,
    })?;

    match file_digest(&entry.target) {
        Ok(live) => Ok(live == stored),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(source) => Err(ResourceError::HashFailed {
            path: entry.target.clone(),
            source,
        }),
    }
}
