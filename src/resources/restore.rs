//! Turning a tracked link back into a plain file.
use super::error::{ResourceError, Result};
use super::fs::copy_file;
use super::helpers::fs::{ensure_parent_dir, probe, remove_node};
use crate::config::manifest::TrackedEntry;
use std::path::Path;

/// Copy the stored file to the live target, producing a real file there.
///
/// Only call this once the target is known to be free; see [`untrack`].
///
/// # Errors
///
/// Returns [`ResourceError::DirectoryCreationFailed`] if the target's parent
/// cannot be created, or any [`copy_file`] error (a missing stored file is
/// [`ResourceError::SourceUnreadable`]).
pub fn restore(entry: &TrackedEntry) -> Result<()> {
    ensure_parent_dir(&entry.target)?;
    copy_file(&entry.source, &entry.target)
}

/// Remove the symlink at `target`, if any.
///
/// An absent target is fine.  Anything that is not a symlink is refused so
/// that user data is never deleted.
///
/// # Errors
///
/// - [`ResourceError::TargetIsDirectory`] if a directory occupies `target`
/// - [`ResourceError::NotASymlink`] if another non-symlink object does
/// - [`ResourceError::FilesystemProbeFailed`] / [`ResourceError::RemovalFailed`]
///   on I/O failure
pub fn remove_link(target: &Path) -> Result<()> {
    let Some(meta) = probe(target)? else {
        return Ok(());
    };
    if meta.is_dir() {
        return Err(ResourceError::TargetIsDirectory {
            path: target.to_path_buf(),
        });
    }
    if !meta.file_type().is_symlink() {
        return Err(ResourceError::NotASymlink {
            path: target.to_path_buf(),
        });
    }
    remove_node(target)
}

/// Replace the live symlink with a plain copy of the stored file.
///
/// The stored file itself is left in place; deleting it is up to the caller
/// once the manifest no longer references it.
///
/// # Errors
///
/// Any [`remove_link`] or [`restore`] error.
pub fn untrack(entry: &TrackedEntry) -> Result<()> {
    remove_link(&entry.target)?;
    restore(entry)
}
