//! Importing live files into the managed directory.
use std::path::{Path, PathBuf};

use super::error::{ResourceError, Result};
use super::fs::copy_file;
use super::helpers::fs::probe;

/// Copy the regular file at `source` into `managed_dir` and return the
/// stored path.
///
/// The stored name is the final component of `source`.  Two different
/// sources sharing a basename map to the same stored path, and the later
/// import overwrites the earlier copy.
///
/// # Errors
///
/// - [`ResourceError::FilesystemProbeFailed`] if `source` cannot be
///   inspected (including when it does not exist)
/// - [`ResourceError::SourceIsSymlink`] if `source` is a symbolic link
/// - [`ResourceError::NotARegularFile`] if `source` is a directory or any
///   other non-regular node, or has no file name
/// - any [`copy_file`] error, including [`ResourceError::SameFile`] when
///   `source` already lives at its stored path
pub fn import_file(managed_dir: &Path, source: &Path) -> Result<PathBuf> {
    let probe_failed = |e| ResourceError::FilesystemProbeFailed {
        path: source.to_path_buf(),
        source: e,
    };
    let file_type = std::fs::symlink_metadata(source).map_err(probe_failed)?.file_type();
    if file_type.is_symlink() {
        return Err(ResourceError::SourceIsSymlink {
            path: source.to_path_buf(),
        });
    }
    if !file_type.is_file() {
        return Err(ResourceError::NotARegularFile {
            path: source.to_path_buf(),
        });
    }

    let Some(destination) = stored_path(managed_dir, source) else {
        return Err(ResourceError::NotARegularFile {
            path: source.to_path_buf(),
        });
    };
    copy_file(source, &destination)?;
    Ok(destination)
}

/// Where [`import_file`] stores `source`: its basename inside `managed_dir`.
///
/// `None` when `source` has no final component (e.g. `/` or `..`).
#[must_use]
pub fn stored_path(managed_dir: &Path, source: &Path) -> Option<PathBuf> {
    source.file_name().map(|name| managed_dir.join(name))
}

/// Whether something already occupies the stored path `import_file` would
/// pick for `source`.
///
/// # Errors
///
/// Returns [`ResourceError::FilesystemProbeFailed`] if the stored path cannot
/// be inspected.
pub fn stored_path_taken(managed_dir: &Path, source: &Path) -> Result<bool> {
    let Some(stored) = stored_path(managed_dir, source) else {
        return Ok(false);
    };
    Ok(probe(&stored)?.is_some())
}
