//! Small filesystem helpers shared by the resource primitives.
use std::io;
use std::path::Path;

use crate::resources::error::{ResourceError, Result};

/// Mode used for directories created on behalf of a link or restored file.
#[cfg(unix)]
const PARENT_DIR_MODE: u32 = 0o755;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) with mode `0755` if necessary.
///
/// # Errors
///
/// Returns [`ResourceError::DirectoryCreationFailed`] if the directory cannot
/// be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt as _;
        builder.mode(PARENT_DIR_MODE);
    }

    builder
        .create(parent)
        .map_err(|source| ResourceError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            source,
        })
}

/// `lstat` `path`, mapping "not found" to `None`.
///
/// # Errors
///
/// Returns [`ResourceError::FilesystemProbeFailed`] for any failure other
/// than the path not existing.
pub fn probe(path: &Path) -> Result<Option<std::fs::Metadata>> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ResourceError::FilesystemProbeFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Remove a non-directory filesystem object (file, symlink, fifo, ...).
///
/// # Errors
///
/// Returns [`ResourceError::RemovalFailed`] if the object cannot be removed.
pub fn remove_node(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|source| ResourceError::RemovalFailed {
        path: path.to_path_buf(),
        source,
    })
}
