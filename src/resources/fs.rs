//! Durable byte-for-byte file copy.
use std::fs::{File, Metadata, OpenOptions, Permissions};
use std::io;
use std::path::Path;

use super::error::{ResourceError, Result};

/// Copy the regular file `src` to `dst`, creating or truncating `dst`.
///
/// The destination ends up with exactly the permission bits of the source
/// and is flushed to stable storage before this returns.  The copy is not
/// atomic: on error `dst` may be left partially written.  A `dst` that
/// already is `src` (same path, hard link or symlink) is refused before
/// anything is truncated.
///
/// # Errors
///
/// - [`ResourceError::SourceUnreadable`] if `src` cannot be opened or stat'ed
/// - [`ResourceError::SameFile`] if `dst` already is `src`
/// - [`ResourceError::DestinationUnwritable`] if `dst` cannot be opened or
///   its permissions cannot be set
/// - [`ResourceError::CopyFailed`] if transferring the bytes fails
/// - [`ResourceError::SyncFailed`] if flushing `dst` fails
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let unreadable = |source| ResourceError::SourceUnreadable {
        path: src.to_path_buf(),
        source,
    };
    let unwritable = |source| ResourceError::DestinationUnwritable {
        path: dst.to_path_buf(),
        source,
    };
    let copy_failed = |source| ResourceError::CopyFailed {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };
    let sync_failed = |source| ResourceError::SyncFailed {
        path: dst.to_path_buf(),
        source,
    };

    let mut input = File::open(src).map_err(unreadable)?;
    let src_meta = input.metadata().map_err(unreadable)?;
    if is_same_file(src, &src_meta, dst) {
        return Err(ResourceError::SameFile {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    let permissions = src_meta.permissions();

    let mut output = open_destination(dst, &permissions).map_err(unwritable)?;
    io::copy(&mut input, &mut output).map_err(copy_failed)?;

    // Creation mode is filtered by the umask and ignored for existing files.
    output.set_permissions(permissions).map_err(unwritable)?;
    output.sync_all().map_err(sync_failed)
}

/// Whether `dst` resolves to the same inode as the already opened `src`.
#[cfg(unix)]
fn is_same_file(_src: &Path, src_meta: &Metadata, dst: &Path) -> bool {
    use std::os::unix::fs::MetadataExt as _;

    std::fs::metadata(dst).is_ok_and(|dst_meta| {
        dst_meta.dev() == src_meta.dev() && dst_meta.ino() == src_meta.ino()
    })
}

#[cfg(not(unix))]
fn is_same_file(src: &Path, _src_meta: &Metadata, dst: &Path) -> bool {
    matches!(
        (std::fs::canonicalize(src), std::fs::canonicalize(dst)),
        (Ok(a), Ok(b)) if a == b
    )
}

fn open_destination(dst: &Path, permissions: &Permissions) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt as _, PermissionsExt as _};
        options.mode(permissions.mode() & 0o7777);
    }
    #[cfg(not(unix))]
    let _ = permissions;
    options.open(dst)
}
