//! Symlink creation with directory protection.
use std::path::Path;

use super::error::{ResourceError, Result};
use super::helpers::fs::{ensure_parent_dir, probe, remove_node};

pub use super::status::link_status;

/// Make `target` a symbolic link whose raw value is `source`.
///
/// Parent directories of `target` are created as needed.  Whatever
/// currently occupies `target` (regular file, symlink, dangling symlink,
/// fifo, ...) is removed first, except a directory, which is never touched.
/// `source` is stored verbatim and does not need to exist.  Calling this
/// again with the same arguments leaves the same final state.
///
/// # Errors
///
/// - [`ResourceError::TargetIsDirectory`] if a directory occupies `target`
/// - [`ResourceError::DirectoryCreationFailed`] if parents cannot be created
/// - [`ResourceError::FilesystemProbeFailed`] if `target` cannot be inspected
/// - [`ResourceError::RemovalFailed`] if the old occupant cannot be removed
/// - [`ResourceError::LinkCreationFailed`] if the link cannot be created
pub fn ensure_symlink(target: &Path, source: &Path) -> Result<()> {
    ensure_parent_dir(target)?;

    if let Some(meta) = probe(target)? {
        if meta.is_dir() {
            return Err(ResourceError::TargetIsDirectory {
                path: target.to_path_buf(),
            });
        }
        remove_node(target)?;
    }

    create_symlink(source, target).map_err(|source_err| ResourceError::LinkCreationFailed {
        link: target.to_path_buf(),
        target: source.to_path_buf(),
        source: source_err,
    })
}

/// Create a symlink at `link` pointing to `target`.
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn creates_link_and_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("store").join("init.lua");
        let target = dir.path().join("home/.config/nvim/init.lua");

        ensure_symlink(&target, &source).unwrap();

        assert!(target.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn link_value_is_stored_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("link");
        let source = Path::new("relative/../not-canonical");

        ensure_symlink(&target, source).unwrap();
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn replaces_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::write(&source, "managed").unwrap();
        std::fs::write(&target, "local edits").unwrap();

        ensure_symlink(&target, &source).unwrap();

        assert_eq!(std::fs::read_link(&target).unwrap(), source);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "managed");
    }

    #[test]
    fn replaces_wrong_and_dangling_links() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::os::unix::fs::symlink("/nonexistent/elsewhere", &target).unwrap();

        ensure_symlink(&target, &source).unwrap();
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::write(&source, "x").unwrap();

        ensure_symlink(&target, &source).unwrap();
        ensure_symlink(&target, &source).unwrap();

        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn refuses_directory_and_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "precious").unwrap();

        let err = ensure_symlink(&target, &source).unwrap_err();

        assert!(matches!(err, ResourceError::TargetIsDirectory { .. }));
        assert!(target.is_dir());
        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).unwrap(),
            "precious"
        );
    }

    #[test]
    fn replaces_symlink_to_directory() {
        // lstat sees the link, not the directory behind it.
        let dir = tempfile::tempdir().unwrap();
        let real_dir = dir.path().join("real");
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::create_dir(&real_dir).unwrap();
        std::os::unix::fs::symlink(&real_dir, &target).unwrap();

        ensure_symlink(&target, &source).unwrap();

        assert_eq!(std::fs::read_link(&target).unwrap(), source);
        assert!(real_dir.is_dir());
    }
}
