//! Typed error variants for the filesystem primitives.
//!
//! This module provides [`ResourceError`], the failure taxonomy shared by the
//! symlink manager, file copier, importer, status resolver and restore
//! operation.  Every variant names the path involved; variants that wrap an
//! I/O failure keep it as their `source`.  Callers convert to
//! [`anyhow::Error`] via `?` at the command boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from the filesystem primitives in [`crate::resources`].
#[derive(Error, Debug)]
pub enum ResourceError {
    /// `stat`/`lstat`/`readlink` failed for a reason other than "not found".
    #[error("cannot inspect {}: {source}", path.display())]
    FilesystemProbeFailed {
        /// Path that was being inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A directory occupies a path that would have to be replaced.
    #[error("target {} is a directory", path.display())]
    TargetIsDirectory {
        /// The directory path.
        path: PathBuf,
    },

    /// A non-symlink object occupies a path expected to hold a symlink.
    #[error("target {} is not a symlink", path.display())]
    NotASymlink {
        /// The offending path.
        path: PathBuf,
    },

    /// An import source is itself a symbolic link.
    #[error("source must be a regular file, got symlink: {}", path.display())]
    SourceIsSymlink {
        /// The symlink path.
        path: PathBuf,
    },

    /// An import source is a directory or another non-regular node.
    #[error("source must be a regular file: {}", path.display())]
    NotARegularFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Parent directories could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An existing filesystem object could not be removed.
    #[error("cannot remove {}: {source}", path.display())]
    RemovalFailed {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The symbolic link itself could not be created.
    #[error("cannot link {} -> {}: {source}", link.display(), target.display())]
    LinkCreationFailed {
        /// Where the link was to be created.
        link: PathBuf,
        /// What the link was to point at.
        target: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The copy source could not be opened or inspected.
    #[error("cannot read {}: {source}", path.display())]
    SourceUnreadable {
        /// The copy source.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The copy destination could not be opened or have its mode set.
    #[error("cannot write {}: {source}", path.display())]
    DestinationUnwritable {
        /// The copy destination.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Source and destination of a copy are the same file.
    #[error("{} and {} are the same file", src.display(), dst.display())]
    SameFile {
        /// The copy source.
        src: PathBuf,
        /// The copy destination.
        dst: PathBuf,
    },

    /// Transferring bytes between source and destination failed.
    #[error("copy {} to {} failed: {source}", src.display(), dst.display())]
    CopyFailed {
        /// The copy source.
        src: PathBuf,
        /// The copy destination.
        dst: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Flushing the destination to stable storage failed.
    #[error("cannot sync {}: {source}", path.display())]
    SyncFailed {
        /// The file being flushed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file needed for content comparison could not be read.
    #[error("cannot hash {}: {source}", path.display())]
    HashFailed {
        /// The file being hashed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Convenience alias for results returned by the filesystem primitives.
pub type Result<T> = std::result::Result<T, ResourceError>;
