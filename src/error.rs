//! Domain-specific error types for dots.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotsError
//! ├── Resource(ResourceError): symlinks, copies, hashing, status probes
//! ├── Manifest(ManifestError): dots.toml read / parse / write
//! └── Command(CommandError): workflow preconditions and external tools
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub use crate::resources::error::ResourceError;

/// Top-level error type for dots.
#[derive(Error, Debug)]
pub enum DotsError {
    /// Filesystem primitive failure.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Manifest store failure.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Command workflow failure.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors that arise from loading and saving the manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read or written.
    #[error("IO error on manifest {path}: {source}")]
    Io {
        /// Path to the manifest file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest file is not valid TOML or has the wrong shape.
    #[error("Invalid manifest {path}: {source}")]
    Parse {
        /// Path to the manifest file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The manifest could not be encoded.
    #[error("Cannot encode manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised by command workflows around the core primitives.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Neither `--home`, `$HOME` nor `$USERPROFILE` is available.
    #[error("cannot determine home directory (set HOME or pass --home)")]
    HomeNotFound,

    /// The managed directory has no manifest yet.
    #[error("manifest not found, run 'dots init' first")]
    NotInitialized,

    /// The given path is not in the manifest.
    #[error("file not tracked: {}", .0.display())]
    NotTracked(PathBuf),

    /// Importing the file would store it on top of the manifest.
    #[error("cannot track {}: its stored copy would replace the manifest", .0.display())]
    ReservedName(PathBuf),

    /// The external `diff` utility is not on `PATH`.
    #[error("'diff' not found on PATH")]
    DiffUnavailable,

    /// The external `diff` utility failed (exit status other than 0 or 1).
    #[error("diff failed (exit {code}): {stderr}")]
    DiffFailed {
        /// Exit code, `-1` when terminated by a signal.
        code: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// Initializing the git repository in the managed directory failed.
    #[error("init git repo in {}: {source}", path.display())]
    GitInit {
        /// The managed directory.
        path: PathBuf,
        /// Underlying libgit2 error.
        source: git2::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn not_initialized_display() {
        assert_eq!(
            CommandError::NotInitialized.to_string(),
            "manifest not found, run 'dots init' first"
        );
    }

    #[test]
    fn not_tracked_display() {
        let e = CommandError::NotTracked(PathBuf::from("/home/u/.bashrc"));
        assert_eq!(e.to_string(), "file not tracked: /home/u/.bashrc");
    }

    #[test]
    fn reserved_name_display() {
        let e = CommandError::ReservedName(PathBuf::from("/srv/app/dots.toml"));
        assert_eq!(
            e.to_string(),
            "cannot track /srv/app/dots.toml: its stored copy would replace the manifest"
        );
    }

    #[test]
    fn manifest_io_display() {
        let e = ManifestError::Io {
            path: "/home/u/.dots/dots.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/home/u/.dots/dots.toml"));
    }

    #[test]
    fn dots_error_from_resource_error_is_transparent() {
        let e: DotsError = ResourceError::TargetIsDirectory {
            path: PathBuf::from("/home/u/.config"),
        }
        .into();
        assert_eq!(e.to_string(), "target /home/u/.config is a directory");
    }

    #[test]
    fn dots_error_from_manifest_error() {
        let e: DotsError = ManifestError::Io {
            path: "dots.toml".to_string(),
            source: std::io::Error::other("boom"),
        }
        .into();
        assert!(e.to_string().contains("Manifest error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<DotsError>();
        assert_send_sync::<ManifestError>();
        assert_send_sync::<CommandError>();
    }

    #[test]
    fn command_error_converts_to_anyhow() {
        let e = CommandError::DiffUnavailable;
        let _anyhow_err: anyhow::Error = e.into();
    }
}
