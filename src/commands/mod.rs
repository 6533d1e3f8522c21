//! Subcommand workflows and the setup they share.
pub mod add;
pub mod apply;
pub mod completions;
pub mod diff;
pub mod init;
pub mod list;
pub mod remove;
pub mod status;
pub mod version;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::config::{self, manifest::Manifest};
use crate::error::{CommandError, DotsError};
use crate::logging::Logger;

/// Paths shared by every command.
///
/// Encapsulates home resolution and the managed-directory layout so that
/// each command does not have to repeat it.
#[derive(Debug, Clone)]
pub struct CommandSetup {
    /// Resolved home directory.
    pub home: PathBuf,
    /// The managed directory, `<home>/.dots`.
    pub dots_dir: PathBuf,
    /// The manifest file inside [`dots_dir`](Self::dots_dir).
    pub manifest_path: PathBuf,
}

impl CommandSetup {
    /// Resolve the home directory and derive the managed paths from it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::HomeNotFound`] if no home directory is known.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let home = config::resolve_home(global.home.as_deref())?;
        let setup = Self::for_home(&home);
        log.debug(&format!("home: {}", setup.home.display()));
        log.debug(&format!("manifest: {}", setup.manifest_path.display()));
        Ok(setup)
    }

    /// Managed paths for an explicit home directory.
    #[must_use]
    pub fn for_home(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            dots_dir: config::dots_dir(home),
            manifest_path: config::manifest_path(home),
        }
    }

    /// Fail unless `dots init` has written a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotInitialized`] if the manifest file is absent.
    pub fn ensure_manifest_exists(&self) -> Result<(), CommandError> {
        if self.manifest_path.is_file() {
            Ok(())
        } else {
            Err(CommandError::NotInitialized)
        }
    }

    /// Load the manifest; a missing manifest is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists but cannot be read or parsed.
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.manifest_path).map_err(|e| DotsError::from(e).into())
    }

    /// Write the manifest back.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be encoded or written.
    pub fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        manifest
            .save(&self.manifest_path)
            .map_err(|e| DotsError::from(e).into())
    }

    /// `path` abbreviated relative to home for display.
    #[must_use]
    pub fn display(&self, path: &Path) -> String {
        config::display_path(&self.home, path)
    }
}

/// Resolve a command-line file argument to the absolute live target.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_target(arg: &Path) -> Result<PathBuf> {
    Ok(config::resolve_path(arg)?)
}
