//! The manifest of tracked dotfiles (`dots.toml`).
//!
//! The manifest is an ordered list of [`TrackedEntry`] values keyed by live
//! target.  Lookups, upserts and removals are plain linear scans; manifests
//! hold tens to low hundreds of entries.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::toml_loader;
use crate::error::ManifestError;

/// One dotfile under management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEntry {
    /// Absolute path of the authoritative copy inside the managed directory.
    pub source: PathBuf,
    /// Absolute path where the file should appear, normally as a symlink to
    /// `source`.
    pub target: PathBuf,
}

impl TrackedEntry {
    /// Create an entry from its stored path and live target.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

/// All tracked entries, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Tracked entries; targets are unique.
    #[serde(default)]
    pub files: Vec<TrackedEntry>,
}

impl Manifest {
    /// Load the manifest at `path`; a missing file is an empty manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        toml_loader::load_config(path)
    }

    /// Write the manifest to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be encoded or written.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        toml_loader::save_config(path, self)
    }

    /// Whether the manifest tracks nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find the entry whose live target is `target`.
    #[must_use]
    pub fn find(&self, target: &Path) -> Option<&TrackedEntry> {
        self.files.iter().find(|e| e.target == target)
    }

    /// Replace the entry with the same target, or append a new one.
    pub fn upsert(&mut self, entry: TrackedEntry) {
        if let Some(existing) = self.files.iter_mut().find(|e| e.target == entry.target) {
            *existing = entry;
        } else {
            self.files.push(entry);
        }
    }

    /// Remove the entry whose live target is `target`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, target: &Path) -> bool {
        let before = self.files.len();
        self.files.retain(|e| e.target != target);
        self.files.len() != before
    }

    /// Entries sorted by live target.
    #[must_use]
    pub fn sorted_by_target(&self) -> Vec<&TrackedEntry> {
        let mut entries: Vec<&TrackedEntry> = self.files.iter().collect();
        entries.sort_by(|a, b| a.target.cmp(&b.target));
        entries
    }
}
