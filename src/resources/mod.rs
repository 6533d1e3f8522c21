//! Filesystem primitives for tracked dotfiles (check + apply pattern).
//!
//! Everything here operates on the paths it is given and reports failures
//! as [`ResourceError`]; nothing in this module logs or decides on process
//! exit.
pub mod error;
pub mod fs;
pub mod hash;
pub mod helpers;
pub mod restore;
pub mod status;
pub mod store;
pub mod symlink;

use std::fmt;

use crate::config::manifest::TrackedEntry;
pub use error::{ResourceError, Result};

/// Synchronization state of a tracked entry's live target.
///
/// # Examples
///
/// ```
/// use dots::resources::SyncState;
///
/// assert_eq!(SyncState::Linked.to_string(), "linked");
/// assert_ne!(SyncState::Missing, SyncState::Conflict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    /// Nothing usable at the live target, or the stored copy has vanished.
    Missing,
    /// The live target is a symlink whose raw value is the stored path.
    Linked,
    /// The live target holds content that differs from the stored copy.
    Diverged,
    /// The live target is not a symlink, or links somewhere else.
    Conflict,
}

impl SyncState {
    /// Lower-case name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Linked => "linked",
            Self::Diverged => "diverged",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one [`TrackedEntry`] against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// The entry that was evaluated.
    pub entry: TrackedEntry,
    /// Its synchronization state.
    pub state: SyncState,
    /// Optional human-readable qualifier, e.g. `"not a symlink"`.
    pub info: Option<String>,
}

impl StatusEntry {
    /// A status without qualifier.
    #[must_use]
    pub const fn new(entry: TrackedEntry, state: SyncState) -> Self {
        Self {
            entry,
            state,
            info: None,
        }
    }

    /// A status with a qualifier.
    #[must_use]
    pub fn with_info(entry: TrackedEntry, state: SyncState, info: impl Into<String>) -> Self {
        Self {
            entry,
            state,
            info: Some(info.into()),
        }
    }
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
}

/// Minimal interface for resources that can be described, applied, and removed.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied.
    fn apply(&self) -> Result<ResourceChange>;

    /// Undo a previous [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be removed.
    fn remove(&self) -> Result<ResourceChange>;
}

/// Resources that can also determine their own current state.
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<StatusEntry>;
}

/// A tracked dotfile seen as a resource: a live target that should link to
/// its stored copy.
#[derive(Debug, Clone)]
pub struct TrackedLink {
    /// The manifest entry backing this resource.
    pub entry: TrackedEntry,
}

impl TrackedLink {
    /// Wrap a manifest entry.
    #[must_use]
    pub const fn new(entry: TrackedEntry) -> Self {
        Self { entry }
    }
}

impl Applicable for TrackedLink {
    fn description(&self) -> String {
        format!(
            "{} -> {}",
            self.entry.target.display(),
            self.entry.source.display()
        )
    }

    fn apply(&self) -> Result<ResourceChange> {
        if status::link_status(&self.entry)?.state == SyncState::Linked {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        symlink::ensure_symlink(&self.entry.target, &self.entry.source)?;
        Ok(ResourceChange::Applied)
    }

    fn remove(&self) -> Result<ResourceChange> {
        restore::untrack(&self.entry)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for TrackedLink {
    fn current_state(&self) -> Result<StatusEntry> {
        status::content_status(&self.entry)
    }
}
