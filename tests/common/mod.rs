// Shared helpers for integration tests.
//
// Provides a temporary home directory and a fluent builder so each
// integration test can set up an isolated dots installation without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dots::commands::CommandSetup;
use dots::commands::init::initialize;
use dots::config::manifest::{Manifest, TrackedEntry};
use dots::logging::Logger;

/// An isolated home directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestHome {
    /// Temporary directory standing in for `$HOME`.
    pub root: tempfile::TempDir,
    /// Managed paths derived from `root`.
    pub setup: CommandSetup,
}

impl TestHome {
    /// Create an empty home without running `dots init`.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let setup = CommandSetup::for_home(root.path());
        Self { root, setup }
    }

    /// Path to the home directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `rel` under the home directory.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Absolute path of `name` inside `~/.dots`.
    pub fn stored(&self, name: &str) -> PathBuf {
        self.setup.dots_dir.join(name)
    }

    /// Load the manifest from disk.
    pub fn manifest(&self) -> Manifest {
        self.setup.load_manifest().expect("load manifest")
    }

    /// The manifest entry tracking `rel`, built without touching disk.
    pub fn entry(&self, rel: &str, stored: &str) -> TrackedEntry {
        TrackedEntry::new(self.stored(stored), self.join(rel))
    }
}

/// Fluent builder for [`TestHome`].
pub struct TestHomeBuilder {
    home: TestHome,
}

impl TestHomeBuilder {
    /// Begin building a new, uninitialized home.
    pub fn new() -> Self {
        Self {
            home: TestHome::new(),
        }
    }

    /// Run `dots init` without creating a git repository.
    pub fn initialized(self) -> Self {
        initialize(&self.home.setup, false, &Logger::default()).expect("init dots");
        self
    }

    /// Write `content` to `rel` under the home directory, creating parents.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.home.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write home file");
        self
    }

    /// Write `content` to `name` inside `~/.dots`.
    pub fn with_stored(self, name: &str, content: &str) -> Self {
        std::fs::create_dir_all(&self.home.setup.dots_dir).expect("create dots dir");
        std::fs::write(self.home.stored(name), content).expect("write stored file");
        self
    }

    /// Symlink `rel` under the home directory to `value`, verbatim.
    #[cfg(unix)]
    pub fn with_link(self, rel: &str, value: &Path) -> Self {
        let path = self.home.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::os::unix::fs::symlink(value, &path).expect("create symlink");
        self
    }

    /// Finish building and return the configured home.
    pub fn build(self) -> TestHome {
        self.home
    }
}

impl From<TestHome> for TestHomeBuilder {
    /// Continue customising an already-built home.
    fn from(home: TestHome) -> Self {
        Self { home }
    }
}
