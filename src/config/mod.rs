//! Locations of the managed directory and its manifest.
pub mod manifest;
pub mod toml_loader;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::CommandError;

/// Name of the managed directory under the home directory.
pub const DIR_NAME: &str = ".dots";

/// Name of the manifest file inside the managed directory.
pub const MANIFEST_NAME: &str = "dots.toml";

/// Resolve the home directory.
///
/// An explicit override wins, then `$HOME`, then `$USERPROFILE`.
///
/// # Errors
///
/// Returns [`CommandError::HomeNotFound`] if none of them is set.
pub fn resolve_home(home_override: Option<&Path>) -> Result<PathBuf, CommandError> {
    resolve_home_from(
        home_override,
        std::env::var_os("HOME"),
        std::env::var_os("USERPROFILE"),
    )
}

fn resolve_home_from(
    home_override: Option<&Path>,
    home: Option<OsString>,
    user_profile: Option<OsString>,
) -> Result<PathBuf, CommandError> {
    if let Some(path) = home_override {
        return Ok(path.to_path_buf());
    }
    home.filter(|v| !v.is_empty())
        .or_else(|| user_profile.filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .ok_or(CommandError::HomeNotFound)
}

/// The managed directory, `<home>/.dots`.
#[must_use]
pub fn dots_dir(home: &Path) -> PathBuf {
    home.join(DIR_NAME)
}

/// The manifest path, `<home>/.dots/dots.toml`.
#[must_use]
pub fn manifest_path(home: &Path) -> PathBuf {
    dots_dir(home).join(MANIFEST_NAME)
}

/// Create the managed directory if needed and return its path.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created.
pub fn ensure_dots_dir(home: &Path) -> std::io::Result<PathBuf> {
    let dir = dots_dir(home);
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(&dir)?;
    Ok(dir)
}

/// Render `path` for display, abbreviating the home directory to `~`.
///
/// Paths outside `home` are returned unchanged.
#[must_use]
pub fn display_path(home: &Path, path: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rel) if rel.as_os_str().is_empty() => "~".to_string(),
        Ok(rel) => format!("~/{}", rel.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Make a command-line path argument absolute without following symlinks.
///
/// # Errors
///
/// Returns an I/O error if the current directory cannot be determined.
pub fn resolve_path(arg: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(arg)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_environment() {
        let home = resolve_home_from(
            Some(Path::new("/tmp/alt")),
            Some(OsString::from("/home/u")),
            None,
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("/tmp/alt"));
    }

    #[test]
    fn home_env_before_user_profile() {
        let home = resolve_home_from(
            None,
            Some(OsString::from("/home/u")),
            Some(OsString::from("C:\\Users\\u")),
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("/home/u"));
    }

    #[test]
    fn falls_back_to_user_profile() {
        let home = resolve_home_from(
            None,
            Some(OsString::new()),
            Some(OsString::from("C:\\Users\\u")),
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("C:\\Users\\u"));
    }

    #[test]
    fn no_home_is_an_error() {
        assert!(matches!(
            resolve_home_from(None, None, None),
            Err(CommandError::HomeNotFound)
        ));
    }

    #[test]
    fn managed_paths() {
        let home = Path::new("/home/u");
        assert_eq!(dots_dir(home), PathBuf::from("/home/u/.dots"));
        assert_eq!(manifest_path(home), PathBuf::from("/home/u/.dots/dots.toml"));
    }

    #[test]
    fn ensure_dots_dir_is_idempotent() {
        let home = tempfile::tempdir().unwrap();
        let first = ensure_dots_dir(home.path()).unwrap();
        let second = ensure_dots_dir(home.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn display_path_abbreviates_home() {
        let home = Path::new("/home/u");
        assert_eq!(
            display_path(home, Path::new("/home/u/.config/nvim/init.lua")),
            "~/.config/nvim/init.lua"
        );
        assert_eq!(display_path(home, home), "~");
    }

    #[test]
    fn display_path_outside_home_is_unchanged() {
        let home = Path::new("/home/u");
        assert_eq!(display_path(home, Path::new("/etc/hosts")), "/etc/hosts");
        assert_eq!(
            display_path(home, Path::new("/home/user2/.bashrc")),
            "/home/user2/.bashrc"
        );
    }

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        assert_eq!(
            resolve_path(Path::new("/home/u/.bashrc")).unwrap(),
            PathBuf::from("/home/u/.bashrc")
        );
    }

    #[test]
    fn resolve_path_anchors_relative_paths() {
        let resolved = resolve_path(Path::new(".bashrc")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(".bashrc"));
    }
}
