//! TOML file loading and saving.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ManifestError;

/// Load and deserialize a TOML file.
///
/// A missing file yields the value deserialized from an empty document, so
/// types whose fields all carry `#[serde(default)]` load as empty.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file exists but cannot be read, and
/// [`ManifestError::Parse`] if it cannot be parsed.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Serialize `value` as pretty TOML and write it to `path`.
///
/// # Errors
///
/// Returns [`ManifestError::Serialize`] if encoding fails and
/// [`ManifestError::Io`] if the file cannot be written.
pub fn save_config<T: Serialize>(path: &Path, value: &T) -> Result<(), ManifestError> {
    let content = toml::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })
}
