//! Content digests for byte-equality checks.
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::io;
use std::path::Path;

/// SHA-256 digest of a file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Stream the file at `path` through SHA-256.
///
/// The raw [`io::Error`] is returned so callers can tell a missing file
/// apart from a read failure.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn file_digest(path: &Path) -> io::Result<ContentDigest> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(ContentDigest(hasher.finalize().into()))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_value() {
        // SHA-256 of the empty string.
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("empty");
        std::fs::write(&file, b"").expect("write");
        let digest = file_digest(&file).expect("file_digest");
        assert_eq!(
            digest.to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_known_content() {
        // echo -n "hello world" | sha256sum
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("hello");
        std::fs::write(&file, b"hello world").expect("write");
        let digest = file_digest(&file).expect("file_digest");
        assert_eq!(
            digest.to_string(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn identical_bytes_give_identical_digests() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::write(&a, b"export EDITOR=vim\n").unwrap();
        std::fs::write(&b, b"export EDITOR=vim\n").unwrap();
        assert_eq!(file_digest(&a).unwrap(), file_digest(&b).unwrap());

        std::fs::write(&b, b"export EDITOR=nano\n").unwrap();
        assert_ne!(file_digest(&a).unwrap(), file_digest(&b).unwrap());
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_digest(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
