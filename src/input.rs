// src/input.rs
// =============================================================================
// Loads the markdown document from disk.
//
// The whole file is read up front as UTF-8. A missing file and an unreadable
// one (permissions, invalid UTF-8, a directory) are reported separately.
//
// Rust concepts:
// - Match guards: `Err(e) if ...` to pick out one error kind
// =============================================================================

use crate::error::InputError;
use std::io;
use std::path::Path;

pub async fn load_document(path: &Path) -> Result<String, InputError> {
    // read_to_string fails with InvalidData if the file isn't UTF-8
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(InputError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# Title\n[Rust](https://www.rust-lang.org)\n").unwrap();

        let content = load_document(file.path()).await.unwrap();
        assert!(content.contains("[Rust](https://www.rust-lang.org)"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");

        let err = load_document(&path).await.unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load_document(file.path()).await.unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_directory_is_unreadable() {
        let tmp = TempDir::new().unwrap();

        let err = load_document(tmp.path()).await.unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }
}
