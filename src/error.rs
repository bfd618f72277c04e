// src/error.rs
// =============================================================================
// Errors that stop the run before any link is checked.
//
// Per-link failures are never errors: the checker turns them into a
// `VerificationOutcome` and the run moves on. Only a bad input file is fatal.
//
// Rust concepts:
// - thiserror: Derives Display and Error from the #[error] attributes
// - #[source]: Keeps the underlying io::Error reachable through source()
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The markdown file does not exist
    #[error("Path '{}' does not exist.", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text
    #[error("could not read '{}'", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = InputError::NotFound {
            path: PathBuf::from("missing.md"),
        };
        assert_eq!(err.to_string(), "Path 'missing.md' does not exist.");
    }

    #[test]
    fn test_unreadable_keeps_source() {
        let err = InputError::Unreadable {
            path: PathBuf::from("notes.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "could not read 'notes.md'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
