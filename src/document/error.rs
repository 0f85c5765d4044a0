//! Errors from loading, decoding, encoding and saving documents.

use std::io;
use std::path::PathBuf;

/// Errors that can occur in document operations.
///
/// The colorizer never fails; every failure happens here, before any colored
/// output is produced.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// File could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File could not be created or written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid JSON, or a value JSON cannot represent.
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML, or a value YAML cannot represent.
    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// I/O failure not tied to a path (writers, gzip streams).
    #[error("I/O error")]
    Io(#[from] io::Error),
}

/// Result alias for document operations.
pub type Result<T> = core::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = DocumentError::Read {
            path: PathBuf::from("/tmp/missing.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/missing.yaml");

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DocumentError::from(json);
        assert_eq!(err.to_string(), "invalid JSON");
    }

    #[test]
    fn test_cause_only_in_source_chain() {
        let err = DocumentError::Write {
            path: PathBuf::from("/tmp/out.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.to_string().contains("denied"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
