//! Raw file reading and writing.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::error::{DocumentError, Result};

/// Permission bits for plain text files.
pub const TEXT_MODE: u32 = 0o644;
/// Permission bits for serialized documents, which may hold secrets.
pub const DOCUMENT_MODE: u32 = 0o600;

/// Read a file into memory.
pub fn load_text(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `bytes` to a file, replacing any previous content.
pub fn save_text(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    write_file(path.as_ref(), bytes, TEXT_MODE)
}

/// Create (or truncate) `path` with the given Unix permission bits.
///
/// The mode only applies when the file is newly created, and is ignored on
/// other platforms.
pub(crate) fn create_file(path: &Path, mode: u32) -> Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    opts.open(path).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, bytes: &[u8], mode: u32) -> Result<()> {
    log::debug!("writing {} bytes to {}", bytes.len(), path.display());
    let mut file = create_file(path, mode)?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        save_text(&path, b"hello\nworld\n").unwrap();
        assert_eq!(load_text(&path).unwrap(), b"hello\nworld\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match load_text(&path) {
            Err(DocumentError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_document_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.json");
        write_file(&path, b"{}", DOCUMENT_MODE).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        // umask can only clear bits
        assert_eq!(mode & 0o077, 0);
    }
}
