//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use svcgen_core::{application::ports::Filesystem, error::SvcgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> svcgen_core::error::SvcgenError {
    use svcgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("out.txt");

        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn write_into_missing_parent_is_an_error() {
        let tmp = tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing/out.txt");

        assert!(fs.write_file(&file, "content").is_err());
    }
}
