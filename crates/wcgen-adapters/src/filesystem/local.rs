//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use wcgen_core::{application::ports::Filesystem, error::WcgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WcgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WcgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> wcgen_core::error::WcgenError {
    use wcgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reports_existence() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let dir = temp.path().join("components/Header");
        fs.create_dir_all(&dir).unwrap();
        let file = dir.join("Header.ts");
        fs.write_file(&file, "export class Header {}").unwrap();

        assert!(fs.exists(&dir));
        assert!(fs.exists(&file));
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "export class Header {}"
        );
    }

    #[test]
    fn write_into_missing_parent_is_an_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let file = temp.path().join("nope/Header.ts");
        assert!(fs.write_file(&file, "x").is_err());
    }
}
