//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use wcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::WcgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> WcgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> WcgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists, like the real filesystem would.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> wcgen_core::error::WcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}
