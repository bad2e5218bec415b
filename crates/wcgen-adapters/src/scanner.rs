//! Walkdir-based component-directory scanner.
//!
//! Finds every directory literally named `components` under the search root,
//! pruning dependency caches so a front-end project's `node_modules` tree
//! (which ships its own `components` folders by the dozen) never pollutes
//! the candidate list.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use wcgen_core::{
    application::{ApplicationError, ports::ComponentScanner},
    error::WcgenResult,
};

/// Directory name the scanner looks for.
const COMPONENTS_DIR: &str = "components";

/// Subtrees never descended into.
const PRUNED_DIRS: &[&str] = &["node_modules"];

/// Production scanner walking the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirScanner;

impl WalkdirScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }
}

impl ComponentScanner for WalkdirScanner {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn find_component_dirs(&self, root: &Path) -> WcgenResult<Vec<PathBuf>> {
        let mut found = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry));

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
                reason: format!("directory walk error: {e}"),
            })?;

            if entry.file_type().is_dir() && entry.file_name() == OsStr::new(COMPONENTS_DIR) {
                // Report paths relative to the search root, as discovered.
                let rel = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or(entry.path())
                    .to_path_buf();
                debug!(path = %rel.display(), "found components directory");
                found.push(rel);
            }
        }

        Ok(found)
    }
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && PRUNED_DIRS
            .iter()
            .any(|pruned| entry.file_name() == OsStr::new(pruned))
}

// ── tests ─────────────────────────────────────────────────────────────────────
