//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wcgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::TemplateSet;
use crate::error::WcgenResult;

/// Resource name of the reference main source.
pub const MAIN_RESOURCE: &str = "ComponentName.ts";
/// Resource name of the reference stylesheet.
pub const STYLE_RESOURCE: &str = "componentName.css";
/// Resource name of the reference template fragment.
pub const TEMPLATE_RESOURCE: &str = "_componentNameTemplate.ts";

/// The three resolved template URLs.
///
/// Built once at startup from the configured base URL — a read-only value
/// passed down by reference, never a mutable global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUrls {
    pub main: String,
    pub css: String,
    pub template: String,
}

impl TemplateUrls {
    /// Join the three reference resource names onto `base`.
    ///
    /// A trailing slash on `base` is tolerated.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            main: format!("{base}/{MAIN_RESOURCE}"),
            css: format!("{base}/{STYLE_RESOURCE}"),
            template: format!("{base}/{TEMPLATE_RESOURCE}"),
        }
    }
}

/// Port for downloading the template set.
///
/// Implemented by:
/// - `wcgen_adapters::fetcher::HttpTemplateFetcher` (production)
/// - `wcgen_adapters::fetcher::InMemoryFetcher` (testing)
///
/// Contract: all three resources are fetched before returning — partial
/// success is indistinguishable from total failure, and a failure names
/// every resource that could not be retrieved.
pub trait TemplateFetcher: Send + Sync {
    /// Fetch all three template texts.
    fn fetch(&self, urls: &TemplateUrls) -> WcgenResult<TemplateSet>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `wcgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WcgenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> WcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for locating `components` directories in a working tree.
///
/// Implemented by:
/// - `wcgen_adapters::scanner::WalkdirScanner` (production)
pub trait ComponentScanner: Send + Sync {
    /// Return the relative paths of every directory literally named
    /// `components` under `root`, in traversal order, excluding
    /// dependency-cache subtrees.
    fn find_component_dirs(&self, root: &Path) -> WcgenResult<Vec<PathBuf>>;
}
