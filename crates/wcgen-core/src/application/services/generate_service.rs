//! Generate Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Fetch the three template texts (all-or-nothing join)
//! 2. Apply the rewrite rules
//! 3. Write the component files
//!
//! Writes only start after every fetch has succeeded, so a failed download
//! leaves the filesystem untouched. There is deliberately no rollback: the
//! only writes are the three target files, created in one burst.

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateFetcher, TemplateUrls},
    domain::{ComponentRequest, rewrite},
    error::WcgenResult,
};

/// What one successful generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    /// The three written file names, in write order.
    pub files: Vec<String>,
    /// The custom element tag to register in markup.
    pub tag: String,
}

/// Main scaffolding service.
pub struct GenerateService {
    fetcher: Box<dyn TemplateFetcher>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(fetcher: Box<dyn TemplateFetcher>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { fetcher, filesystem }
    }

    /// Generate a component into `component_dir`.
    ///
    /// `component_dir` is the final directory for this component (the
    /// located `components` directory joined with the class name); it is
    /// created recursively if absent.
    #[instrument(skip_all, fields(component = %request.class_name()))]
    pub fn generate(
        &self,
        request: &ComponentRequest,
        urls: &TemplateUrls,
        component_dir: &Path,
    ) -> WcgenResult<GeneratedComponent> {
        info!("Fetching boilerplate templates");
        let set = self.fetcher.fetch(urls)?;

        let main = rewrite::rewrite_main(&set.main, request);
        let template = rewrite::rewrite_template(&set.template, request);
        // The stylesheet passes through unchanged.

        self.filesystem.create_dir_all(component_dir)?;
        self.filesystem
            .write_file(&component_dir.join(request.source_file()), &main)?;
        self.filesystem
            .write_file(&component_dir.join(request.style_file()), &set.css)?;
        self.filesystem
            .write_file(&component_dir.join(request.template_file()), &template)?;

        info!(dir = %component_dir.display(), "Component files written");

        Ok(GeneratedComponent {
            files: vec![
                request.source_file(),
                request.style_file(),
                request.template_file(),
            ],
            tag: request.tag(),
        })
    }
}
