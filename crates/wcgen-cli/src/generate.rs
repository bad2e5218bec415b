//! The generate flow — the single thing wcgen does.
//!
//! Responsibility: wire CLI input, prompts, and adapters together and call
//! the core `GenerateService`.  No substitution logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use wcgen_adapters::{HttpTemplateFetcher, LocalFilesystem, WalkdirScanner};
use wcgen_core::{
    application::{ApplicationError, GenerateService, ports::ComponentScanner},
    domain::ComponentRequest,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the generate flow.
///
/// Sequence:
/// 1. Locate the `components` directories and select one
/// 2. Resolve name and prefix (flags, else prompts with config defaults)
/// 3. Overwrite gate when the component already exists
/// 4. Fetch, rewrite, and write via the core service
/// 5. Print the tag-usage hint
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("Scaffolding a new web component")?;

    // 1. Locate
    let scanner = WalkdirScanner::new();
    let root = Path::new(".");
    let dirs = scanner.find_component_dirs(root).map_err(CliError::Core)?;
    if dirs.is_empty() {
        return Err(CliError::Core(
            ApplicationError::NoComponentsDirectory {
                root: root.to_path_buf(),
            }
            .into(),
        ));
    }
    let target_dir = choose_directory(&dirs, cli.dir_index, &output)?;

    // 2. Inputs
    let raw_name = match cli.name {
        Some(name) => name,
        None => prompt::ask("Component name?", &config.defaults.name)?,
    };
    let raw_prefix = match cli.prefix {
        Some(prefix) => prefix,
        None => prompt::ask("Tag prefix?", &config.defaults.prefix)?,
    };
    let request =
        ComponentRequest::new(&raw_name, &raw_prefix).map_err(|e| CliError::Core(e.into()))?;

    debug!(
        class = request.class_name(),
        tag = %request.tag(),
        dir = %target_dir.display(),
        "Request resolved"
    );

    // 3. Overwrite gate
    let component_dir = target_dir.join(request.class_name());
    if component_dir.exists() && !cli.yes {
        output.warning(&format!(
            "Component {} already exists at {}",
            request.class_name(),
            component_dir.display()
        ))?;
        if !prompt::confirm_overwrite()? {
            output.print("Keeping the existing component; nothing was written.")?;
            return Ok(());
        }
    }

    // 4. Fetch + rewrite + write
    output.info("Downloading boilerplate templates...")?;
    let fetcher = Box::new(HttpTemplateFetcher::new().map_err(CliError::Core)?);
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GenerateService::new(fetcher, filesystem);

    info!(component = request.class_name(), "Generate started");
    let generated = service
        .generate(&request, &config.template_urls(), &component_dir)
        .map_err(CliError::Core)?;
    info!(component = request.class_name(), "Generate completed");

    // 5. Success + tag hint
    output.success(&format!(
        "Component {} created in {}",
        request.class_name(),
        component_dir.display()
    ))?;
    for file in &generated.files {
        output.print(&format!("  {file}"))?;
    }
    output.print("")?;
    output.print(&format!(
        "Add the tag to your HTML: <{tag}></{tag}>",
        tag = generated.tag
    ))?;

    Ok(())
}

// ── Directory selection ───────────────────────────────────────────────────────

/// Select one of the discovered `components` directories.
///
/// A single candidate is used without prompting.  With several candidates
/// the `--dir-index` flag answers the selection; otherwise the list is
/// printed and an index is read (default 0).  Out-of-range answers fall
/// back to the first directory.
fn choose_directory<'a>(
    dirs: &'a [PathBuf],
    flag: Option<usize>,
    output: &OutputManager,
) -> CliResult<&'a Path> {
    if dirs.len() == 1 {
        output.info(&format!("Components directory: {}", dirs[0].display()))?;
        return Ok(&dirs[0]);
    }

    let index = match flag {
        Some(index) => clamp_index(index, dirs.len()),
        None => {
            output.warning("Multiple 'components' directories found:")?;
            for (i, path) in dirs.iter().enumerate() {
                output.print(&format!("  [{i}] {}", path.display()))?;
            }
            let answer = prompt::ask("Which index should be used?", "0")?;
            prompt::resolve_selection(&answer, dirs.len())
        }
    };

    let chosen = dirs
        .get(index)
        .map(PathBuf::as_path)
        .ok_or(CliError::NoUsableDirectory)?;
    output.info(&format!("Components directory: {}", chosen.display()))?;
    Ok(chosen)
}

/// Clamp a flag-supplied index the same way prompt answers are clamped.
fn clamp_index(index: usize, count: usize) -> usize {
    if index < count { index } else { 0 }
}

// ── tests ─────────────────────────────────────────────────────────────────────
