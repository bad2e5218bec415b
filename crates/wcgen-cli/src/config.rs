//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`TemplateUrls`] value derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location when present)
//! 3. Built-in defaults (always present)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use wcgen_core::application::ports::TemplateUrls;

use crate::error::{CliError, CliResult};

/// Where the reference boilerplate lives when no config overrides it.
const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/cosecruz/webcomponent-boilerplate/refs/heads/master/src/components/ComponentName";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for the interactive prompts.
    pub defaults: Defaults,
    /// Template source settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Base URL the three reference resources are fetched under.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            templates: TemplateConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            name: "Header".into(),
            prefix: "wc-".into(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With an explicit `--config` path the file must exist and parse; a
    /// missing file at the *default* location just means defaults apply.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, explicit) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config {
                    message: format!("config file not found: {}", path.display()),
                    source: None,
                });
            }
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|e| CliError::Config {
            message: format!("failed to read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::Config {
            message: format!("failed to parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wcgen", "wcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wcgen.toml"))
    }

    /// The resolved, read-only template URLs for this run.
    pub fn template_urls(&self) -> TemplateUrls {
        TemplateUrls::from_base(&self.templates.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_is_header() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.name, "Header");
        assert_eq!(cfg.defaults.prefix, "wc-");
    }

    #[test]
    fn default_urls_point_at_the_reference_component() {
        let urls = AppConfig::default().template_urls();
        assert!(urls.main.ends_with("/ComponentName.ts"));
        assert!(urls.css.ends_with("/componentName.css"));
        assert!(urls.template.ends_with("/_componentNameTemplate.ts"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
[templates]
base_url = "http://localhost:8080/boilerplate"
"#,
        )
        .unwrap();
        assert_eq!(cfg.templates.base_url, "http://localhost:8080/boilerplate");
        assert_eq!(cfg.defaults.name, "Header");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn prompt_defaults_are_overridable() {
        let cfg: AppConfig = toml::from_str(
            r#"
[defaults]
name = "Widget"
prefix = "x-"
"#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.name, "Widget");
        assert_eq!(cfg.defaults.prefix, "x-");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = PathBuf::from("/absolutely/does/not/exist.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
