//! Error handling for the wcgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::{error::Error, io};

use owo_colors::OwoColorize;
use thiserror::Error;

use wcgen_core::error::{ErrorCategory as CoreCategory, WcgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the core crates.
    #[error("{0}")]
    Core(#[from] WcgenError),

    /// Several `components` directories were discovered but none could be
    /// selected, even with the fall-back to the first one.
    #[error("no usable components directory could be selected")]
    NoUsableDirectory,

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An interactive prompt failed (terminal gone, input closed).
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),

            Self::NoUsableDirectory => vec![
                "Re-run and pick an index from the printed list".into(),
                "Or pass --dir-index explicitly".into(),
            ],

            Self::Config { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "The default config location is {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Pass --config to use a different file".into(),
            ],

            Self::Prompt(_) => vec![
                "Run wcgen from an interactive terminal".into(),
                "Or provide the inputs as flags: --name, --prefix, --dir-index".into(),
            ],

            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every fatal error exits 1: there is a single user-visible failure
    /// mode per run, and the declined-overwrite path (exit 0) never reaches
    /// this type.  Argument-parse failures exit 2 before an error of this
    /// type can exist.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "✗".red().bold(),
            self.to_string().red()
        ));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing, at a severity matching its nature.
    pub fn log(&self) {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::NotFound => {
                    tracing::warn!("{core}");
                }
                CoreCategory::Network | CoreCategory::Internal => {
                    tracing::error!("{core}");
                }
            },
            Self::NoUsableDirectory => tracing::warn!("{self}"),
            Self::Config { .. } => tracing::error!("{self}"),
            Self::Prompt(_) | Self::Io { .. } => tracing::error!("{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
