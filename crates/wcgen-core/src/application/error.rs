//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No `components` directory exists under the search root.
    #[error("no 'components' directory found under {root}")]
    NoComponentsDirectory { root: PathBuf },

    /// One or more template downloads failed. The generate use case joins
    /// all three fetches before acting, so this is always the combined
    /// verdict — `reasons` names every resource that failed.
    #[error("template download failed: {}", .reasons.join("; "))]
    FetchFailed { reasons: Vec<String> },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoComponentsDirectory { root } => vec![
                format!("No 'components' folder was found under {}", root.display()),
                "Create one where your components live, e.g. src/components".into(),
                "Run wcgen from inside your front-end project".into(),
            ],
            Self::FetchFailed { reasons } => {
                let mut suggestions = vec!["The boilerplate could not be downloaded:".to_string()];
                for reason in reasons {
                    suggestions.push(format!("  • {reason}"));
                }
                suggestions.push("Check your network connection".into());
                suggestions.push("Check the configured template base URL".into());
                suggestions
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoComponentsDirectory { .. } => ErrorCategory::NotFound,
            Self::FetchFailed { .. } => ErrorCategory::Network,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
