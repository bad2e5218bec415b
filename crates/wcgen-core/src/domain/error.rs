//! Domain layer errors.

use thiserror::Error;

/// Business-rule violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The component name was empty after trimming.
    #[error("component name cannot be empty")]
    EmptyComponentName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyComponentName => vec![
                "Provide a component name, e.g. Header".into(),
                "Press Enter at the prompt to accept the default".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyComponentName => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Network,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_a_validation_error() {
        assert_eq!(
            DomainError::EmptyComponentName.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn empty_name_suggestions_mention_default() {
        let suggestions = DomainError::EmptyComponentName.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("default")));
    }
}
