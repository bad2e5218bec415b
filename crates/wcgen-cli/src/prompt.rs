//! Interactive prompts.
//!
//! Thin wrappers over `dialoguer` plus the pure selection-resolution rule so
//! the fallback behavior stays unit-testable without a terminal.

use dialoguer::{Confirm, Input};

use crate::error::CliResult;

/// Ask a free-text question with a default.
///
/// The default is shown alongside the question; the answer is trimmed and
/// an empty answer yields the default.  No further validation — callers
/// interpret the returned value.
pub fn ask(question: &str, default: &str) -> CliResult<String> {
    let answer: String = Input::new()
        .with_prompt(question)
        .default(default.to_string())
        .show_default(!default.is_empty())
        .allow_empty(true)
        .interact_text()?;

    let trimmed = answer.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

/// Ask whether an existing component may be overwritten.  Defaults to "no";
/// the affirmative is matched case-insensitively by dialoguer.
pub fn confirm_overwrite() -> CliResult<bool> {
    Ok(Confirm::new()
        .with_prompt("Overwrite the existing component?")
        .default(false)
        .interact()?)
}

/// Resolve a free-text directory-selection answer against `count` candidates.
///
/// Anything that does not parse to an index in `[0, count)` falls back to
/// index 0, so a stray answer never aborts the run.
pub fn resolve_selection(input: &str, count: usize) -> usize {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < count)
        .unwrap_or(0)
}

// ── tests ─────────────────────────────────────────────────────────────────────
