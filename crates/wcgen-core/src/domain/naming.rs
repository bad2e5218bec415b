//! Component naming rules.
//!
//! # Design
//!
//! [`ComponentRequest`] is a value object: all identifier variants are derived
//! once at construction, so downstream code never re-derives casing and the
//! derivations cannot drift apart.
//!
//! Derived variants for a raw name of `"navBar"` with prefix `"x"`:
//!
//! | variant        | value         | used for                         |
//! |----------------|---------------|----------------------------------|
//! | `class_name`   | `NavBar`      | class identifier, directory name |
//! | `file_stem`    | `navbar`      | stylesheet / template file names |
//! | `shout_name`   | `NAVBAR`      | template heading markers         |
//! | `prefix`       | `x-`          | custom element tag prefix        |
//! | `tag`          | `x-navbar`    | custom element tag               |

use crate::domain::error::DomainError;
use std::fmt;

/// Tag prefix applied when the caller supplies none.
pub const DEFAULT_TAG_PREFIX: &str = "wc-";

/// A validated request to generate one component.
///
/// Invariants, enforced at construction:
/// - the raw name is non-empty after trimming;
/// - `prefix` always ends with `-`;
/// - `class_name` is the capitalize-first form of the raw name (only the
///   first character changes — `"navBar"` becomes `"NavBar"`, not `"Navbar"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    class_name: String,
    file_stem: String,
    shout_name: String,
    prefix: String,
}

impl ComponentRequest {
    /// Build a request from raw user input.
    ///
    /// The prefix is normalized: trimmed, defaulted to
    /// [`DEFAULT_TAG_PREFIX`] when empty, and given a trailing `-` when the
    /// input lacks one (`"x"` → `"x-"`).
    pub fn new(raw_name: &str, raw_prefix: &str) -> Result<Self, DomainError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyComponentName);
        }

        let mut prefix = raw_prefix.trim().to_string();
        if prefix.is_empty() {
            prefix = DEFAULT_TAG_PREFIX.to_string();
        }
        if !prefix.ends_with('-') {
            prefix.push('-');
        }

        Ok(Self {
            class_name: capitalize_first(name),
            file_stem: name.to_lowercase(),
            shout_name: name.to_uppercase(),
            prefix,
        })
    }

    /// Capitalize-first form, e.g. `Header`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Lowercase form used for file names, e.g. `header`.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Uppercase form used for template heading markers, e.g. `HEADER`.
    pub fn shout_name(&self) -> &str {
        &self.shout_name
    }

    /// Normalized tag prefix, always `-`-terminated.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The custom element tag, e.g. `wc-header`.
    pub fn tag(&self) -> String {
        format!("{}{}", self.prefix, self.file_stem)
    }

    // ── Output file names ─────────────────────────────────────────────────

    /// `Header.ts`
    pub fn source_file(&self) -> String {
        format!("{}.ts", self.class_name)
    }

    /// `header.css`
    pub fn style_file(&self) -> String {
        format!("{}.css", self.file_stem)
    }

    /// `headerTemplate.ts`
    pub fn template_file(&self) -> String {
        format!("{}Template.ts", self.file_stem)
    }
}

impl fmt::Display for ComponentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.class_name, self.tag())
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
