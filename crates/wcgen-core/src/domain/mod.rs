//! Core domain layer for wcgen.
//!
//! This module contains pure business logic: the naming rules that derive a
//! component's identifiers from raw user input, and the ordered token-rewrite
//! rules that turn the reference boilerplate into the requested component.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Behavior lives here**: The rewrite engine is domain logic, not an
//!   adapter concern — adapters only move bytes

pub mod error;
pub mod naming;
pub mod rewrite;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use naming::ComponentRequest;
pub use rewrite::{rewrite_main, rewrite_template};

/// The three raw template texts fetched from the remote boilerplate.
///
/// Lifecycle: fetched once, transformed once, written once, then discarded.
/// The `css` text is the only member that passes through untransformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Main component source (class definition + element registration).
    pub main: String,
    /// Stylesheet, copied through unchanged.
    pub css: String,
    /// Markup fragment with `###` heading markers.
    pub template: String,
}
