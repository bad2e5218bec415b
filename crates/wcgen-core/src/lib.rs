//! Wcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `wcgen`
//! web-component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           wcgen-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (GenerateService)             │
//! │      Orchestrates the Use Case          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Fetcher, Filesystem, Scanner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wcgen-adapters (Infrastructure)      │
//! │ (HttpTemplateFetcher, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ComponentRequest, rewrite rules)      │
//! │        No I/O Dependencies              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wcgen_core::{
//!     application::{GenerateService, ports::TemplateUrls},
//!     domain::ComponentRequest,
//! };
//!
//! // 1. Describe the component to generate
//! let request = ComponentRequest::new("header", "wc-").unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(fetcher, filesystem);
//! let urls = TemplateUrls::from_base("https://example.invalid/ComponentName");
//! service.generate(&request, &urls, "./src/components/Header".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GeneratedComponent,
        ports::{ComponentScanner, Filesystem, TemplateFetcher, TemplateUrls},
    };
    pub use crate::domain::{ComponentRequest, TemplateSet};
    pub use crate::error::{WcgenError, WcgenResult};
}
