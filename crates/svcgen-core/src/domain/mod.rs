//! Core domain layer for svcgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and subprocess concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: generation is synchronous, program order is the ordering
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: std library + thiserror + serde derives
//! - **Immutable values**: variables and manifests never change mid-run

pub mod error;
pub mod manifest;
pub mod readme;
pub mod validation;
pub mod vars;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use manifest::{FILE_MANIFEST, ManifestEntry, SERVICE_DIRS};
pub use readme::readme_body;
pub use validation::validate_service_name;
pub use vars::TemplateVars;
