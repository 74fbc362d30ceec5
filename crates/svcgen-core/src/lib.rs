//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! microservice scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │          (ServiceScaffolder)            │
//! │      Layout → Materialize → VCS         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, VCS)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, EngineRenderer, git)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (TemplateVars, manifests, validation)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use svcgen_core::application::ServiceScaffolder;
//!
//! // Adapters injected at construction; strategy chosen at process start.
//! # fn demo(filesystem: Box<dyn svcgen_core::application::ports::Filesystem>,
//! #         renderer: Box<dyn svcgen_core::application::ports::TemplateRenderer>,
//! #         vcs: Box<dyn svcgen_core::application::ports::VersionControl>)
//! #         -> svcgen_core::error::SvcgenResult<()> {
//! let scaffolder =
//!     ServiceScaffolder::new("order-service", "./out", false, filesystem, renderer, vcs)?;
//! scaffolder.generate()?;
//! # Ok(())
//! # }
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
        ServiceScaffolder,
        ports::{Filesystem, TemplateRenderer, VersionControl},
    };
    pub use crate::domain::{
        FILE_MANIFEST, ManifestEntry, SERVICE_DIRS, TemplateVars, validate_service_name,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
