//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod git;
pub mod renderer;
pub mod template_dir;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::GitVersionControl;
#[cfg(feature = "engine")]
pub use renderer::EngineRenderer;
pub use renderer::{FallbackRenderer, select_renderer};
