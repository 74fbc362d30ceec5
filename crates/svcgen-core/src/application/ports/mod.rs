//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides the implementations.

use crate::domain::TemplateVars;
use crate::error::SvcgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Directory creation is idempotent and creates parents as needed
/// - File writes fully overwrite: no merge, no prompt-before-overwrite
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `svcgen_adapters::renderer::EngineRenderer` (expression-capable engine)
/// - `svcgen_adapters::renderer::FallbackRenderer` (literal substitution)
///
/// The strategy is chosen once at process start and injected; nothing in the
/// application layer knows which one it got.
pub trait TemplateRenderer: Send + Sync {
    /// Render the named template with the given variables.
    ///
    /// Fails with a template-not-found error when the template file does not
    /// exist; engine-internal rendering failures propagate unmodified.
    fn render(&self, template: &str, vars: &TemplateVars) -> SvcgenResult<String>;
}

/// Port for version-control initialization.
///
/// Implemented by:
/// - `svcgen_adapters::git::GitVersionControl` (shells out to `git`)
///
/// Failures behind this port are never fatal to a generation run; the
/// scaffolder downgrades them to warnings.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Probe whether the version-control executable is usable at all.
    fn is_available(&self) -> bool;

    /// Initialize a repository at `repo_root`, stage everything, and create
    /// one commit with the given message.
    fn initialize(&self, repo_root: &Path, message: &str) -> SvcgenResult<()>;
}
