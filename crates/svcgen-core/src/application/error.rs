//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A manifest entry references a template that does not exist.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template rendering failed (malformed template content).
    #[error("Template rendering failed for '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A version-control command failed or could not be spawned.
    ///
    /// Never fatal: the scaffolder contains this within its final phase.
    #[error("Version control failed: {reason}")]
    VersionControlFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("No template file named '{}' in the template directory", name),
                "Check the template directory with --template-dir or SVCGEN_TEMPLATES_DIR".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' contains invalid syntax", template),
                "Fix the template or restore the shipped version".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::VersionControlFailed { .. } => vec![
                "Ensure git is installed and on your PATH".into(),
                "Re-run with --skip-git to suppress repository initialization".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::VersionControlFailed { .. } => ErrorCategory::Internal,
        }
    }
}
