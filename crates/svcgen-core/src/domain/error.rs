//! Domain layer errors.

use thiserror::Error;

/// Errors raised by pure domain logic.
///
/// All variants are:
/// - Cloneable (callers may hold on to them)
/// - Categorizable (for CLI display)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The service name cannot be used as a directory / package name.
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { name, reason } => vec![
                format!("Service name '{}' is invalid: {}", name, reason),
                "Use only alphanumeric characters and hyphens".into(),
                "Examples: order-service, payments, user-profile".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
