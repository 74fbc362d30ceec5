//! Service-name validation.
//!
//! Runs before any filesystem side effect. The rule: non-empty, ASCII
//! alphanumerics and hyphens only. Underscores are rejected — the name ends
//! up in DNS labels, image tags, and package names, where `_` misbehaves.

use crate::domain::error::DomainError;

/// Validate a service name for use as the service root directory name.
pub fn validate_service_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }

    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: format!("character '{bad}' is not allowed"),
        });
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
