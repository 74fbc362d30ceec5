//! Template variables derived from the service name.

use serde::Serialize;

/// The fixed set of substitution variables for one generation run.
///
/// Derived once from the service name at construction time and immutable
/// afterwards. The serialized field names are exactly the keys visible to
/// templates, so the struct can be fed to a render context directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVars {
    service_name: String,
    service_name_uppercase: String,
    service_name_capitalized: String,
}

impl TemplateVars {
    /// Derive all variables from a service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        let service_name = service_name.into();
        Self {
            service_name_uppercase: service_name.to_uppercase(),
            service_name_capitalized: capitalize(&service_name),
            service_name,
        }
    }

    /// The service name as the user supplied it.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Uppercased form, e.g. for environment variable prefixes.
    pub fn uppercase(&self) -> &str {
        &self.service_name_uppercase
    }

    /// Capitalized form, e.g. for headings.
    pub fn capitalized(&self) -> &str {
        &self.service_name_capitalized
    }

    /// Key/value view for renderers that substitute literally.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("service_name", &self.service_name),
            ("service_name_uppercase", &self.service_name_uppercase),
            ("service_name_capitalized", &self.service_name_capitalized),
        ]
    }
}

/// Uppercase the first character, lowercase the remainder.
///
/// `order-service` becomes `Order-service`, not `Order-Service` — the
/// generated README heading depends on exactly this form.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
