//! Literal-substitution fallback renderer.
//!
//! Replaces every `{{key}}` occurrence for each known variable,
//! non-recursively. Unknown tokens pass through untouched; conditionals,
//! loops, and escaping are not interpreted. Correctness is guaranteed only
//! for the literal `{{name}}` form.

use std::path::PathBuf;

use svcgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateVars,
    error::SvcgenResult,
};
use tracing::instrument;

/// Renderer performing basic variable substitution on raw template text.
pub struct FallbackRenderer {
    root: PathBuf,
}

impl FallbackRenderer {
    /// Create a fallback renderer reading templates under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateRenderer for FallbackRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &str, vars: &TemplateVars) -> SvcgenResult<String> {
        let path = self.root.join(template);
        if !path.exists() {
            return Err(ApplicationError::TemplateNotFound {
                name: template.into(),
            }
            .into());
        }

        let mut content = std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            }
        })?;

        for (key, value) in vars.pairs() {
            content = content.replace(&format!("{{{{{key}}}}}"), value);
        }

        Ok(content)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn render_str(template: &str, name: &str) -> SvcgenResult<String> {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("t.tmpl"), template).unwrap();
        FallbackRenderer::new(tmp.path()).render("t.tmpl", &TemplateVars::new(name))
    }

    #[test]
    fn substitutes_all_three_variables() {
        let out = render_str(
            "{{service_name}} {{service_name_uppercase}} {{service_name_capitalized}}",
            "widget",
        )
        .unwrap();
        assert_eq!(out, "widget WIDGET Widget");
    }

    #[test]
    fn substitutes_repeated_occurrences() {
        let out = render_str("{{service_name}}-{{service_name}}", "widget").unwrap();
        assert_eq!(out, "widget-widget");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let out = render_str("{{unknown_var}} stays", "widget").unwrap();
        assert_eq!(out, "{{unknown_var}} stays");
    }

    #[test]
    fn control_structures_are_not_interpreted() {
        let out = render_str("{% if x %}kept literally{% endif %}", "widget").unwrap();
        assert_eq!(out, "{% if x %}kept literally{% endif %}");
    }

    #[test]
    fn missing_template_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = FallbackRenderer::new(tmp.path())
            .render("absent.tmpl", &TemplateVars::new("widget"))
            .unwrap_err();
        assert!(err.to_string().contains("Template not found"));
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let out = render_str("hello {{service_name}}\n", "widget").unwrap();
        assert_eq!(out, "hello widget\n");
    }
}
