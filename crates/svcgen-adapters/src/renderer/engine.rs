//! Expression-capable renderer backed by minijinja.

use std::path::PathBuf;

use minijinja::Environment;
use svcgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateVars,
    error::SvcgenResult,
};
use tracing::instrument;

/// Renderer backed by a full template engine.
///
/// The shipped templates only use `{{var}}` placeholders, but template
/// authors get the whole expression/control-structure syntax. Whitespace
/// handling mirrors the classic Jinja configuration: trailing block newlines
/// trimmed, leading block whitespace stripped, the template's final newline
/// preserved.
pub struct EngineRenderer {
    root: PathBuf,
    env: Environment<'static>,
}

impl EngineRenderer {
    /// Create an engine renderer reading templates under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        Self {
            root: root.into(),
            env,
        }
    }
}

impl TemplateRenderer for EngineRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &str, vars: &TemplateVars) -> SvcgenResult<String> {
        let path = self.root.join(template);
        if !path.exists() {
            return Err(ApplicationError::TemplateNotFound {
                name: template.into(),
            }
            .into());
        }

        let source = std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            }
        })?;

        self.env
            .render_named_str(template, &source, vars)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: template.into(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use svcgen_core::error::SvcgenError;
    use tempfile::tempdir;

    fn render_str(template: &str, name: &str) -> SvcgenResult<String> {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("t.tmpl"), template).unwrap();
        EngineRenderer::new(tmp.path()).render("t.tmpl", &TemplateVars::new(name))
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
    fn expressions_are_evaluated() {
        // Latent capability for template authors; the manifest never uses it.
        let out = render_str(
            "{% if service_name %}named: {{ service_name }}{% endif %}",
            "widget",
        )
        .unwrap();
        assert_eq!(out, "named: widget");
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let out = render_str("hello {{service_name}}\n", "widget").unwrap();
        assert_eq!(out, "hello widget\n");
    }

    #[test]
    fn missing_template_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = EngineRenderer::new(tmp.path())
            .render("absent.tmpl", &TemplateVars::new("widget"))
            .unwrap_err();
        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn malformed_syntax_is_a_rendering_failure() {
        let err = render_str("{% if unclosed %}", "widget").unwrap_err();
        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }
}
