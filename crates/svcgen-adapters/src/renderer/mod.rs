//! Template rendering strategies.
//!
//! Two substitutable implementations of the `TemplateRenderer` port:
//!
//! - [`EngineRenderer`] — full expression-capable engine (minijinja), built
//!   behind the `engine` feature, on by default.
//! - [`FallbackRenderer`] — literal `{{name}}` substring replacement, always
//!   compiled. Used when the engine capability is not built in.
//!
//! [`select_renderer`] picks the strategy once; the caller injects the
//! result into the scaffolder so no global capability flag exists.

#[cfg(feature = "engine")]
pub mod engine;
pub mod fallback;

#[cfg(feature = "engine")]
pub use engine::EngineRenderer;
pub use fallback::FallbackRenderer;

use std::path::PathBuf;

use svcgen_core::application::ports::TemplateRenderer;

/// Choose the rendering strategy for this process.
#[cfg(feature = "engine")]
pub fn select_renderer(template_root: PathBuf) -> Box<dyn TemplateRenderer> {
    Box::new(EngineRenderer::new(template_root))
}

/// Choose the rendering strategy for this process.
///
/// Without the `engine` feature the literal-substitution fallback is the
/// only option.
#[cfg(not(feature = "engine"))]
pub fn select_renderer(template_root: PathBuf) -> Box<dyn TemplateRenderer> {
    Box::new(FallbackRenderer::new(template_root))
}
