//! Template renderer and rendering functionality.
//! Wraps MiniJinja behind a small trait so generators can be tested
//! independently of the engine.
use crate::error::Result;
use crate::templates::Template;
use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template with the given context.
    ///
    /// # Arguments
    /// * `template` - Template to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &Template, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer whose output is never escaped.
    ///
    /// Generated files are YAML, shell and Dockerfile text, so the engine
    /// must not pick an escape mode from the template extension.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - Template addition fails
    ///   - Template retrieval fails
    ///   - Template rendering fails (including undefined variables)
    fn render(&self, template: &Template, context: &serde_json::Value) -> Result<String> {
        debug!("Rendering template '{}'.", template.name);
        let mut env = self.env.clone();
        env.add_template(template.name, template.source)?;

        let tmpl = env.get_template(template.name)?;

        Ok(tmpl.render(context)?)
    }
}
