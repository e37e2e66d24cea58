//! Jinja engine wrapper — [`TemplateEngine`].
//!
//! Undefined resolution is chainable: any missing dotted or indexed path
//! (`{{ attributes.absent }}`, `{{ content.array[0].text }}` with no
//! `content`) renders as the empty string instead of failing.

use minijinja::{Environment, UndefinedBehavior};

use crate::context::TemplateContext;
use crate::error::RenderError;

/// Name the session template is registered under.
const TEMPLATE_NAME: &str = "step";

/// Jinja engine with the session's single template compiled at construction.
///
/// Create once per processing session and reuse; [`TemplateEngine::render`]
/// takes `&self` and is safe to call concurrently.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Compile `source` into a ready-to-render engine.
    ///
    /// Template syntax errors surface here, before any record is processed.
    pub fn new(source: &str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.add_template_owned(TEMPLATE_NAME.to_string(), source.to_string())
            .map_err(RenderError::Compile)?;
        Ok(TemplateEngine { env })
    }

    /// Render the compiled template against `ctx`.
    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(RenderError::Render)?;
        template.render(ctx).map_err(RenderError::Render)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
