// ABOUTME: Templating-language evaluator built on Handlebars
// ABOUTME: Compiles serialized manifests as templates and renders them against parameters

use handlebars::Handlebars;
use std::collections::HashMap;

use super::error::{Result, TemplateError};
use super::helpers;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Missing keys render as empty strings instead of failing
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Output is YAML, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Compile `text` and render it with `params` as the root context.
    ///
    /// Syntax errors surface as [`TemplateError::Compile`], failures while
    /// rendering (for example a helper rejecting its input) as
    /// [`TemplateError::Execution`]. Values are written unescaped.
    pub fn evaluate(&self, text: &str, params: &HashMap<String, String>) -> Result<String> {
        self.validate_template(text)?;

        self.handlebars
            .render_template(text, params)
            .map_err(|e| TemplateError::Execution(e.to_string()))
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::Compile(e.to_string()))
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F)
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
